use archboard_core::model::{Direction, GraphNode, Group, ParsedGraph};
use archboard_core::resolve_group_leaves;

fn leaf(id: &str) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        label: id.to_string(),
        parent_group: None,
    }
}

fn group(id: &str, members: &[&str]) -> Group {
    Group {
        id: id.to_string(),
        label: id.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
    }
}

fn graph(nodes: Vec<GraphNode>, groups: Vec<Group>) -> ParsedGraph {
    ParsedGraph {
        direction: Direction::LR,
        nodes,
        edges: Vec::new(),
        groups,
    }
}

#[test]
fn nested_groups_resolve_transitive_leaves() {
    let g = graph(
        vec![leaf("a"), leaf("b"), leaf("c")],
        vec![
            group("outer", &["a", "inner"]),
            group("inner", &["b", "c"]),
        ],
    );
    let resolved = resolve_group_leaves(&g);
    assert_eq!(resolved["outer"], vec!["a", "b", "c"]);
    assert_eq!(resolved["inner"], vec!["b", "c"]);
}

#[test]
fn cyclic_membership_terminates_with_a_finite_leaf_set() {
    let g = graph(
        vec![leaf("a"), leaf("b")],
        vec![
            group("one", &["a", "two"]),
            group("two", &["b", "one"]),
        ],
    );
    let resolved = resolve_group_leaves(&g);
    // Each root sees the whole cycle once; revisits contribute nothing.
    assert_eq!(resolved["one"], vec!["a", "b"]);
    assert_eq!(resolved["two"], vec!["b", "a"]);
}

#[test]
fn a_group_listing_itself_contributes_its_direct_leaves_once() {
    let g = graph(
        vec![leaf("a")],
        vec![group("loopy", &["loopy", "a"])],
    );
    let resolved = resolve_group_leaves(&g);
    assert_eq!(resolved["loopy"], vec!["a"]);
}

#[test]
fn empty_and_unresolvable_groups_resolve_to_no_leaves() {
    let g = graph(
        vec![leaf("a")],
        vec![
            group("empty", &[]),
            group("ghosts", &["nope", "missing"]),
        ],
    );
    let resolved = resolve_group_leaves(&g);
    assert!(resolved["empty"].is_empty());
    assert!(resolved["ghosts"].is_empty());
}

#[test]
fn duplicate_members_are_counted_once_in_member_order() {
    let g = graph(
        vec![leaf("a"), leaf("b")],
        vec![group("g", &["b", "a", "b"])],
    );
    let resolved = resolve_group_leaves(&g);
    assert_eq!(resolved["g"], vec!["b", "a"]);
}
