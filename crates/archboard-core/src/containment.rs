//! Recursive group-membership resolution.
//!
//! Groups nest through their `members` lists, so computing a container's
//! geometry needs the transitive set of leaf nodes under it. Membership data
//! comes from unchecked input text, which means the member relation may be
//! malformed (a group reaching itself through a nested chain). Traversal
//! therefore threads an explicit visited set per root: an id that has already
//! been seen in the current traversal contributes nothing further.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::model::{Group, ParsedGraph};

/// Resolves every group to its transitive leaf node ids, in member order.
///
/// The returned map preserves group declaration order. Groups that resolve to
/// no leaves are kept here (with an empty list) so callers can decide how to
/// treat them; the layout pipeline drops them from emitted output.
pub fn resolve_group_leaves(graph: &ParsedGraph) -> IndexMap<String, Vec<String>> {
    let node_ids: FxHashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    let groups_by_id: FxHashMap<&str, &Group> =
        graph.groups.iter().map(|g| (g.id.as_str(), g)).collect();

    let mut resolved: IndexMap<String, Vec<String>> = IndexMap::new();
    for group in &graph.groups {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        seen.insert(group.id.clone());
        let mut leaves: Vec<String> = Vec::new();
        collect_leaves(group, &groups_by_id, &node_ids, &mut seen, &mut leaves);
        resolved.insert(group.id.clone(), leaves);
    }
    resolved
}

fn collect_leaves(
    group: &Group,
    groups_by_id: &FxHashMap<&str, &Group>,
    node_ids: &FxHashSet<&str>,
    seen: &mut FxHashSet<String>,
    leaves: &mut Vec<String>,
) {
    for member in &group.members {
        if !seen.insert(member.clone()) {
            continue;
        }
        if let Some(nested) = groups_by_id.get(member.as_str()) {
            collect_leaves(nested, groups_by_id, node_ids, seen, leaves);
        } else if node_ids.contains(member.as_str()) {
            leaves.push(member.clone());
        }
        // Ids that are neither a known node nor a group contribute nothing.
    }
}
