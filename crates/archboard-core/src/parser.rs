//! Line-oriented scanner for the flowchart mini-language.
//!
//! Three construct kinds are recognized: node declarations (`ID[Label]`),
//! edge chains (`A --> B --> C`, optionally with `-->|label|` spans), and
//! `subgraph <header> ... end` blocks. Everything else is skipped. The
//! scanner never fails: malformed fragments simply do not match, and the
//! result degrades to fewer nodes/edges. This leniency is a contract, not an
//! oversight: partial input from an editing session must still render.
//!
//! Precedence rules are deterministic by construction:
//! - the first bracketed declaration of an id fixes its label; bare
//!   references never override a declaration,
//! - a reference inside a subgraph body attributes the node to that group;
//!   the first group in document order wins and top-level references never
//!   detach a node from its group.

use indexmap::IndexMap;
use indexmap::map::Entry;
use rustc_hash::FxHashSet;

use crate::model::{Direction, GraphEdge, GraphNode, Group, ParsedGraph};

const ARROW: &str = "-->";

/// Parses mini-language text into the flat semantic model.
pub fn parse_graph(text: &str) -> ParsedGraph {
    Parser::default().run(text)
}

#[derive(Default)]
struct Parser {
    direction: Option<Direction>,
    nodes: IndexMap<String, GraphNode>,
    edges: IndexMap<String, GraphEdge>,
    groups: IndexMap<String, Group>,
    /// Ids whose label came from a bracketed declaration (as opposed to a
    /// bare reference that defaulted the label to the id).
    declared: FxHashSet<String>,
    /// Open subgraph blocks, innermost last. `None` marks a block whose
    /// header did not parse; it still consumes its matching `end`.
    stack: Vec<Option<String>>,
}

impl Parser {
    fn run(mut self, text: &str) -> ParsedGraph {
        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with("%%") {
                continue;
            }
            if let Some(header) = keyword_rest(line, "subgraph") {
                self.open_group(header);
                continue;
            }
            if line == "end" {
                self.stack.pop();
                continue;
            }
            if let Some(rest) =
                keyword_rest(line, "flowchart").or_else(|| keyword_rest(line, "graph"))
            {
                if self.direction.is_none() {
                    self.direction = Direction::from_keyword(rest);
                }
                continue;
            }
            self.scan_statement(line);
        }

        ParsedGraph {
            direction: self.direction.unwrap_or_default(),
            nodes: self.nodes.into_values().collect(),
            edges: self.edges.into_values().collect(),
            groups: self.groups.into_values().collect(),
        }
    }

    fn current_group(&self) -> Option<String> {
        self.stack.iter().rev().find_map(|g| g.clone())
    }

    fn open_group(&mut self, header: &str) {
        let header = header.trim();
        if header.is_empty() {
            self.stack.push(None);
            return;
        }

        let id = Group::id_from_header(header);
        if let Entry::Vacant(v) = self.groups.entry(id.clone()) {
            v.insert(Group {
                id: id.clone(),
                label: header.to_string(),
                members: Vec::new(),
            });
        }

        if let Some(parent) = self.current_group() {
            if parent != id {
                add_member(&mut self.groups, &parent, &id);
            }
        }
        self.stack.push(Some(id));
    }

    fn scan_statement(&mut self, line: &str) {
        let group = self.current_group();

        if !line.contains(ARROW) {
            if let Some((id, label)) = parse_node_ref(line) {
                self.register_node(id, label, group.as_deref());
            }
            return;
        }

        let mut prev: Option<String> = None;
        for segment in line.split(ARROW) {
            let segment = strip_edge_label(segment);
            let Some((id, label)) = parse_node_ref(segment) else {
                // Chain breaks on an unparseable endpoint; later pairs may
                // still match.
                prev = None;
                continue;
            };
            self.register_node(id.clone(), label, group.as_deref());
            if let Some(source) = prev.take() {
                self.add_edge(source, id.clone());
            }
            prev = Some(id);
        }
    }

    fn register_node(&mut self, id: String, label: Option<String>, group: Option<&str>) {
        match self.nodes.entry(id.clone()) {
            Entry::Occupied(mut e) => {
                if let Some(label) = label {
                    // A declaration upgrades a node first seen as a bare
                    // reference; among declarations the first one wins.
                    if self.declared.insert(id.clone()) {
                        e.get_mut().label = label;
                    }
                }
                if e.get().parent_group.is_none() {
                    if let Some(gid) = group {
                        e.get_mut().parent_group = Some(gid.to_string());
                        add_member(&mut self.groups, gid, &id);
                    }
                }
            }
            Entry::Vacant(v) => {
                if label.is_some() {
                    self.declared.insert(id.clone());
                }
                let label = label.unwrap_or_else(|| id.clone());
                v.insert(GraphNode {
                    id: id.clone(),
                    label,
                    parent_group: group.map(str::to_string),
                });
                if let Some(gid) = group {
                    add_member(&mut self.groups, gid, &id);
                }
            }
        }
    }

    fn add_edge(&mut self, source: String, target: String) {
        let edge = GraphEdge::new(source, target);
        if let Entry::Vacant(v) = self.edges.entry(edge.id.clone()) {
            v.insert(edge);
        }
    }
}

fn add_member(groups: &mut IndexMap<String, Group>, group_id: &str, member: &str) {
    let Some(group) = groups.get_mut(group_id) else {
        return;
    };
    if !group.members.iter().any(|m| m == member) {
        group.members.push(member.to_string());
    }
}

/// Matches `<kw>` followed by whitespace (or end of line) and returns the
/// remainder, so that e.g. `subgraphs` is not mistaken for a block opener.
fn keyword_rest<'a>(line: &'a str, kw: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(kw)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.starts_with(char::is_whitespace).then(|| rest.trim())
}

/// Drops a leading `|label|` span left over from splitting on the arrow.
fn strip_edge_label(segment: &str) -> &str {
    let s = segment.trim_start();
    if let Some(rest) = s.strip_prefix('|') {
        if let Some(end) = rest.find('|') {
            return &rest[end + 1..];
        }
    }
    s
}

/// Parses a node reference: an identifier with an optional bracketed label.
/// Trailing junk after the closing bracket is tolerated and ignored.
fn parse_node_ref(segment: &str) -> Option<(String, Option<String>)> {
    let s = segment.trim();
    let id_end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(s.len());
    if id_end == 0 {
        return None;
    }
    let (id, rest) = s.split_at(id_end);

    let label = rest
        .trim_start()
        .strip_prefix('[')
        .and_then(|inner| inner.rfind(']').map(|end| inner[..end].trim().to_string()))
        .filter(|label| !label.is_empty());

    Some((id.to_string(), label))
}
