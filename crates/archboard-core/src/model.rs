use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Primary layout axis. `LR` is the default for architecture diagrams
/// (request flow reads left to right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    LR,
    RL,
    TB,
    BT,
}

impl Direction {
    /// Lenient keyword lookup used by the parser's `flowchart <dir>` header.
    /// Returns `None` for unrecognized keywords instead of an error.
    pub(crate) fn from_keyword(raw: &str) -> Option<Self> {
        match raw.trim() {
            "LR" => Some(Self::LR),
            "RL" => Some(Self::RL),
            "TB" | "TD" => Some(Self::TB),
            "BT" => Some(Self::BT),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(&s.trim().to_ascii_uppercase()).ok_or_else(|| {
            crate::error::Error::UnknownDirection {
                raw: s.trim().to_string(),
            }
        })
    }
}

/// A single service/entity in the diagram (not a container).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    /// Id of the immediate owning group, if the node was referenced inside a
    /// `subgraph` body. A node belongs to at most one group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_group: Option<String>,
}

/// A directed edge. The id is derived from the endpoint ids so that repeated
/// parses of the same text yield identical edge ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{source}-{target}"),
            source,
            target,
        }
    }
}

/// A named container declared by a `subgraph <header> ... end` block.
///
/// `members` lists the ids referenced in the block's immediate body, in
/// document order: leaf node ids and the ids of directly nested groups.
/// Groups form a forest; cycles can only arise from malformed input and are
/// tolerated by the containment resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub label: String,
    pub members: Vec<String>,
}

impl Group {
    /// Derives the group id from the subgraph header: internal whitespace is
    /// collapsed to a single `_` so the id is stable regardless of spacing.
    pub fn id_from_header(header: &str) -> String {
        header.split_whitespace().collect::<Vec<_>>().join("_")
    }
}

/// Flat parse result: the immutable input to one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedGraph {
    pub direction: Direction,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub groups: Vec<Group>,
}

impl ParsedGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.groups.is_empty()
    }
}
