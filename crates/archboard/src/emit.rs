//! Final diagram model assembly.
//!
//! Field names follow the rendering surface's contract exactly
//! (`parentNode`, `extent`, `style.width`), so the serialized form can be
//! handed to a node-based canvas without adaptation. Groups are emitted
//! before leaves so a surface painting in array order draws container
//! rectangles beneath their contents; outer groups precede nested ones
//! because their headers appear first in the source text.

use archboard_core::ParsedGraph;
use archboard_layout::Point;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::bounds::Rect;
use crate::icons::IconRegistry;
use crate::{NODE_HEIGHT, NODE_WIDTH};

pub const SERVICE_NODE_TYPE: &str = "serviceNode";
pub const GROUP_NODE_TYPE: &str = "groupNode";
pub const EDGE_TYPE: &str = "smoothstep";

/// Constrains dragging of a grouped node to its parent rectangle.
const EXTENT_PARENT: &str = "parent";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeData {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeStyle {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: NodeData,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_node: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<String>,
    pub style: NodeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiagramModel {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

pub fn assemble(
    parsed: &ParsedGraph,
    group_rects: &[(String, Rect)],
    positions: &FxHashMap<String, Point>,
    icons: &IconRegistry,
) -> DiagramModel {
    let emitted_groups: FxHashSet<&str> = group_rects.iter().map(|(id, _)| id.as_str()).collect();

    let mut nodes: Vec<DiagramNode> = Vec::with_capacity(group_rects.len() + parsed.nodes.len());

    for (group_id, rect) in group_rects {
        let label = parsed
            .group(group_id)
            .map(|g| g.label.clone())
            .unwrap_or_else(|| group_id.clone());
        nodes.push(DiagramNode {
            id: group_id.clone(),
            kind: GROUP_NODE_TYPE.to_string(),
            data: NodeData {
                image: icons.resolve(&label).map(str::to_string),
                label,
            },
            position: Position {
                x: rect.x,
                y: rect.y,
            },
            parent_node: None,
            extent: None,
            style: NodeStyle {
                width: rect.width,
                height: rect.height,
            },
        });
    }

    for node in &parsed.nodes {
        let Some(p) = positions.get(&node.id) else {
            continue;
        };
        // A parent that was dropped (no resolvable leaves) must not leave a
        // dangling reference on the child.
        let parent_node = node
            .parent_group
            .as_deref()
            .filter(|gid| emitted_groups.contains(gid))
            .map(str::to_string);
        let extent = parent_node.as_ref().map(|_| EXTENT_PARENT.to_string());
        nodes.push(DiagramNode {
            id: node.id.clone(),
            kind: SERVICE_NODE_TYPE.to_string(),
            data: NodeData {
                label: node.label.clone(),
                image: icons.resolve(&node.label).map(str::to_string),
            },
            position: Position { x: p.x, y: p.y },
            parent_node,
            extent,
            style: NodeStyle {
                width: NODE_WIDTH,
                height: NODE_HEIGHT,
            },
        });
    }

    let edges: Vec<DiagramEdge> = parsed
        .edges
        .iter()
        .map(|e| DiagramEdge {
            id: e.id.clone(),
            source: e.source.clone(),
            target: e.target.clone(),
            kind: EDGE_TYPE.to_string(),
        })
        .collect();

    DiagramModel { nodes, edges }
}
