#![forbid(unsafe_code)]

//! Headless pipeline for cloud architecture diagrams.
//!
//! Turns mini-language text into the node/edge model a node-based canvas
//! binds to: parse ([`archboard_core`]), layered layout
//! ([`archboard_layout`]), group bounding boxes ([`bounds`]), emitted
//! diagram model ([`emit`]).
//!
//! The pipeline is a one-shot initial-layout pass: it runs to completion
//! synchronously, holds no state between invocations, and is idempotent for
//! identical input text. Interactive edits (drag, resize, reconnect) happen
//! on the emitted snapshot in the rendering surface and are never observed
//! here.

pub mod bounds;
pub mod emit;
pub mod icons;

pub use archboard_core::{
    Direction, Error, GraphEdge, GraphNode, Group, ParsedGraph, Result, parse_graph,
    resolve_group_leaves,
};
pub use archboard_layout::{LayoutConfig, LayoutEdge, LayoutNode, Point, RankDir};
pub use emit::{DiagramEdge, DiagramModel, DiagramNode, NodeData, NodeStyle, Position};
pub use icons::IconRegistry;

use rustc_hash::FxHashMap;

/// Uniform leaf footprint. Labels are not measured; every service node gets
/// the same box regardless of text length.
pub const NODE_WIDTH: f64 = 96.0;
pub const NODE_HEIGHT: f64 = 72.0;
/// Padding added on every side of a group's member bounding box.
pub const GROUP_PADDING: f64 = 24.0;
/// Extra allowance on a group's top edge for its label band.
pub const GROUP_HEADER: f64 = 40.0;
pub const NODE_SEP: f64 = 50.0;
pub const RANK_SEP: f64 = 80.0;
pub const LAYOUT_MARGIN: f64 = 40.0;

#[derive(Debug, Clone)]
pub struct DiagramOptions {
    /// Overrides the direction parsed from the text header, when set.
    pub direction: Option<Direction>,
    pub nodesep: f64,
    pub ranksep: f64,
    pub margin_x: f64,
    pub margin_y: f64,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            direction: None,
            nodesep: NODE_SEP,
            ranksep: RANK_SEP,
            margin_x: LAYOUT_MARGIN,
            margin_y: LAYOUT_MARGIN,
        }
    }
}

fn rankdir(direction: Direction) -> RankDir {
    match direction {
        Direction::LR => RankDir::LR,
        Direction::RL => RankDir::RL,
        Direction::TB => RankDir::TB,
        Direction::BT => RankDir::BT,
    }
}

/// Runs the full pipeline over mini-language text.
///
/// Never fails: unparseable fragments degrade to fewer elements and an empty
/// input produces an empty model.
pub fn build_diagram(text: &str, icons: &IconRegistry, options: &DiagramOptions) -> DiagramModel {
    let parsed = parse_graph(text);
    tracing::debug!(
        nodes = parsed.nodes.len(),
        edges = parsed.edges.len(),
        groups = parsed.groups.len(),
        "parsed graph text"
    );
    layout_parsed(&parsed, icons, options)
}

/// Lays out an already-parsed graph and assembles the emitted model.
pub fn layout_parsed(
    parsed: &ParsedGraph,
    icons: &IconRegistry,
    options: &DiagramOptions,
) -> DiagramModel {
    let direction = options.direction.unwrap_or(parsed.direction);

    let layout_nodes: Vec<LayoutNode> = parsed
        .nodes
        .iter()
        .map(|n| LayoutNode {
            id: n.id.clone(),
            width: NODE_WIDTH,
            height: NODE_HEIGHT,
        })
        .collect();
    let layout_edges: Vec<LayoutEdge> = parsed
        .edges
        .iter()
        .map(|e| LayoutEdge {
            source: e.source.clone(),
            target: e.target.clone(),
        })
        .collect();
    let config = LayoutConfig {
        rankdir: rankdir(direction),
        nodesep: options.nodesep,
        ranksep: options.ranksep,
        margin_x: options.margin_x,
        margin_y: options.margin_y,
    };

    // The layout engine hands back centers; everything downstream (group
    // bounds, the emitted model) works with top-left origins.
    let centers = archboard_layout::layout(&layout_nodes, &layout_edges, &config);
    let positions: FxHashMap<String, Point> = centers
        .into_iter()
        .map(|(id, c)| {
            (
                id,
                Point {
                    x: c.x - NODE_WIDTH / 2.0,
                    y: c.y - NODE_HEIGHT / 2.0,
                },
            )
        })
        .collect();

    let leaves = resolve_group_leaves(parsed);
    let rects = bounds::resolve_group_rects(
        &parsed.groups,
        &leaves,
        &positions,
        NODE_WIDTH,
        NODE_HEIGHT,
        GROUP_PADDING,
        GROUP_HEADER,
    );
    tracing::debug!(groups = rects.len(), "resolved group bounding boxes");

    emit::assemble(parsed, &rects, &positions, icons)
}

/// Bundles an icon registry and options so UI integrations don't thread
/// per-call parameters around.
#[derive(Debug, Clone, Default)]
pub struct Diagrammer {
    pub icons: IconRegistry,
    pub options: DiagramOptions,
}

impl Diagrammer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icons(mut self, icons: IconRegistry) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.options.direction = Some(direction);
        self
    }

    pub fn build(&self, text: &str) -> DiagramModel {
        build_diagram(text, &self.icons, &self.options)
    }
}
