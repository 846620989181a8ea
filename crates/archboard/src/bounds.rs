//! Group bounding-box resolution.
//!
//! Every group rectangle is derived independently from the same global leaf
//! position table: the containment resolver already made leaf sets fully
//! transitive, so an ancestor's rectangle needs no knowledge of its
//! descendants' rectangles. Rectangles are not packed against each other;
//! visual non-overlap falls out of the underlying layered leaf layout.

use archboard_core::Group;
use archboard_layout::Point;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned bounding box of the given leaves (top-left positions plus a
/// fixed footprint), expanded by `padding` on all sides and `header` on the
/// top edge. Returns `None` when no leaf has a known position.
pub fn bounding_rect(
    leaf_ids: &[String],
    positions: &FxHashMap<String, Point>,
    node_width: f64,
    node_height: f64,
    padding: f64,
    header: f64,
) -> Option<Rect> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for id in leaf_ids {
        let Some(p) = positions.get(id) else {
            continue;
        };
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x + node_width);
        max_y = max_y.max(p.y + node_height);
    }

    if !min_x.is_finite() {
        return None;
    }

    Some(Rect {
        x: min_x - padding,
        y: min_y - padding - header,
        width: (max_x - min_x) + 2.0 * padding,
        height: (max_y - min_y) + 2.0 * padding + header,
    })
}

/// Resolves a rectangle for every group with at least one positioned leaf,
/// in group declaration order. Groups without resolvable leaves are dropped
/// here so no degenerate empty rectangles reach the rendering surface.
pub fn resolve_group_rects(
    groups: &[Group],
    leaves: &IndexMap<String, Vec<String>>,
    positions: &FxHashMap<String, Point>,
    node_width: f64,
    node_height: f64,
    padding: f64,
    header: f64,
) -> Vec<(String, Rect)> {
    groups
        .iter()
        .filter_map(|group| {
            let leaf_ids = leaves.get(&group.id)?;
            let rect = bounding_rect(
                leaf_ids,
                positions,
                node_width,
                node_height,
                padding,
                header,
            )?;
            Some((group.id.clone(), rect))
        })
        .collect()
}
