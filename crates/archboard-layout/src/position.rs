//! Coordinate assignment.
//!
//! Works in a top-to-bottom frame (rank advances along y, order along x) and
//! applies the direction transform last. For horizontal directions the node
//! footprints are swapped going in and the axes swapped coming out, so
//! separations always apply to the visual axes the caller configured.

use crate::graph::Graph;
use crate::{LayoutConfig, Point, RankDir};

pub(crate) fn assign(g: &Graph, layers: &[Vec<usize>], config: &LayoutConfig) -> Vec<Point> {
    let horizontal = config.rankdir.is_horizontal();
    let size = |v: usize| -> (f64, f64) {
        if horizontal {
            (g.height[v], g.width[v])
        } else {
            (g.width[v], g.height[v])
        }
    };

    let mut rank_heights: Vec<f64> = Vec::with_capacity(layers.len());
    let mut rank_widths: Vec<f64> = Vec::with_capacity(layers.len());
    for layer in layers {
        let mut h: f64 = 0.0;
        let mut w: f64 = 0.0;
        for (i, &v) in layer.iter().enumerate() {
            let (nw, nh) = size(v);
            h = h.max(nh);
            w += nw;
            if i + 1 < layer.len() {
                w += config.nodesep;
            }
        }
        rank_heights.push(h);
        rank_widths.push(w);
    }
    let max_rank_width = rank_widths.iter().copied().fold(0.0_f64, f64::max);

    let mut points = vec![Point { x: 0.0, y: 0.0 }; g.node_count()];
    let mut y_cursor: f64 = 0.0;
    for (rank_ix, layer) in layers.iter().enumerate() {
        let rank_h = rank_heights[rank_ix];
        let y = y_cursor + rank_h / 2.0;

        // Center each rank on the widest one.
        let mut x_cursor = (max_rank_width - rank_widths[rank_ix]) / 2.0;
        for &v in layer {
            let (nw, _) = size(v);
            points[v] = Point {
                x: x_cursor + nw / 2.0,
                y,
            };
            x_cursor += nw + config.nodesep;
        }

        y_cursor += rank_h;
        if rank_ix + 1 < layers.len() {
            y_cursor += config.ranksep;
        }
    }
    let total_extent = y_cursor;

    for p in &mut points {
        *p = match config.rankdir {
            RankDir::TB => *p,
            RankDir::BT => Point {
                x: p.x,
                y: total_extent - p.y,
            },
            RankDir::LR => Point { x: p.y, y: p.x },
            RankDir::RL => Point {
                x: total_extent - p.y,
                y: p.x,
            },
        };
        p.x += config.margin_x;
        p.y += config.margin_y;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::{LayoutEdge, LayoutNode};

    fn node(id: &str) -> LayoutNode {
        LayoutNode {
            id: id.to_string(),
            width: 100.0,
            height: 40.0,
        }
    }

    fn edge(v: &str, w: &str) -> LayoutEdge {
        LayoutEdge {
            source: v.to_string(),
            target: w.to_string(),
        }
    }

    fn positioned(rankdir: RankDir) -> (Graph, Vec<Point>) {
        let nodes = [node("a"), node("b")];
        let edges = [edge("a", "b")];
        let mut g = Graph::build(&nodes, &edges);
        crate::rank::longest_path(&mut g);
        let layers = crate::order::order(&g);
        let config = LayoutConfig {
            rankdir,
            ..LayoutConfig::default()
        };
        let points = assign(&g, &layers, &config);
        (g, points)
    }

    #[test]
    fn tb_advances_along_y() {
        let (_, points) = positioned(RankDir::TB);
        assert!(points[0].y < points[1].y);
        assert_eq!(points[0].x, points[1].x);
    }

    #[test]
    fn lr_advances_along_x() {
        let (_, points) = positioned(RankDir::LR);
        assert!(points[0].x < points[1].x);
        assert_eq!(points[0].y, points[1].y);
    }

    #[test]
    fn bt_and_rl_reverse_their_axis() {
        let (_, bt) = positioned(RankDir::BT);
        assert!(bt[0].y > bt[1].y);

        let (_, rl) = positioned(RankDir::RL);
        assert!(rl[0].x > rl[1].x);
    }

    #[test]
    fn margins_shift_every_node() {
        let nodes = [node("a")];
        let mut g = Graph::build(&nodes, &[]);
        crate::rank::longest_path(&mut g);
        let layers = crate::order::order(&g);
        let config = LayoutConfig {
            margin_x: 15.0,
            margin_y: 25.0,
            ..LayoutConfig::default()
        };
        let points = assign(&g, &layers, &config);
        assert_eq!(points[0].x, 50.0 + 15.0);
        assert_eq!(points[0].y, 20.0 + 25.0);
    }
}
