//! Rank assignment via longest-path layering.
//!
//! Requires the cycle-breaking phase to have run. Each node's rank is the
//! minimum over its out-edges of `rank(head) - 1`, with sinks at 0; ranks are
//! then shifted so the smallest is 0. Longest-path layering is exact for the
//! "source layer precedes target layer" contract and cheap enough that a
//! tighter ranker is not worth carrying for diagram-sized graphs.

use crate::graph::Graph;

pub(crate) fn longest_path(g: &mut Graph) {
    let successors = g.successors();
    let mut rank: Vec<Option<i32>> = vec![None; g.node_count()];

    fn dfs(v: usize, successors: &[Vec<(usize, usize)>], rank: &mut [Option<i32>]) -> i32 {
        if let Some(r) = rank[v] {
            return r;
        }
        let r = successors[v]
            .iter()
            .map(|&(_, w)| dfs(w, successors, rank) - 1)
            .min()
            .unwrap_or(0);
        rank[v] = Some(r);
        r
    }

    for v in 0..g.node_count() {
        dfs(v, &successors, &mut rank);
    }

    let min = rank.iter().filter_map(|r| *r).min().unwrap_or(0);
    for (v, r) in rank.into_iter().enumerate() {
        g.rank[v] = r.unwrap_or(0) - min;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::{LayoutEdge, LayoutNode};

    fn node(id: &str) -> LayoutNode {
        LayoutNode {
            id: id.to_string(),
            width: 10.0,
            height: 10.0,
        }
    }

    fn edge(v: &str, w: &str) -> LayoutEdge {
        LayoutEdge {
            source: v.to_string(),
            target: w.to_string(),
        }
    }

    #[test]
    fn every_edge_spans_at_least_one_rank() {
        let nodes = [node("a"), node("b"), node("c"), node("d")];
        let edges = [
            edge("a", "b"),
            edge("a", "c"),
            edge("b", "d"),
            edge("c", "d"),
        ];
        let mut g = Graph::build(&nodes, &edges);
        longest_path(&mut g);
        for e in &g.edges {
            assert!(
                g.rank[e.w] - g.rank[e.v] >= 1,
                "edge {} -> {} does not advance rank",
                g.ids[e.v],
                g.ids[e.w]
            );
        }
    }

    #[test]
    fn ranks_are_normalized_to_start_at_zero() {
        let nodes = [node("a"), node("b"), node("c")];
        let edges = [edge("a", "b"), edge("b", "c")];
        let mut g = Graph::build(&nodes, &edges);
        longest_path(&mut g);
        assert_eq!(g.rank, vec![0, 1, 2]);
    }

    #[test]
    fn isolated_nodes_land_on_rank_zero() {
        let nodes = [node("a"), node("b")];
        let mut g = Graph::build(&nodes, &[]);
        longest_path(&mut g);
        assert_eq!(g.rank, vec![0, 0]);
    }
}
