//! Internal index-based graph model.
//!
//! Node ids are interned to indices on build; all layout phases work on
//! indices and only the public entry point maps back to ids.

use rustc_hash::FxHashMap;

use crate::{LayoutEdge, LayoutNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    pub v: usize,
    pub w: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct Graph {
    /// Node ids in insertion order; index positions are stable for the whole
    /// layout pass.
    pub ids: Vec<String>,
    pub width: Vec<f64>,
    pub height: Vec<f64>,
    pub edges: Vec<Edge>,
    /// Rank per node, assigned by the ranking phase.
    pub rank: Vec<i32>,
}

impl Graph {
    pub fn build(nodes: &[LayoutNode], edges: &[LayoutEdge]) -> Self {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut ids: Vec<String> = Vec::with_capacity(nodes.len());
        let mut width: Vec<f64> = Vec::with_capacity(nodes.len());
        let mut height: Vec<f64> = Vec::with_capacity(nodes.len());

        for node in nodes {
            if index.contains_key(node.id.as_str()) {
                continue;
            }
            index.insert(node.id.as_str(), ids.len());
            ids.push(node.id.clone());
            width.push(node.width);
            height.push(node.height);
        }

        let mut out_edges: Vec<Edge> = Vec::with_capacity(edges.len());
        for edge in edges {
            let (Some(&v), Some(&w)) = (
                index.get(edge.source.as_str()),
                index.get(edge.target.as_str()),
            ) else {
                continue;
            };
            // Self-loops carry no layering information and must not
            // constrain rank assignment.
            if v == w {
                continue;
            }
            out_edges.push(Edge { v, w });
        }

        let rank = vec![0; ids.len()];
        Self {
            ids,
            width,
            height,
            edges: out_edges,
            rank,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Out-edge adjacency as `(edge index, head node)` per node.
    pub fn successors(&self) -> Vec<Vec<(usize, usize)>> {
        let mut out: Vec<Vec<(usize, usize)>> = vec![Vec::new(); self.node_count()];
        for (i, e) in self.edges.iter().enumerate() {
            out[e.v].push((i, e.w));
        }
        out
    }

    /// In-edge adjacency as `(edge index, tail node)` per node.
    pub fn predecessors(&self) -> Vec<Vec<(usize, usize)>> {
        let mut out: Vec<Vec<(usize, usize)>> = vec![Vec::new(); self.node_count()];
        for (i, e) in self.edges.iter().enumerate() {
            out[e.w].push((i, e.v));
        }
        out
    }

    pub fn reverse_edge(&mut self, edge_ix: usize) {
        let e = &mut self.edges[edge_ix];
        std::mem::swap(&mut e.v, &mut e.w);
    }
}
