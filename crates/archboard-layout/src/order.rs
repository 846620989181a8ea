//! Crossing reduction.
//!
//! An initial DFS order seeds the layers, then alternating down/up barycenter
//! sweeps reorder each rank by the mean position of its neighbors in the
//! fixed adjacent rank. The best layering seen (fewest crossings) is kept;
//! the loop stops after four sweeps without improvement.
//!
//! Crossings are counted between consecutive ranks only. Edges spanning more
//! than one rank are not split into dummy chains, so their intermediate
//! crossings are invisible to the counter; for diagram-sized graphs the
//! resulting orderings are indistinguishable in practice.

use crate::graph::Graph;

pub(crate) fn order(g: &Graph) -> Vec<Vec<usize>> {
    let mut layers = init_order(g);
    if layers.len() <= 1 {
        return layers;
    }

    let predecessors = g.predecessors();
    let successors = g.successors();

    let mut best = layers.clone();
    let mut best_cc = cross_count(g, &layers);

    let mut i: usize = 0;
    let mut last_best: usize = 0;
    while last_best < 4 && best_cc > 0 {
        if i % 2 == 0 {
            sweep_down(&mut layers, &predecessors, g.node_count());
        } else {
            sweep_up(&mut layers, &successors, g.node_count());
        }

        let cc = cross_count(g, &layers);
        if cc < best_cc {
            best_cc = cc;
            best = layers.clone();
            last_best = 0;
        }

        i += 1;
        last_best += 1;
    }

    best
}

/// Seeds layers with a DFS pre-order over nodes sorted by (rank, insertion
/// index). The insertion-index tie-breaker keeps the seed stable; an
/// unstable seed drifts symmetric layouts between runs.
fn init_order(g: &Graph) -> Vec<Vec<usize>> {
    let max_rank = g.rank.iter().copied().max().unwrap_or(0);
    let mut layers: Vec<Vec<usize>> = vec![Vec::new(); (max_rank + 1).max(1) as usize];

    let successors = g.successors();
    let mut visited = vec![false; g.node_count()];

    fn dfs(
        v: usize,
        g: &Graph,
        successors: &[Vec<(usize, usize)>],
        visited: &mut [bool],
        layers: &mut [Vec<usize>],
    ) {
        if visited[v] {
            return;
        }
        visited[v] = true;
        layers[g.rank[v].max(0) as usize].push(v);
        for &(_, w) in &successors[v] {
            dfs(w, g, successors, visited, layers);
        }
    }

    let mut roots: Vec<usize> = (0..g.node_count()).collect();
    roots.sort_by_key(|&v| (g.rank[v], v));
    for v in roots {
        dfs(v, g, &successors, &mut visited, &mut layers);
    }

    layers
}

fn sweep_down(layers: &mut [Vec<usize>], predecessors: &[Vec<(usize, usize)>], node_count: usize) {
    let mut pos = positions(layers, node_count);
    for r in 1..layers.len() {
        reorder_layer(&mut layers[r], predecessors, &mut pos);
    }
}

fn sweep_up(layers: &mut [Vec<usize>], successors: &[Vec<(usize, usize)>], node_count: usize) {
    let mut pos = positions(layers, node_count);
    for r in (0..layers.len() - 1).rev() {
        reorder_layer(&mut layers[r], successors, &mut pos);
    }
}

fn positions(layers: &[Vec<usize>], node_count: usize) -> Vec<usize> {
    let mut pos = vec![0usize; node_count];
    for layer in layers {
        for (i, &v) in layer.iter().enumerate() {
            pos[v] = i;
        }
    }
    pos
}

/// Reorders one rank by neighbor barycenter. Nodes without neighbors keep
/// their current position as the sort key, so they stay put relative to the
/// nodes that moved around them.
fn reorder_layer(layer: &mut Vec<usize>, neighbors: &[Vec<(usize, usize)>], pos: &mut [usize]) {
    let keys: Vec<(usize, f64)> = layer
        .iter()
        .map(|&v| {
            let adj = &neighbors[v];
            let key = if adj.is_empty() {
                pos[v] as f64
            } else {
                adj.iter().map(|&(_, n)| pos[n] as f64).sum::<f64>() / adj.len() as f64
            };
            (v, key)
        })
        .collect();

    let mut sorted = keys;
    sorted.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    layer.clear();
    for (i, (v, _)) in sorted.into_iter().enumerate() {
        layer.push(v);
        pos[v] = i;
    }
}

fn cross_count(g: &Graph, layers: &[Vec<usize>]) -> usize {
    let pos = positions(layers, g.node_count());

    let mut per_rank: Vec<Vec<(usize, usize)>> = vec![Vec::new(); layers.len()];
    for e in &g.edges {
        let (rv, rw) = (g.rank[e.v], g.rank[e.w]);
        if rw == rv + 1 {
            per_rank[rv.max(0) as usize].push((pos[e.v], pos[e.w]));
        }
    }

    let mut cc: usize = 0;
    for spans in &mut per_rank {
        spans.sort_unstable();
        for i in 0..spans.len() {
            for j in (i + 1)..spans.len() {
                let (a, b) = (spans[i], spans[j]);
                if a.0 < b.0 && a.1 > b.1 {
                    cc += 1;
                }
            }
        }
    }
    cc
}
