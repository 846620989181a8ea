//! Cycle breaking.
//!
//! Ranking needs a DAG. A DFS feedback arc set is computed over nodes in
//! insertion order and the offending edges are reversed in place; positions
//! only depend on which rank each node lands in, so the reversal is never
//! undone.

use crate::graph::Graph;

pub(crate) fn run(g: &mut Graph) {
    let fas = dfs_fas(g);
    for edge_ix in fas {
        g.reverse_edge(edge_ix);
    }
}

fn dfs_fas(g: &Graph) -> Vec<usize> {
    let successors = g.successors();
    let mut visited = vec![false; g.node_count()];
    let mut on_stack = vec![false; g.node_count()];
    let mut fas: Vec<usize> = Vec::new();

    fn dfs(
        v: usize,
        successors: &[Vec<(usize, usize)>],
        visited: &mut [bool],
        on_stack: &mut [bool],
        fas: &mut Vec<usize>,
    ) {
        if visited[v] {
            return;
        }
        visited[v] = true;
        on_stack[v] = true;
        for &(edge_ix, w) in &successors[v] {
            if on_stack[w] {
                fas.push(edge_ix);
            } else {
                dfs(w, successors, visited, on_stack, fas);
            }
        }
        on_stack[v] = false;
    }

    for v in 0..g.node_count() {
        dfs(v, &successors, &mut visited, &mut on_stack, &mut fas);
    }
    fas
}
