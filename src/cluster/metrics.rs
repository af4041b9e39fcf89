//! Component statistics and metrics

use rayon::prelude::*;

use crate::graph::algorithms::bfs_hops;
use crate::graph::KinshipGraph;

/// Density of an undirected graph: actual edges / potential edges.
///
/// Undefined for fewer than two nodes.
pub fn density(node_count: usize, edge_count: usize) -> Option<f64> {
    if node_count < 2 {
        return None;
    }
    let potential_edges = node_count * (node_count - 1) / 2;
    Some(edge_count as f64 / potential_edges as f64)
}

/// Mean hop distance over all pairs of distinct, mutually reachable nodes.
///
/// Returns `None` when there is no such pair, e.g. for a single node.
pub fn average_shortest_path(graph: &KinshipGraph) -> Option<f64> {
    let sources: Vec<u32> = graph.live_nodes().collect();

    // Ordered pairs: each unordered pair is seen from both ends
    let (total_hops, pairs) = sources
        .par_iter()
        .map(|&source| {
            let hops = bfs_hops(graph, source);
            let sum: u64 = hops.iter().map(|&(_, d)| u64::from(d)).sum();
            (sum, hops.len() as u64 - 1)
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

    if pairs == 0 {
        None
    } else {
        Some(total_hops as f64 / pairs as f64)
    }
}
