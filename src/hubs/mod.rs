//! Greedy hub extraction

use serde::{Deserialize, Serialize};

use crate::graph::algorithms::{betweenness_centrality, select_max};
use crate::graph::KinshipGraph;

/// One extracted hub, in `key,score,degree` column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubRecord {
    /// Person id
    pub key: String,

    /// Betweenness centrality on the graph as it stood when selected
    pub score: f64,

    /// Neighbors removed together with the hub
    pub degree: usize,
}

/// Repeatedly take the most central node, then delete it and its neighbors.
///
/// The graph is consumed: extraction shrinks it in place and the remainder
/// is dropped. A hub is always recorded before the stopping checks, so the
/// last hub may have a degree below `min_degree`.
pub fn extract_hubs(mut graph: KinshipGraph, min_degree: usize, max_hubs: usize) -> Vec<HubRecord> {
    log::info!(
        "Extracting up to {} hubs from {} nodes (min degree {})",
        max_hubs,
        graph.node_count(),
        min_degree
    );

    let mut hubs = Vec::new();

    while hubs.len() < max_hubs && !graph.is_empty() {
        let scores = betweenness_centrality(&graph);
        let Some((hub, score)) = select_max(&graph, &scores) else {
            break;
        };

        let neighbors: Vec<u32> = graph.neighbors(hub).collect();
        let degree = neighbors.len();

        log::debug!(
            "Hub #{}: {} (score {:.6}, degree {}), {} nodes left before removal",
            hubs.len() + 1,
            graph.id_of(hub),
            score,
            degree,
            graph.node_count()
        );

        hubs.push(HubRecord {
            key: graph.id_of(hub).to_string(),
            score,
            degree,
        });

        graph.remove_nodes(neighbors);
        graph.remove_node(hub);

        if degree < min_degree {
            break;
        }
    }

    log::info!("Extracted {} hubs", hubs.len());
    hubs
}
