//! Connected component analysis module

pub mod detection;
pub mod metrics;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::graph::algorithms::{betweenness_centrality, select_max};
use crate::graph::KinshipGraph;

/// Statistics of one connected component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStats {
    /// Member with the highest component-local betweenness centrality
    pub hub: String,

    /// Member ids, sorted
    pub nodes: Vec<String>,

    pub n_nodes: usize,
    pub n_edges: usize,

    /// Actual / potential edges; absent for single-node components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,

    /// Mean pairwise hop distance; absent for single-node components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_shortest_path: Option<f64>,
}

/// Whole-graph summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub n_nodes: usize,
    pub n_edges: usize,
    pub n_subgraphs: usize,

    /// Largest component first
    pub subgraphs: Vec<ComponentStats>,
}

/// Decompose a graph into components and measure each one.
///
/// The graph is only read; every component is analyzed on its own
/// induced copy.
pub fn analyze_components(graph: &KinshipGraph) -> GraphStats {
    log::info!(
        "Analyzing components of {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let components = detection::find_connected_components(graph);

    let subgraphs: Vec<ComponentStats> = components
        .par_iter()
        .map(|members| component_stats(&graph.induced_subgraph(members)))
        .collect();

    let stats = GraphStats {
        n_nodes: graph.node_count(),
        n_edges: graph.edge_count(),
        n_subgraphs: subgraphs.len(),
        subgraphs,
    };

    log::info!(
        "Found {} components (largest has {} nodes)",
        stats.n_subgraphs,
        stats.subgraphs.first().map_or(0, |c| c.n_nodes)
    );

    stats
}

/// Measure a single connected graph
fn component_stats(component: &KinshipGraph) -> ComponentStats {
    let scores = betweenness_centrality(component);
    let hub = select_max(component, &scores)
        .map(|(node, _)| component.id_of(node).to_string())
        .unwrap_or_default();

    let n_nodes = component.node_count();
    let n_edges = component.edge_count();

    ComponentStats {
        hub,
        nodes: component.live_nodes().map(|n| component.id_of(n).to_string()).collect(),
        n_nodes,
        n_edges,
        density: metrics::density(n_nodes, n_edges),
        avg_shortest_path: metrics::average_shortest_path(component),
    }
}
