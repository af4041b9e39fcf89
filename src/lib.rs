//! Core library functions for the kinship hub analyzer

pub mod config;
pub mod error;
pub mod data;
pub mod graph;
pub mod hubs;
pub mod cluster;
pub mod storage;

pub use anyhow::{Result, anyhow};
pub use error::AnalyzerError;

use crate::cluster::GraphStats;
use crate::config::Config;
use crate::data::Edge;
use crate::graph::GraphBuilder;
use crate::hubs::HubRecord;

/// Run both analyses over one edge snapshot.
///
/// Hub extraction consumes its own copy of the graph; component analysis
/// reads the untouched original.
pub fn analyze(edges: &[Edge], config: &Config) -> (Vec<HubRecord>, GraphStats) {
    let graph = GraphBuilder::from_edges(edges);

    let hubs = hubs::extract_hubs(graph.clone(), config.min_degree, config.max_hubs);
    let stats = cluster::analyze_components(&graph);

    (hubs, stats)
}
