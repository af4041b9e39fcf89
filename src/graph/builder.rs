//! Kinship graph construction

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::data::Edge;
use crate::graph::KinshipGraph;

/// Builder for incrementally constructing a [`KinshipGraph`]
///
/// Only kinship relations (mother, father, child, spouse) become graph
/// edges. Repeated pairs collapse to a single undirected edge regardless
/// of direction or relation type.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Unordered pairs stored as `(smaller, larger)`
    pairs: HashSet<(String, String)>,

    /// Number of edges offered, kinship or not
    seen: usize,

    /// Edges rejected by the kinship filter
    filtered: usize,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: HashSet::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Build a graph straight from an edge list
    pub fn from_edges<'a, I>(edges: I) -> KinshipGraph
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut builder = Self::default();
        for edge in edges {
            builder.add_edge(edge);
        }
        builder.build()
    }

    /// Offer an edge; non-kinship relations are ignored
    pub fn add_edge(&mut self, edge: &Edge) {
        self.seen += 1;
        if !edge.relation.is_kinship() {
            self.filtered += 1;
            return;
        }
        self.add_pair(&edge.source, &edge.target);
    }

    /// Add an undirected pair without relation filtering
    pub fn add_pair(&mut self, a: &str, b: &str) {
        if a == b {
            log::debug!("Dropping self-loop on {}", a);
            return;
        }
        let key = if a < b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        };
        self.pairs.insert(key);
    }

    /// Build the graph, assigning indices in lexicographic id order
    pub fn build(self) -> KinshipGraph {
        let ids: BTreeSet<&str> = self
            .pairs
            .iter()
            .flat_map(|(a, b)| [a.as_str(), b.as_str()])
            .collect();

        let node_ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        let id_to_index: HashMap<&str, u32> = ids
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i as u32))
            .collect();

        let mut adjacency = vec![BTreeSet::new(); node_ids.len()];
        for (a, b) in &self.pairs {
            let (ia, ib) = (id_to_index[a.as_str()], id_to_index[b.as_str()]);
            adjacency[ia as usize].insert(ib);
            adjacency[ib as usize].insert(ia);
        }

        log::info!(
            "Built kinship graph: {} nodes, {} edges ({} of {} links filtered as non-kinship)",
            node_ids.len(),
            self.pairs.len(),
            self.filtered,
            self.seen
        );

        KinshipGraph::from_parts(node_ids, adjacency)
    }
}
