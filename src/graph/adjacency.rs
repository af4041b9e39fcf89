//! Owned undirected adjacency structure with removable nodes

use std::collections::{BTreeSet, HashMap};

/// Undirected simple graph over dense `u32` indices.
///
/// Each index maps to an external person id. Removing a node empties its
/// slot but keeps the index stable, so ids stay resolvable for reporting.
/// Slots are ordered so that index order matches lexicographic id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KinshipGraph {
    /// External id for every slot, live or removed
    node_ids: Vec<String>,

    /// Reverse lookup from external id to slot
    index: HashMap<String, u32>,

    /// Neighbor set per slot; `None` once the node has been removed
    adjacency: Vec<Option<BTreeSet<u32>>>,

    live_count: usize,
    edge_count: usize,
}

impl KinshipGraph {
    /// Assemble a graph from sorted ids and symmetric neighbor sets
    pub(crate) fn from_parts(node_ids: Vec<String>, adjacency: Vec<BTreeSet<u32>>) -> Self {
        debug_assert_eq!(node_ids.len(), adjacency.len());
        debug_assert!(node_ids.windows(2).all(|w| w[0] < w[1]));

        let index = node_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i as u32))
            .collect();
        let degree_sum: usize = adjacency.iter().map(BTreeSet::len).sum();

        Self {
            live_count: node_ids.len(),
            edge_count: degree_sum / 2,
            node_ids,
            index,
            adjacency: adjacency.into_iter().map(Some).collect(),
        }
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.live_count
    }

    /// Number of live undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Number of slots, including removed ones. Index-keyed buffers use this size.
    pub fn slot_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains(&self, node: u32) -> bool {
        matches!(self.adjacency.get(node as usize), Some(Some(_)))
    }

    /// External id of a slot
    pub fn id_of(&self, node: u32) -> &str {
        &self.node_ids[node as usize]
    }

    /// Slot of an external id, if it is still live
    pub fn index_of(&self, id: &str) -> Option<u32> {
        self.index.get(id).copied().filter(|&node| self.contains(node))
    }

    /// Neighbors of a node in ascending index order; empty for removed nodes
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = u32> + '_ {
        self.adjacency
            .get(node as usize)
            .and_then(Option::as_ref)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn degree(&self, node: u32) -> usize {
        self.adjacency
            .get(node as usize)
            .and_then(Option::as_ref)
            .map_or(0, BTreeSet::len)
    }

    /// Live nodes in ascending index order
    pub fn live_nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| i as u32)
    }

    /// Live edges as `(low, high)` index pairs
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.live_nodes()
            .flat_map(move |u| self.neighbors(u).filter(move |&v| u < v).map(move |v| (u, v)))
    }

    /// Remove a node and its incident edges. Returns false if it was not live.
    pub fn remove_node(&mut self, node: u32) -> bool {
        let Some(neighbors) = self.adjacency.get_mut(node as usize).and_then(Option::take) else {
            return false;
        };

        for &other in &neighbors {
            if let Some(Some(set)) = self.adjacency.get_mut(other as usize) {
                set.remove(&node);
            }
        }
        self.edge_count -= neighbors.len();
        self.live_count -= 1;
        true
    }

    /// Remove several nodes; returns how many were live
    pub fn remove_nodes<I>(&mut self, nodes: I) -> usize
    where
        I: IntoIterator<Item = u32>,
    {
        nodes.into_iter().filter(|&node| self.remove_node(node)).count()
    }

    /// Copy of the subgraph induced by `members`, re-indexed densely.
    ///
    /// Removed or unknown members are ignored.
    pub fn induced_subgraph(&self, members: &[u32]) -> KinshipGraph {
        let mut kept: Vec<u32> = members.iter().copied().filter(|&n| self.contains(n)).collect();
        kept.sort_unstable_by(|&a, &b| self.id_of(a).cmp(self.id_of(b)));
        kept.dedup();

        let remap: HashMap<u32, u32> = kept
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new as u32))
            .collect();

        let node_ids = kept.iter().map(|&old| self.id_of(old).to_string()).collect();
        let adjacency = kept
            .iter()
            .map(|&old| {
                self.neighbors(old)
                    .filter_map(|neighbor| remap.get(&neighbor).copied())
                    .collect()
            })
            .collect();

        KinshipGraph::from_parts(node_ids, adjacency)
    }
}
