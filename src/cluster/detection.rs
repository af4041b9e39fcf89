//! Connected component detection

use std::collections::HashMap;

use itertools::Itertools;

use crate::graph::KinshipGraph;

/// Union-Find data structure for connected component analysis
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<u32>,

    /// Size of each set, valid at roots (for union by size)
    size: Vec<u32>,
}

impl DisjointSets {
    /// Create a new DisjointSets data structure
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size as u32).collect(),
            size: vec![1; size],
        }
    }

    /// Find the root of the set containing x with path halving
    pub fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Union the sets containing x and y
    pub fn union(&mut self, x: u32, y: u32) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return;
        }

        // Attach smaller tree under root of larger tree
        let (big, small) = if self.size[root_x as usize] >= self.size[root_y as usize] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small as usize] = big;
        self.size[big as usize] += self.size[small as usize];
    }

    /// Get the size of the set containing x
    pub fn set_size(&mut self, x: u32) -> u32 {
        let root = self.find(x);
        self.size[root as usize]
    }
}

/// Partition the live nodes of a graph into connected components.
///
/// Members of each component are sorted by id. Components are ordered by
/// size (largest first), ties broken by their smallest id.
pub fn find_connected_components(graph: &KinshipGraph) -> Vec<Vec<u32>> {
    let mut sets = DisjointSets::new(graph.slot_count());
    for (u, v) in graph.edges() {
        sets.union(u, v);
    }

    let mut groups: HashMap<u32, Vec<u32>> = HashMap::new();
    for node in graph.live_nodes() {
        let root = sets.find(node);
        groups.entry(root).or_default().push(node);
    }

    let components: Vec<Vec<u32>> = groups
        .into_values()
        .map(|mut members| {
            members.sort_unstable_by(|&a, &b| graph.id_of(a).cmp(graph.id_of(b)));
            members
        })
        .sorted_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| graph.id_of(a[0]).cmp(graph.id_of(b[0])))
        })
        .collect();

    log::debug!("Found {} connected components", components.len());
    components
}
