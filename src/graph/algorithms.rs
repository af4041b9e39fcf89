//! Graph algorithms for analysis

use std::collections::{BTreeMap, VecDeque};

use rayon::prelude::*;

use crate::graph::KinshipGraph;

/// Sources handled per parallel task. Fixed so that partial sums are always
/// combined in the same grouping, independent of the thread count.
const SOURCE_CHUNK: usize = 64;

/// Scores closer than this are treated as tied
pub const SCORE_EPSILON: f64 = 1e-12;

const UNVISITED: u32 = u32::MAX;

/// Per-source working buffers for Brandes' algorithm, reused across sources
struct BrandesScratch {
    sigma: Vec<f64>,
    dist: Vec<u32>,
    delta: Vec<f64>,
    preds: Vec<Vec<u32>>,
    order: Vec<u32>,
    queue: VecDeque<u32>,
}

impl BrandesScratch {
    fn new(slots: usize) -> Self {
        Self {
            sigma: vec![0.0; slots],
            dist: vec![UNVISITED; slots],
            delta: vec![0.0; slots],
            preds: vec![Vec::new(); slots],
            order: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Add the dependencies of `source` on every other node into `acc`
    fn accumulate(&mut self, graph: &KinshipGraph, source: u32, acc: &mut [f64]) {
        let Self { sigma, dist, delta, preds, order, queue } = self;

        // Only reset what the previous source touched
        for &v in order.iter() {
            let v = v as usize;
            sigma[v] = 0.0;
            dist[v] = UNVISITED;
            delta[v] = 0.0;
            preds[v].clear();
        }
        order.clear();

        let s = source as usize;
        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            let (dv, sv) = (dist[v as usize], sigma[v as usize]);
            for w in graph.neighbors(v) {
                let wi = w as usize;
                if dist[wi] == UNVISITED {
                    dist[wi] = dv + 1;
                    queue.push_back(w);
                }
                if dist[wi] == dv + 1 {
                    sigma[wi] += sv;
                    preds[wi].push(v);
                }
            }
        }

        for &w in order.iter().rev() {
            let wi = w as usize;
            let coeff = (1.0 + delta[wi]) / sigma[wi];
            for &v in &preds[wi] {
                delta[v as usize] += sigma[v as usize] * coeff;
            }
            if w != source {
                acc[wi] += delta[wi];
            }
        }
    }
}

/// Normalized betweenness centrality of every live node.
///
/// Pairs in different components contribute nothing. Scores are divided
/// by `(n-1)(n-2)/2`; graphs with fewer than three nodes score zero.
/// Removed nodes are absent from the result.
pub fn betweenness_centrality(graph: &KinshipGraph) -> BTreeMap<u32, f64> {
    let n = graph.node_count();
    if n < 3 {
        return graph.live_nodes().map(|node| (node, 0.0)).collect();
    }

    let slots = graph.slot_count();
    let sources: Vec<u32> = graph.live_nodes().collect();

    let partials: Vec<Vec<f64>> = sources
        .par_chunks(SOURCE_CHUNK)
        .map(|chunk| {
            let mut scratch = BrandesScratch::new(slots);
            let mut acc = vec![0.0; slots];
            for &source in chunk {
                scratch.accumulate(graph, source, &mut acc);
            }
            acc
        })
        .collect();

    let mut totals = vec![0.0; slots];
    for partial in partials {
        for (total, value) in totals.iter_mut().zip(partial) {
            *total += value;
        }
    }

    // Every unordered pair was counted once from each endpoint
    let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
    sources
        .into_iter()
        .map(|node| (node, totals[node as usize] * scale))
        .collect()
}

/// Highest-scoring node; ties go to the lexicographically smallest id
pub fn select_max(graph: &KinshipGraph, scores: &BTreeMap<u32, f64>) -> Option<(u32, f64)> {
    scores
        .iter()
        .map(|(&node, &score)| (node, score))
        .reduce(|best, candidate| {
            if outranks(graph, candidate, best) {
                candidate
            } else {
                best
            }
        })
}

fn outranks(graph: &KinshipGraph, candidate: (u32, f64), best: (u32, f64)) -> bool {
    if candidate.1 > best.1 + SCORE_EPSILON {
        true
    } else if best.1 > candidate.1 + SCORE_EPSILON {
        false
    } else {
        graph.id_of(candidate.0) < graph.id_of(best.0)
    }
}

/// Breadth-first hop counts from `source` to every reachable live node,
/// in visit order (the source itself first, at distance zero)
pub fn bfs_hops(graph: &KinshipGraph, source: u32) -> Vec<(u32, u32)> {
    if !graph.contains(source) {
        return Vec::new();
    }

    let mut dist = vec![UNVISITED; graph.slot_count()];
    let mut visited = Vec::new();
    let mut queue = VecDeque::from([source]);
    dist[source as usize] = 0;

    while let Some(v) = queue.pop_front() {
        let dv = dist[v as usize];
        visited.push((v, dv));
        for w in graph.neighbors(v) {
            if dist[w as usize] == UNVISITED {
                dist[w as usize] = dv + 1;
                queue.push_back(w);
            }
        }
    }

    visited
}
