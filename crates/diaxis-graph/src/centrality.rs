use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use diaxis_core::models::symptom::SymptomId;

use crate::graph::SymptomGraph;

/// Tolerance for comparing accumulated path distances.
const DIST_EPS: f64 = 1e-9;

/// Min-heap entry for the Dijkstra phase. Ordering is reversed because
/// `BinaryHeap` is a max-heap.
#[derive(PartialEq)]
struct Visit {
    dist: f64,
    node: usize,
}

impl Eq for Visit {}

impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl SymptomGraph {
    /// Betweenness centrality of every scope symptom over the
    /// scope-restricted subgraph, by Brandes' algorithm.
    ///
    /// Association weight w is read as distance 1/w; equally short paths
    /// split contribution through the sigma counts. Scores are summed over
    /// ordered pairs and normalized by (n-1)(n-2), so a node every
    /// shortest path crosses scores 1.0. Fewer than three scope nodes, and
    /// pairs split across components, contribute nothing.
    pub fn centrality(&self, scope: &BTreeSet<SymptomId>) -> BTreeMap<SymptomId, f64> {
        let mut result: BTreeMap<SymptomId, f64> =
            scope.iter().map(|id| (id.clone(), 0.0)).collect();

        let nodes: Vec<usize> = scope.iter().filter_map(|id| self.index_of(id)).collect();
        let n = nodes.len();
        if n < 3 {
            return result;
        }

        // graph index -> position inside the scope subgraph
        let mut pos: BTreeMap<usize, usize> = BTreeMap::new();
        for (at, &node) in nodes.iter().enumerate() {
            pos.insert(node, at);
        }

        let mut score = vec![0.0_f64; n];
        for source in 0..n {
            // Dijkstra with shortest-path counts and predecessor lists.
            let mut dist = vec![f64::INFINITY; n];
            let mut sigma = vec![0.0_f64; n];
            let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
            let mut settled = vec![false; n];
            let mut order: Vec<usize> = Vec::new();

            dist[source] = 0.0;
            sigma[source] = 1.0;
            let mut heap = BinaryHeap::new();
            heap.push(Visit {
                dist: 0.0,
                node: source,
            });

            while let Some(Visit { dist: d, node: u }) = heap.pop() {
                if settled[u] || d > dist[u] + DIST_EPS {
                    continue;
                }
                settled[u] = true;
                order.push(u);

                for &(other, weight) in self.adjacency_at(nodes[u]) {
                    let Some(&v) = pos.get(&other) else {
                        continue;
                    };
                    let alt = dist[u] + 1.0 / weight;
                    if alt + DIST_EPS < dist[v] {
                        dist[v] = alt;
                        sigma[v] = sigma[u];
                        preds[v] = vec![u];
                        heap.push(Visit { dist: alt, node: v });
                    } else if (alt - dist[v]).abs() <= DIST_EPS && !settled[v] {
                        sigma[v] += sigma[u];
                        preds[v].push(u);
                    }
                }
            }

            // Dependency accumulation, farthest node first.
            let mut delta = vec![0.0_f64; n];
            for &w in order.iter().rev() {
                for &u in &preds[w] {
                    delta[u] += sigma[u] / sigma[w] * (1.0 + delta[w]);
                }
                if w != source {
                    score[w] += delta[w];
                }
            }
        }

        let norm = ((n - 1) * (n - 2)) as f64;
        for (at, &node) in nodes.iter().enumerate() {
            result.insert(self.id_at(node).clone(), score[at] / norm);
        }
        result
    }
}
