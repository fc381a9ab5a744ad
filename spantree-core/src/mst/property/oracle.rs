//! Prim oracle for spanning-forest property verification.
//!
//! Provides a trusted reference implementation built on Prim's algorithm,
//! deliberately a different algorithm from the Kruskal engine under test so
//! agreement between the two is meaningful evidence of correctness. All
//! minimum spanning forests of a graph share the same multiset of edge
//! weights, which is what the equivalence property compares; comparing
//! sorted weight lists also avoids order-dependent floating-point sums.

use crate::graph::Graph;

/// Result of the Prim oracle.
#[derive(Clone, Debug)]
pub(super) struct PrimForest {
    /// Accepted edge weights in discovery order.
    pub weights: Vec<f64>,
    /// Number of connected components after forest construction.
    pub component_count: usize,
}

impl PrimForest {
    /// Returns the number of accepted edges.
    pub(super) fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Returns the accepted weights sorted ascending for multiset
    /// comparison.
    pub(super) fn sorted_weights(&self) -> Vec<f64> {
        let mut weights = self.weights.clone();
        weights.sort_by(f64::total_cmp);
        weights
    }
}

/// Computes a minimum spanning forest using array-based Prim's algorithm.
///
/// Self-loops never cross the visited boundary, so they are dropped while
/// building the adjacency lists. Parallel edges are kept; the relaxation
/// step naturally prefers the cheapest.
pub(super) fn prim_forest(graph: &Graph) -> PrimForest {
    let vertex_count = graph.vertex_count();
    let adjacency = build_adjacency(graph);

    let mut visited = vec![false; vertex_count];
    let mut weights = Vec::new();
    let mut component_count = 0;

    for start in 0..vertex_count {
        if visited[start] {
            continue;
        }
        component_count += 1;
        grow_component(&adjacency, &mut visited, start, &mut weights);
    }

    PrimForest {
        weights,
        component_count,
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Builds undirected adjacency lists, skipping self-loops.
fn build_adjacency(graph: &Graph) -> Vec<Vec<(usize, f64)>> {
    let mut adjacency = vec![Vec::new(); graph.vertex_count()];
    for edge in graph.edges() {
        if edge.source() == edge.target() {
            continue;
        }
        adjacency[edge.source()].push((edge.target(), edge.weight()));
        adjacency[edge.target()].push((edge.source(), edge.weight()));
    }
    adjacency
}

/// Grows one component from `start`, appending accepted edge weights.
///
/// Classic array Prim: after a vertex joins the tree its edges relax the
/// candidate costs, then the cheapest unvisited candidate joins next.
fn grow_component(
    adjacency: &[Vec<(usize, f64)>],
    visited: &mut [bool],
    start: usize,
    weights: &mut Vec<f64>,
) {
    let mut best: Vec<Option<f64>> = vec![None; adjacency.len()];
    let mut latest = start;
    visited[start] = true;

    loop {
        for &(neighbor, weight) in &adjacency[latest] {
            if visited[neighbor] {
                continue;
            }
            let improved = match best[neighbor] {
                Some(current) => weight < current,
                None => true,
            };
            if improved {
                best[neighbor] = Some(weight);
            }
        }

        let Some((next, cost)) = cheapest_candidate(&best, visited) else {
            break;
        };
        visited[next] = true;
        weights.push(cost);
        latest = next;
    }
}

/// Returns the unvisited vertex with the cheapest candidate cost.
fn cheapest_candidate(best: &[Option<f64>], visited: &[bool]) -> Option<(usize, f64)> {
    let mut cheapest: Option<(usize, f64)> = None;
    for (vertex, candidate) in best.iter().enumerate() {
        if visited[vertex] {
            continue;
        }
        let Some(cost) = candidate else { continue };
        let better = match cheapest {
            Some((_, current)) => *cost < current,
            None => true,
        };
        if better {
            cheapest = Some((vertex, *cost));
        }
    }
    cheapest
}
