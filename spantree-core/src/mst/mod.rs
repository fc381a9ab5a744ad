//! Minimum spanning tree (MST) construction.
//!
//! This module implements Kruskal's algorithm over an owned [`Graph`]
//! snapshot: a stable sort of the edges by weight followed by a greedy scan
//! with union-find cycle checks. The sort is deliberately stable and keyed on
//! weight alone so equal-weight edges are considered in entry order, which
//! together with the union tie-break makes the output fully reproducible.

mod union_find;


use tracing::{info, instrument};

use crate::graph::{Graph, GraphEdge};

use self::union_find::DisjointSets;

/// Errors returned while computing a minimum spanning tree/forest.
// `Display` and `Error` are implemented by hand: `thiserror` would treat the
// spec-mandated `source` field as the error's cause chain.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// An edge carried a NaN or infinite weight.
    NonFiniteWeight {
        /// The first endpoint as entered.
        source: usize,
        /// The second endpoint as entered.
        target: usize,
    },
}

impl core::fmt::Display for MstError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonFiniteWeight { source, target } => {
                write!(f, "edge ({source}, {target}) has non-finite weight")
            }
        }
    }
}

impl core::error::Error for MstError {}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::NonFiniteWeight { .. } => MstErrorCode::NonFiniteWeight,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum MstErrorCode {
    /// An edge carried a NaN or infinite weight.
    NonFiniteWeight,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonFiniteWeight => "NON_FINITE_WEIGHT",
        }
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree
/// with exactly `vertex_count - 1` edges. Edges appear in acceptance order,
/// so their weights are non-decreasing.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<GraphEdge>,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[GraphEdge] { &self.edges }

    /// Returns the number of connected components in the resulting forest.
    ///
    /// Isolated vertices count as components; an empty graph has zero.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.edges)
    }
}

/// Sums the weights of `edges`; an empty list sums to `0.0`.
#[must_use]
pub fn total_weight(edges: &[GraphEdge]) -> f64 {
    // Folded from an explicit `+0.0`: newer toolchains seed `f64`'s `Sum`
    // with `-0.0`, so an empty `.sum()` would render as `-0` and break the
    // documented `0.0` contract.
    edges
        .iter()
        .map(GraphEdge::weight)
        .fold(0.0, |total, weight| total + weight)
}

/// Computes a minimum spanning forest of `graph` using Kruskal's algorithm.
///
/// The graph is read through an immutable borrow and never mutated; the edge
/// list is snapshotted, stably sorted by weight, and scanned greedily until
/// `vertex_count - 1` edges are accepted or the edges run out. Self-loops and
/// parallel edges fall out via the cycle check. A disconnected graph yields a
/// forest with `component_count > 1`, and an empty graph yields an empty
/// forest; neither is an error.
///
/// # Errors
///
/// Returns [`MstError::NonFiniteWeight`] when any edge weight is NaN or
/// infinite.
///
/// # Examples
///
/// ```
/// use spantree_core::{Graph, kruskal};
///
/// let mut graph = Graph::new();
/// graph.add_edge(0, 1, 2.0);
/// graph.add_edge(1, 2, 1.0);
/// graph.add_edge(0, 2, 3.0);
///
/// let forest = kruskal(&graph)?;
/// assert!(forest.is_spanning_tree());
/// assert_eq!(forest.total_weight(), 3.0);
/// # Ok::<(), spantree_core::MstError>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph) -> Result<SpanningForest, MstError> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Ok(SpanningForest {
            edges: Vec::new(),
            component_count: 0,
        });
    }

    let mut queue = snapshot_edges(graph)?;
    // Stable sort on weight alone: ties keep entry order.
    queue.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

    let mut sets = DisjointSets::new(vertex_count);
    let target = vertex_count.saturating_sub(1);
    let mut accepted = Vec::with_capacity(target);

    for edge in queue {
        if accepted.len() == target {
            break;
        }
        let left = sets.find(edge.source());
        let right = sets.find(edge.target());
        if left != right {
            sets.union(left, right);
            accepted.push(edge);
        }
    }

    let component_count = vertex_count.saturating_sub(accepted.len());
    info!(
        accepted = accepted.len(),
        components = component_count,
        "spanning forest completed"
    );
    Ok(SpanningForest {
        edges: accepted,
        component_count,
    })
}

/// Copies the edge list, rejecting non-finite weights at the boundary.
fn snapshot_edges(graph: &Graph) -> Result<Vec<GraphEdge>, MstError> {
    let mut queue = Vec::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        if !edge.weight().is_finite() {
            return Err(MstError::NonFiniteWeight {
                source: edge.source(),
                target: edge.target(),
            });
        }
        queue.push(*edge);
    }
    Ok(queue)
}

// ============================================================================
// Kani Formal Verification
// ============================================================================

/// Validates spanning-forest structural invariants for Kani verification.
///
/// Returns `true` if the forest satisfies:
/// - Edge count equals `n - c` where `n` is vertex count and `c` is component
///   count
/// - No self-loops (source != target for all edges)
/// - Acyclic structure (no cycles detected via union-find)
#[cfg(kani)]
pub(crate) fn is_valid_forest(
    vertex_count: usize,
    edges: &[GraphEdge],
    component_count: usize,
) -> bool {
    if edges.len() != vertex_count.saturating_sub(component_count) {
        return false;
    }

    for edge in edges {
        if edge.source() == edge.target() {
            return false;
        }
    }

    // Acyclic check via union-find
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for edge in edges {
        let root_s = kani_find_root(&parent, edge.source());
        let root_t = kani_find_root(&parent, edge.target());
        if root_s == root_t {
            return false; // Cycle detected
        }
        parent[root_t] = root_s;
    }

    true
}

/// Simple union-find root finding for Kani verification.
#[cfg(kani)]
fn kani_find_root(parent: &[usize], vertex: usize) -> usize {
    let mut current = vertex;
    while parent[current] != current {
        current = parent[current];
    }
    current
}

#[cfg(kani)]
mod kani_proofs {
    //! Kani proof harnesses for spanning-forest invariants.
    //!
    //! These harnesses verify structural correctness of the Kruskal engine
    //! using bounded model checking.

    use super::{Graph, is_valid_forest, kruskal, total_weight};

    /// Verifies forest structural correctness for bounded graphs.
    ///
    /// This harness creates a small graph with nondeterministically selected
    /// edges and verifies that the resulting forest satisfies structural
    /// invariants: correct edge count, no self-loops, no cycles.
    ///
    /// # Verification Bounds
    ///
    /// - **Vertices**: 4 (to keep solver time reasonable)
    /// - **Edges**: Up to 6 (complete graph on 4 vertices)
    /// - **Weights**: Represented as u8 cast to f64 for finite guarantees
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_forest_structural_correctness_4_vertices() {
        let vertex_count = 4usize;

        // Nondeterministically select edges from the complete graph
        // 4 vertices = 6 possible undirected edges
        let edge_pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

        let mut graph = Graph::with_vertex_count(vertex_count);
        for &(source, target) in &edge_pairs {
            if kani::any::<bool>() {
                let weight: u8 = kani::any();
                graph.add_edge(source, target, f64::from(weight));
            }
        }

        // With finite weights the engine cannot fail
        let forest = kruskal(&graph).expect("finite weights must succeed");

        kani::assert(
            is_valid_forest(vertex_count, forest.edges(), forest.component_count()),
            "forest structural invariant violated",
        );

        kani::assert(
            forest.edges().len() <= vertex_count.saturating_sub(1),
            "forest has too many edges",
        );

        if forest.component_count() == 1 {
            kani::assert(
                forest.edges().len() == vertex_count.saturating_sub(1),
                "spanning tree should have n-1 edges",
            );
        }
    }

    /// Verifies minimality on a complete 3-vertex graph.
    ///
    /// On a triangle the first two edges in weight order never form a cycle,
    /// so Kruskal keeps exactly those two and drops a maximum-weight edge.
    /// The accepted total must therefore equal the edge sum minus the
    /// maximum weight.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_triangle_minimality() {
        let weight0: u8 = kani::any();
        let weight1: u8 = kani::any();
        let weight2: u8 = kani::any();

        let mut graph = Graph::new();
        graph.add_edge(0, 1, f64::from(weight0));
        graph.add_edge(1, 2, f64::from(weight1));
        graph.add_edge(0, 2, f64::from(weight2));

        let forest = kruskal(&graph).expect("finite weights must succeed");
        kani::assert(forest.is_spanning_tree(), "triangle must span");

        let sum = f64::from(weight0) + f64::from(weight1) + f64::from(weight2);
        let max = f64::from(weight0.max(weight1).max(weight2));
        kani::assert(
            total_weight(forest.edges()) == sum - max,
            "triangle MST must drop a maximum-weight edge",
        );
    }
}
