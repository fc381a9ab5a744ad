//! Weighted undirected graph value type.
//!
//! A [`Graph`] owns its edge list and derives its vertex count from the
//! highest endpoint referenced. Edges are kept exactly as entered because the
//! spanning-forest engine resolves equal weights by entry order; normalising
//! or deduplicating here would silently change which edges win ties.

use serde::{Deserialize, Serialize};

/// A weighted undirected edge between two vertex indices.
///
/// The endpoints keep the orientation they were entered with. Serialises as
/// the JSON triple `[source, target, weight]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(usize, usize, f64)", into = "(usize, usize, f64)")]
pub struct GraphEdge {
    source: usize,
    target: usize,
    weight: f64,
}

impl GraphEdge {
    /// Creates an edge between `source` and `target` with `weight`.
    #[must_use]
    pub fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as entered.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as entered.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }
}

impl From<(usize, usize, f64)> for GraphEdge {
    fn from((source, target, weight): (usize, usize, f64)) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl From<GraphEdge> for (usize, usize, f64) {
    fn from(edge: GraphEdge) -> Self {
        (edge.source, edge.target, edge.weight)
    }
}

/// An owned collection of weighted undirected edges.
///
/// Vertices are the implicit range `0..vertex_count`, where the count tracks
/// the highest endpoint seen (`max + 1`). Parallel edges and self-loops are
/// accepted; the spanning-forest cycle check discards them naturally.
///
/// # Examples
///
/// ```
/// use spantree_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge(0, 3, 5.0);
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    edges: Vec<GraphEdge>,
    vertex_count: usize,
}

impl Graph {
    /// Creates an empty graph with no vertices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph that already declares `vertex_count` vertices.
    ///
    /// Declared vertices without incident edges stay isolated; edges added
    /// later still raise the count when they reference higher indices.
    #[must_use]
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            vertex_count,
        }
    }

    /// Appends an undirected edge between `source` and `target`.
    ///
    /// The edge is recorded exactly as entered, behind any edge already
    /// present, and the vertex count grows to cover both endpoints.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: f64) {
        let required = source.max(target).saturating_add(1);
        self.vertex_count = self.vertex_count.max(required);
        self.edges.push(GraphEdge::new(source, target, weight));
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges as entered, counting duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in entry order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[GraphEdge] { &self.edges }
}
