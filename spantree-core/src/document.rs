//! JSON-compatible graph document for persistence.
//!
//! A [`GraphDocument`] is the on-disk record `{ "vertices": n, "edges":
//! [[u, v, w], ...], "positions": { "<vertex>": [x, y], ... } }`. The core
//! only defines the shape and its validation; reading and writing files is
//! the caller's concern.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, GraphEdge};

/// Errors returned while converting a document into a [`Graph`].
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[non_exhaustive]
pub enum DocumentError {
    /// An edge referenced a vertex beyond the declared vertex count.
    #[error(
        "edge references vertex {vertex}, but the document declares {vertex_count} vertices"
    )]
    EdgeOutOfBounds {
        /// The out-of-range vertex index referenced by an edge.
        vertex: usize,
        /// The vertex count declared by the document.
        vertex_count: usize,
    },
}

impl DocumentError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> DocumentErrorCode {
        match self {
            Self::EdgeOutOfBounds { .. } => DocumentErrorCode::EdgeOutOfBounds,
        }
    }
}

/// Machine-readable error codes for [`DocumentError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum DocumentErrorCode {
    /// An edge referenced a vertex beyond the declared vertex count.
    EdgeOutOfBounds,
}

impl DocumentErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EdgeOutOfBounds => "DOCUMENT_EDGE_OUT_OF_BOUNDS",
        }
    }
}

/// A 2-D layout coordinate, serialised as the JSON pair `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Creates a position at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub fn x(&self) -> f64 { self.x }

    /// Returns the vertical coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub fn y(&self) -> f64 { self.y }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [f64; 2] {
    fn from(position: Position) -> Self {
        [position.x, position.y]
    }
}

/// The persistable form of a graph plus optional layout positions.
///
/// The declared vertex count may exceed the highest edge endpoint, which
/// preserves isolated vertices across a round-trip. `positions` is keyed by
/// vertex index (JSON object keys are strings on the wire) and is optional on
/// input; entries for vertices outside the declared range are carried along
/// untouched because layout data is advisory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(rename = "vertices")]
    vertex_count: usize,
    edges: Vec<GraphEdge>,
    #[serde(default)]
    positions: BTreeMap<usize, Position>,
}

impl GraphDocument {
    /// Builds a document from `graph` and the layout `positions` to persist.
    #[must_use]
    pub fn from_graph(graph: &Graph, positions: BTreeMap<usize, Position>) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edges: graph.edges().to_vec(),
            positions,
        }
    }

    /// Returns the declared vertex count.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in document order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[GraphEdge] { &self.edges }

    /// Returns the layout positions keyed by vertex index.
    #[must_use]
    #[rustfmt::skip]
    pub fn positions(&self) -> &BTreeMap<usize, Position> { &self.positions }

    /// Converts the document into a [`Graph`], keeping edge order.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::EdgeOutOfBounds`] when an edge references a
    /// vertex at or beyond the declared vertex count. An inconsistent
    /// document would otherwise surface much later as an index panic inside
    /// the engine.
    pub fn to_graph(&self) -> Result<Graph, DocumentError> {
        let mut graph = Graph::with_vertex_count(self.vertex_count);
        for edge in &self.edges {
            let highest = edge.source().max(edge.target());
            if highest >= self.vertex_count {
                return Err(DocumentError::EdgeOutOfBounds {
                    vertex: highest,
                    vertex_count: self.vertex_count,
                });
            }
            graph.add_edge(edge.source(), edge.target(), edge.weight());
        }
        Ok(graph)
    }
}
