//! Spantree core library.

mod document;
mod graph;
mod mst;

pub use crate::{
    document::{DocumentError, DocumentErrorCode, GraphDocument, Position},
    graph::{Graph, GraphEdge},
    mst::{MstError, MstErrorCode, SpanningForest, kruskal, total_weight},
};
