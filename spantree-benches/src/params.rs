//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so that benchmark
//! identifiers render consistently across Criterion reports.

use std::fmt;

/// Parameters for a spanning-forest benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Average number of edges per vertex.
    pub degree: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},deg={}", self.vertex_count, self.degree)
    }
}
