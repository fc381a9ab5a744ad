//! Benchmark support crate for spantree.
//!
//! Provides seeded random-graph generation and parameter types used by
//! Criterion benchmarks for the Kruskal spanning-forest engine.

pub mod error;
pub mod params;
pub mod source;
