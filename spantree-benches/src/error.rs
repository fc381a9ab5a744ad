//! Benchmark setup error type.
//!
//! Aggregates the error types that may arise during benchmark data
//! preparation so that setup functions can propagate failures with `?`
//! instead of using `.expect()`.

use crate::source::RandomGraphError;
use spantree_core::MstError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Random graph generation failed.
    #[error("random graph generation failed: {0}")]
    Source(#[from] RandomGraphError),
    /// Spanning-forest computation failed.
    #[error("spanning-forest computation failed: {0}")]
    Mst(#[from] MstError),
}
