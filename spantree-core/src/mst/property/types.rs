//! Type definitions for spanning-forest property-based tests.
//!
//! Home of the graph fixture, the weight-distribution taxonomy, and the
//! environment-driven knobs shared by the property suites.

use proptest::test_runner::Config as ProptestConfig;

use crate::graph::Graph;

/// How edge weights are assigned when generating a graph.
///
/// Each variant stresses a different part of the engine: the sort, the
/// entry-order tie-break, the cycle check, or the component accounting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a unique weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing the
    /// entry-order tie-break.
    ManyIdentical,
    /// Sparse graph with approximately `1.5n` to `2n` edges, including the
    /// occasional self-loop and parallel edge.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// A generated graph together with the distribution that produced it.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// The generated graph, including any declared isolated vertices.
    pub graph: Graph,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// Formats the fixture parameters for failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.graph.vertex_count(),
            self.graph.edge_count(),
        )
    }
}

/// Configuration for the repeat-determinism property.
///
/// Controls how many times the engine is re-executed on the same input to
/// detect any run-to-run divergence.
pub(super) struct DeterminismConfig {
    /// Number of times to repeat the forest computation per input.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Reads `SPANTREE_MST_PBT_REPEAT_RUNS` from the environment; defaults
    /// to 5 repetitions when unset or unparsable.
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("SPANTREE_MST_PBT_REPEAT_RUNS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self { repetitions }
    }
}

/// Builds a standard proptest configuration for the property suites.
///
/// The environment variable `PROPTEST_CASES` overrides the per-suite default
/// so CI can dial the case count up or down without code changes.
#[must_use]
pub(super) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default_cases);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
