//! Property 3: Repeat determinism.
//!
//! Runs the Kruskal engine on the same input graph multiple times and
//! asserts that every run produces a bit-identical edge list and component
//! count. The stable sort and the union tie-break are the two pieces of
//! machinery under test here; any divergence means one of them stopped
//! being deterministic.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::kruskal;

use super::types::{DeterminismConfig, GraphFixture};

/// Runs the repeat-determinism property for the given fixture.
///
/// Executes the engine multiple times on clones of the same input and
/// asserts that every run reproduces the baseline exactly. The repetition
/// count is controlled by [`DeterminismConfig`].
pub(super) fn run_determinism_property(fixture: &GraphFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();

    let baseline = kruskal(&fixture.graph).map_err(|e| {
        TestCaseError::fail(format!(
            "baseline kruskal failed: {e} ({})",
            fixture.context()
        ))
    })?;

    for run in 1..config.repetitions {
        let input = fixture.graph.clone();
        let result = kruskal(&input).map_err(|e| {
            TestCaseError::fail(format!(
                "run {run}: kruskal failed: {e} ({})",
                fixture.context()
            ))
        })?;

        if result.component_count() != baseline.component_count() {
            return Err(TestCaseError::fail(format!(
                "run {run}: component count diverged, baseline={}, run={} ({})",
                baseline.component_count(),
                result.component_count(),
                fixture.context(),
            )));
        }

        // Exact edge-list equality is the strongest determinism check.
        if result.edges() != baseline.edges() {
            return Err(TestCaseError::fail(format!(
                "run {run}: edge list differs from baseline ({})",
                fixture.context(),
            )));
        }
    }

    Ok(())
}
