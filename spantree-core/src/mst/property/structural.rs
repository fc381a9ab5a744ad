//! Property 2: Structural invariant verification.
//!
//! For any forest produced by the Kruskal engine, verifies:
//!
//! - **Acyclicity** — no cycles (union-find based detection).
//! - **Edge count** — `V - C` edges for `C` connected components.
//! - **Component agreement** — the forest reports exactly as many components
//!   as the input graph has, and the spanning flag matches.
//! - **No self-loops** — `source != target` for all accepted edges.
//! - **Endpoint bounds** — every endpoint lies below the vertex count.
//! - **Finite weights** — all accepted edge weights are finite.
//! - **Acceptance order** — accepted weights are non-decreasing.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::GraphEdge;
use crate::mst::{SpanningForest, kruskal};

use super::helpers::find_root;
use super::types::GraphFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let forest = kruskal(&fixture.graph)
        .map_err(|e| TestCaseError::fail(format!("kruskal failed: {e} ({})", fixture.context())))?;

    let vertex_count = fixture.graph.vertex_count();
    let edges = forest.edges();

    validate_endpoint_bounds(vertex_count, edges)?;
    validate_no_self_loops(edges)?;
    validate_finite_weights(edges)?;
    validate_acceptance_order(edges)?;
    validate_acyclicity(vertex_count, edges)?;
    validate_edge_count(vertex_count, edges.len(), forest.component_count())?;
    validate_component_agreement(fixture, &forest)?;

    Ok(())
}

/// Generic edge validator that applies a predicate to each edge, returning
/// early with an error if the predicate produces a message.
fn validate_edges<F>(edges: &[GraphEdge], mut predicate: F) -> TestCaseResult
where
    F: FnMut(usize, &GraphEdge) -> Option<String>,
{
    for (i, edge) in edges.iter().enumerate() {
        if let Some(msg) = predicate(i, edge) {
            return Err(TestCaseError::fail(msg));
        }
    }
    Ok(())
}

// ── Validation helpers ──────────────────────────────────────────────────

/// Verifies that every accepted endpoint lies inside the vertex range.
fn validate_endpoint_bounds(vertex_count: usize, edges: &[GraphEdge]) -> TestCaseResult {
    validate_edges(edges, |i, edge| {
        (edge.source() >= vertex_count || edge.target() >= vertex_count).then(|| {
            format!(
                "edge {i}: ({}, {}) outside vertex range 0..{vertex_count}",
                edge.source(),
                edge.target(),
            )
        })
    })
}

/// Verifies that no accepted edge is a self-loop.
fn validate_no_self_loops(edges: &[GraphEdge]) -> TestCaseResult {
    validate_edges(edges, |i, edge| {
        (edge.source() == edge.target())
            .then(|| format!("edge {i}: self-loop on vertex {}", edge.source()))
    })
}

/// Verifies that all accepted edge weights are finite.
fn validate_finite_weights(edges: &[GraphEdge]) -> TestCaseResult {
    validate_edges(edges, |i, edge| {
        (!edge.weight().is_finite())
            .then(|| format!("edge {i}: non-finite weight {}", edge.weight()))
    })
}

/// Verifies that accepted weights never decrease along the edge list.
fn validate_acceptance_order(edges: &[GraphEdge]) -> TestCaseResult {
    for (i, pair) in edges.windows(2).enumerate() {
        if pair[0].weight() > pair[1].weight() {
            return Err(TestCaseError::fail(format!(
                "edge {}: weight {} decreases after {}",
                i + 1,
                pair[1].weight(),
                pair[0].weight(),
            )));
        }
    }
    Ok(())
}

/// Detects cycles in the forest output using union-find.
fn validate_acyclicity(vertex_count: usize, edges: &[GraphEdge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[rb] = ra;
    }
    Ok(())
}

/// Verifies that the forest has exactly `n - c` edges for `c` components.
fn validate_edge_count(vertex_count: usize, actual: usize, component_count: usize) -> TestCaseResult {
    let expected = vertex_count.saturating_sub(component_count);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {actual}, expected n - c = {expected} (n={vertex_count}, c={component_count})",
        )));
    }
    Ok(())
}

/// Verifies that the forest's component count matches the input graph and
/// that the spanning flag is consistent with it.
fn validate_component_agreement(fixture: &GraphFixture, forest: &SpanningForest) -> TestCaseResult {
    let input_components = count_input_components(fixture);
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "forest has {} components, input has {input_components} ({})",
            forest.component_count(),
            fixture.context(),
        )));
    }
    if forest.is_spanning_tree() != (forest.component_count() == 1) {
        return Err(TestCaseError::fail(format!(
            "spanning flag inconsistent with {} components",
            forest.component_count(),
        )));
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Counts connected components in the input graph by applying union-find
/// over the fixture's raw edges (self-loops contribute nothing).
fn count_input_components(fixture: &GraphFixture) -> usize {
    let n = fixture.graph.vertex_count();
    if n == 0 {
        return 0;
    }

    let mut parent: Vec<usize> = (0..n).collect();
    let mut components = n;

    for edge in fixture.graph.edges() {
        if edge.source() == edge.target() {
            continue;
        }
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra != rb {
            parent[rb] = ra;
            components -= 1;
        }
    }

    components
}
