//! Seeded random-graph generation for benchmarks.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use spantree_core::Graph;
use thiserror::Error;

/// Errors raised while generating a random benchmark graph.
#[derive(Debug, Error)]
pub enum RandomGraphError {
    /// The requested graph had no vertices.
    #[error("vertex count must be non-zero")]
    ZeroVertices,
    /// The requested graph had no edges per vertex.
    #[error("edge degree must be non-zero")]
    ZeroDegree,
}

/// Configuration for [`random_graph`].
#[derive(Clone, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Average number of edges per vertex.
    pub degree: usize,
    /// RNG seed; equal seeds produce equal graphs.
    pub seed: u64,
}

/// Generates a connected random graph with `vertex_count * degree` edges.
///
/// A shuffled spanning path guarantees connectivity; the remaining edges
/// pick endpoint pairs uniformly at random. Weights are drawn from
/// `0.1..100.0`.
///
/// # Errors
/// Returns [`RandomGraphError`] when the configuration requests an empty
/// graph.
pub fn random_graph(config: &RandomGraphConfig) -> Result<Graph, RandomGraphError> {
    if config.vertex_count == 0 {
        return Err(RandomGraphError::ZeroVertices);
    }
    if config.degree == 0 {
        return Err(RandomGraphError::ZeroDegree);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut order: Vec<usize> = (0..config.vertex_count).collect();
    order.shuffle(&mut rng);

    let mut graph = Graph::with_vertex_count(config.vertex_count);
    for pair in order.windows(2) {
        let &[source, target] = pair else { continue };
        graph.add_edge(source, target, rng.gen_range(0.1..100.0));
    }

    let edge_budget = config.vertex_count.saturating_mul(config.degree);
    while graph.edge_count() < edge_budget {
        let source = rng.gen_range(0..config.vertex_count);
        let target = rng.gen_range(0..config.vertex_count);
        graph.add_edge(source, target, rng.gen_range(0.1..100.0));
    }
    Ok(graph)
}
