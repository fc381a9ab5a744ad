//! Deterministic layout positions for saved graph documents.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use spantree_core::Position;

/// Places `vertex_count` vertices evenly on the unit circle.
///
/// Vertex `i` sits at angle `TAU * i / vertex_count`, so the layout for a
/// given vertex count is stable across runs.
pub(super) fn circular_layout(vertex_count: usize) -> BTreeMap<usize, Position> {
    let mut positions = BTreeMap::new();
    if vertex_count == 0 {
        return positions;
    }

    let step = TAU / vertex_count as f64;
    for vertex in 0..vertex_count {
        let angle = step * vertex as f64;
        positions.insert(vertex, Position::new(angle.cos(), angle.sin()));
    }
    positions
}

/// Fills `positions` with circular-layout entries for vertices lacking one.
///
/// Existing positions are kept untouched. Returns the number of positions
/// generated.
pub(super) fn complete_positions(
    positions: &mut BTreeMap<usize, Position>,
    vertex_count: usize,
) -> usize {
    let mut generated = 0;
    for (vertex, position) in circular_layout(vertex_count) {
        if positions.contains_key(&vertex) {
            continue;
        }
        positions.insert(vertex, position);
        generated += 1;
    }
    generated
}
