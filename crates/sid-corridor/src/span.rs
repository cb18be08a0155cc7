//! Unit voxel metric: the orthogonal-frame diagonal of a cell.

use nalgebra::Vector3;
use sid_geodesy::{cell_vertices, geo_to_ortho};
use sid_types::SpatialId;

const MICRO: f64 = 1e6;

/// Computes the orthogonal diagonal span `(dx, dy, dz)` of a voxel.
///
/// The eight cell corners are projected and reduced to a per-axis extent.
/// Components are truncated to 10^-6 m so equal cells yield bit-identical
/// spans across calls; the vertical span is truncated first and then
/// scaled by the Mercator correction factor.
pub(crate) fn voxel_span(id: &SpatialId, factor: f64) -> Vector3<f64> {
    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for corner in cell_vertices(id) {
        let projected = geo_to_ortho(&corner);
        for (axis, value) in [projected.x, projected.y, projected.z].into_iter().enumerate() {
            min[axis] = min[axis].min(value);
            max[axis] = max[axis].max(value);
        }
    }
    Vector3::new(
        truncate(max[0] - min[0]),
        truncate(max[1] - min[1]),
        ((max[2] - min[2]) * MICRO).floor() * factor / MICRO,
    )
}

/// The cell whose span feeds the bounding and carving passes: the first
/// column of the equator row at altitude index zero.
pub(crate) fn base_cell(h_zoom: u8, v_zoom: u8) -> SpatialId {
    let equator_row = if h_zoom == 0 {
        0
    } else {
        1_i64 << (h_zoom - 1)
    };
    SpatialId::new(h_zoom, 0, equator_row, v_zoom, 0)
}

fn truncate(value: f64) -> f64 {
    (value * MICRO).floor() / MICRO
}
