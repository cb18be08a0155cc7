//! Conservative bounding and interior carving in voxel-index space.

use std::collections::HashSet;
use std::f64::consts::SQRT_2;

use nalgebra::Vector3;
use sid_types::SpatialId;
use tracing::debug;

/// Dilates the axis cells into a cover of the whole swept body: every axis
/// cell is expanded by a per-axis Chebyshev radius of `ceil(r * f / span)`
/// cells.
pub(crate) fn dilate(
    axis_cells: &[SpatialId],
    radius: f64,
    factor: f64,
    span: &Vector3<f64>,
) -> HashSet<SpatialId> {
    let reach = radius * factor;
    let (nx, ny, nz) = (
        whole_cells_up(reach / span.x),
        whole_cells_up(reach / span.y),
        whole_cells_up(reach / span.z),
    );
    debug!(nx, ny, nz, "bounding dilation radii");
    shift_block(axis_cells, nx, ny, nz)
}

/// Contracts from the inner-axis cells to a set provably inside the body:
/// the inscribed axis-aligned box of the circular cross-section spans
/// `r / sqrt(2)` per axis, and one cell is dropped as a margin against
/// discretization error. Any negative radius empties the set.
pub(crate) fn carve(
    inner_axis: &[SpatialId],
    radius: f64,
    factor: f64,
    span: &Vector3<f64>,
) -> HashSet<SpatialId> {
    let reach = radius / SQRT_2 * factor;
    let (nx, ny, nz) = (
        whole_cells_down(reach / span.x) - 1,
        whole_cells_down(reach / span.y) - 1,
        whole_cells_down(reach / span.z) - 1,
    );
    debug!(nx, ny, nz, "interior carving radii");
    if nx < 0 || ny < 0 || nz < 0 {
        return HashSet::new();
    }
    shift_block(inner_axis, nx, ny, nz)
}

fn shift_block(cells: &[SpatialId], nx: i64, ny: i64, nz: i64) -> HashSet<SpatialId> {
    let mut shifted = HashSet::new();
    for cell in cells {
        for dx in -nx..=nx {
            for dy in -ny..=ny {
                for dz in -nz..=nz {
                    shifted.insert(cell.shifted(dx, dy, dz));
                }
            }
        }
    }
    shifted
}

#[allow(clippy::cast_possible_truncation)]
fn whole_cells_up(cells: f64) -> i64 {
    cells.ceil() as i64
}

#[allow(clippy::cast_possible_truncation)]
fn whole_cells_down(cells: f64) -> i64 {
    cells.floor() as i64
}
