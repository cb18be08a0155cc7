//! Vertical interior fill for cylinder results.

use std::collections::{HashMap, HashSet};

use sid_types::SpatialId;

/// Fills every `(x, y)` column of the set to the closed run
/// `[min_z, max_z]` of its altitude indices.
///
/// A column that intersects a cylinder's lateral surface twice may have
/// interior indices that never appeared among the collision candidates;
/// restoring the run recovers them along with the flat end caps.
pub(crate) fn fill_columns(cells: &mut HashSet<SpatialId>, h_zoom: u8, v_zoom: u8) {
    let mut columns: HashMap<(i64, i64), (i64, i64)> = HashMap::new();
    for cell in cells.iter() {
        let run = columns.entry((cell.x, cell.y)).or_insert((cell.z, cell.z));
        run.0 = run.0.min(cell.z);
        run.1 = run.1.max(cell.z);
    }
    for ((x, y), (bottom, top)) in columns {
        for z in bottom..=top {
            cells.insert(SpatialId::new(h_zoom, x, y, v_zoom, z));
        }
    }
}
