//! Voxel lookup, traversal, and geometry for spatial-ID cells.

use std::f64::consts::PI;

use sid_types::{SpatialId, check_zoom};

use crate::error::GeodesyError;
use crate::point::GeoPoint;
use crate::traverse::cells_crossed;

/// Exponent of the vertical extent: the altitude index space spans
/// `2^25` m, so a cell at vertical zoom `v` is `2^(25 - v)` m tall.
const ALT_EXTENT_EXPONENT: i32 = 25;

/// Returns the identifier of the voxel containing a geographic point.
///
/// # Errors
///
/// Returns [`GeodesyError::InvalidId`] if either zoom level is outside
/// `0..=35`.
///
/// # Example
///
/// ```
/// use sid_geodesy::{GeoPoint, cell_for_point};
///
/// // Greenwich equator at zoom 1 is the cell just east and south of the
/// // grid midpoint.
/// let point = GeoPoint::new(0.0, 0.0, 0.0)?;
/// let cell = cell_for_point(&point, 1, 1)?;
/// assert_eq!((cell.x, cell.y, cell.z), (1, 1, 0));
/// # Ok::<(), sid_geodesy::GeodesyError>(())
/// ```
pub fn cell_for_point(
    point: &GeoPoint,
    h_zoom: u8,
    v_zoom: u8,
) -> Result<SpatialId, GeodesyError> {
    check_zoom(h_zoom).map_err(GeodesyError::from)?;
    check_zoom(v_zoom).map_err(GeodesyError::from)?;

    let [tx, ty, tz] = to_cell_coords(point, h_zoom, v_zoom);
    let n = horizontal_cells(h_zoom);
    #[allow(clippy::cast_possible_truncation)]
    let (x, y, z) = (
        (tx.floor() as i64).rem_euclid(n),
        (ty.floor() as i64).clamp(0, n - 1),
        tz.floor() as i64,
    );
    Ok(SpatialId::new(h_zoom, x, y, v_zoom, z))
}

/// Returns every voxel the straight segment `a -> b` passes through.
///
/// The segment is traversed in the projected frame (straight in
/// Web-Mercator, not a geodesic). Both endpoint voxels are always present
/// and the result contains no duplicates.
///
/// # Errors
///
/// Returns [`GeodesyError::InvalidId`] if either zoom level is outside
/// `0..=35`.
pub fn cells_on_line(
    a: &GeoPoint,
    b: &GeoPoint,
    h_zoom: u8,
    v_zoom: u8,
) -> Result<Vec<SpatialId>, GeodesyError> {
    check_zoom(h_zoom).map_err(GeodesyError::from)?;
    check_zoom(v_zoom).map_err(GeodesyError::from)?;

    let n = horizontal_cells(h_zoom);
    let cells = cells_crossed(
        to_cell_coords(a, h_zoom, v_zoom),
        to_cell_coords(b, h_zoom, v_zoom),
    );
    Ok(cells
        .into_iter()
        .map(|[x, y, z]| SpatialId::new(h_zoom, x.rem_euclid(n), y.clamp(0, n - 1), v_zoom, z))
        .collect())
}

/// Returns the eight geographic corners of a voxel.
///
/// Corner order is unspecified; callers reduce over the set (typically a
/// per-axis min/max after projection).
#[must_use]
pub fn cell_vertices(id: &SpatialId) -> [GeoPoint; 8] {
    let n = horizontal_cells(id.h_zoom);
    let lons = [lon_at(id.x, n), lon_at(id.x + 1, n)];
    let lats = [lat_at(id.y, n), lat_at(id.y + 1, n)];
    let alts = [alt_at(id.z, id.v_zoom), alt_at(id.z + 1, id.v_zoom)];

    let mut corners = [GeoPoint::from_raw(0.0, 0.0, 0.0); 8];
    let mut index = 0;
    for lon in lons {
        for lat in lats {
            for alt in alts {
                corners[index] = GeoPoint::from_raw(lon, lat, alt);
                index += 1;
            }
        }
    }
    corners
}

/// Returns the geographic center of a voxel (the midpoint in index space).
#[must_use]
pub fn cell_center(id: &SpatialId) -> GeoPoint {
    let n = horizontal_cells(id.h_zoom);
    GeoPoint::from_raw(
        lon_at_fraction(cell_fraction(id.x), n),
        lat_at_fraction(cell_fraction(id.y), n),
        alt_at_fraction(cell_fraction(id.z), id.v_zoom),
    )
}

fn horizontal_cells(zoom: u8) -> i64 {
    1_i64 << zoom
}

/// Continuous cell coordinates of a point: integer parts are the voxel
/// indices, cell boundaries sit at the integers.
#[allow(clippy::cast_precision_loss)]
fn to_cell_coords(point: &GeoPoint, h_zoom: u8, v_zoom: u8) -> [f64; 3] {
    let n = horizontal_cells(h_zoom) as f64;
    let phi = point.lat().to_radians();

    let tx = (point.lon() + 180.0) / 360.0 * n;
    // Mercator fraction; saturates at the projection's polar cutoff so
    // extreme latitudes land in the edge rows instead of overflowing.
    let ty = ((1.0 - phi.tan().asinh() / PI) / 2.0 * n).clamp(0.0, n);
    let tz = point.alt() * exp2(i32::from(v_zoom) - ALT_EXTENT_EXPONENT);
    [tx, ty, tz]
}

#[allow(clippy::cast_precision_loss)]
fn cell_fraction(index: i64) -> f64 {
    index as f64 + 0.5
}

#[allow(clippy::cast_precision_loss)]
fn lon_at(index: i64, n: i64) -> f64 {
    lon_at_fraction(index as f64, n)
}

#[allow(clippy::cast_precision_loss)]
fn lon_at_fraction(tx: f64, n: i64) -> f64 {
    tx / n as f64 * 360.0 - 180.0
}

#[allow(clippy::cast_precision_loss)]
fn lat_at(index: i64, n: i64) -> f64 {
    lat_at_fraction(index as f64, n)
}

#[allow(clippy::cast_precision_loss)]
fn lat_at_fraction(ty: f64, n: i64) -> f64 {
    (PI * (1.0 - 2.0 * ty / n as f64)).sinh().atan().to_degrees()
}

#[allow(clippy::cast_precision_loss)]
fn alt_at(index: i64, v_zoom: u8) -> f64 {
    alt_at_fraction(index as f64, v_zoom)
}

fn alt_at_fraction(tz: f64, v_zoom: u8) -> f64 {
    tz * exp2(ALT_EXTENT_EXPONENT - i32::from(v_zoom))
}

fn exp2(exponent: i32) -> f64 {
    2.0_f64.powi(exponent)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    use super::*;
    use crate::projection::geo_to_ortho;

    fn tokyo() -> GeoPoint {
        GeoPoint::new(139.753098, 35.685371, 11.0).unwrap()
    }

    #[test]
    fn test_cell_for_point_zoom_range() {
        assert!(cell_for_point(&tokyo(), 36, 25).is_err());
        assert!(cell_for_point(&tokyo(), 25, 36).is_err());
        assert!(cell_for_point(&tokyo(), 35, 35).is_ok());
    }

    #[test]
    fn test_cell_for_point_altitude_index() {
        // At zoom 25 the vertical cell is exactly one meter.
        let cell = cell_for_point(&tokyo(), 25, 25).unwrap();
        assert_eq!(cell.z, 11);

        // At zoom 26 the cell is half a meter.
        let below = tokyo().with_alt(-0.85);
        let cell = cell_for_point(&below, 26, 26).unwrap();
        assert_eq!(cell.z, -2);
    }

    #[test]
    fn test_cell_for_point_known_column() {
        let point = GeoPoint::new(139.92271122072384, 35.5610740346, -0.85).unwrap();
        let cell = cell_for_point(&point, 26, 26).unwrap();
        assert_eq!((cell.x, cell.y), (59637915, 26453550));
    }

    #[test]
    fn test_vertices_bracket_the_point() {
        let cell = cell_for_point(&tokyo(), 25, 25).unwrap();
        let corners = cell_vertices(&cell);

        let lons: Vec<f64> = corners.iter().map(GeoPoint::lon).collect();
        let lats: Vec<f64> = corners.iter().map(GeoPoint::lat).collect();
        let alts: Vec<f64> = corners.iter().map(GeoPoint::alt).collect();

        let inside = |values: &[f64], v: f64| {
            values.iter().copied().fold(f64::INFINITY, f64::min) <= v
                && v <= values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        };
        assert!(inside(&lons, tokyo().lon()));
        assert!(inside(&lats, tokyo().lat()));
        assert!(inside(&alts, tokyo().alt()));
    }

    #[test]
    fn test_projected_cell_is_square() {
        // In the projected frame every cell at one zoom has the same
        // horizontal extent: 2 * pi * R / 2^zoom on both axes.
        let cell = cell_for_point(&tokyo(), 25, 25).unwrap();
        let corners = cell_vertices(&cell);
        let projected: Vec<Point3<f64>> = corners.iter().map(|c| geo_to_ortho(c)).collect();

        let span = |pick: fn(&Point3<f64>) -> f64| {
            let max = projected.iter().map(pick).fold(f64::NEG_INFINITY, f64::max);
            let min = projected.iter().map(pick).fold(f64::INFINITY, f64::min);
            max - min
        };
        let expected = 2.0 * PI * crate::projection::EARTH_RADIUS / 33_554_432.0;
        assert_relative_eq!(span(|p| p.x), expected, epsilon = 1e-6);
        assert_relative_eq!(span(|p| p.y), expected, epsilon = 1e-6);
        assert_relative_eq!(span(|p| p.z), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_center_maps_back_to_cell() {
        let cell = cell_for_point(&tokyo(), 20, 18).unwrap();
        let center = cell_center(&cell);
        assert_eq!(cell_for_point(&center, 20, 18).unwrap(), cell);
    }

    #[test]
    fn test_cells_on_line_same_point() {
        let cells = cells_on_line(&tokyo(), &tokyo(), 25, 25).unwrap();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0], cell_for_point(&tokyo(), 25, 25).unwrap());
    }

    #[test]
    fn test_cells_on_line_vertical() {
        // A purely vertical segment spans a contiguous run of altitude
        // indices in a single column.
        let bottom = tokyo().with_alt(0.2);
        let top = tokyo().with_alt(4.8);
        let cells = cells_on_line(&bottom, &top, 25, 25).unwrap();
        assert_eq!(cells.len(), 5);
        for (offset, cell) in cells.iter().enumerate() {
            assert_eq!(cell.z, offset as i64);
            assert_eq!(cell.x, cells[0].x);
            assert_eq!(cell.y, cells[0].y);
        }
    }

    #[test]
    fn test_cells_on_line_endpoints_present() {
        let a = GeoPoint::new(139.92271122072384, 35.5610740346, -0.85).unwrap();
        let b = GeoPoint::new(139.92259973802746, 35.5608653809, -0.85).unwrap();
        let cells = cells_on_line(&a, &b, 26, 26).unwrap();

        let first = cell_for_point(&a, 26, 26).unwrap();
        let last = cell_for_point(&b, 26, 26).unwrap();
        assert!(cells.contains(&first));
        assert!(cells.contains(&last));

        // No duplicates.
        let unique: std::collections::HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), cells.len());
    }

    #[test]
    fn test_cells_on_line_zoom_range() {
        assert!(cells_on_line(&tokyo(), &tokyo(), 36, 25).is_err());
    }
}
