//! Spherical Web-Mercator projection (EPSG:3857).

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use nalgebra::Point3;

use crate::point::GeoPoint;

/// Radius of the projection sphere in meters (WGS84 semi-major axis).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Projects a geographic point into the orthogonal Web-Mercator frame.
///
/// The result is in meters: `x = R * lon`, `y = R * ln(tan(pi/4 + lat/2))`
/// (angles in radians). Altitude passes through unscaled; latitude-dependent
/// corrections are the caller's concern.
///
/// # Example
///
/// ```
/// use sid_geodesy::{GeoPoint, geo_to_ortho};
///
/// let origin = GeoPoint::new(0.0, 0.0, 5.0)?;
/// let ortho = geo_to_ortho(&origin);
/// assert!(ortho.x.abs() < 1e-9);
/// assert!(ortho.y.abs() < 1e-9);
/// assert!((ortho.z - 5.0).abs() < 1e-12);
/// # Ok::<(), sid_geodesy::GeodesyError>(())
/// ```
#[must_use]
pub fn geo_to_ortho(point: &GeoPoint) -> Point3<f64> {
    let lat = point.lat().to_radians();
    Point3::new(
        EARTH_RADIUS * point.lon().to_radians(),
        EARTH_RADIUS * (FRAC_PI_4 + lat / 2.0).tan().ln(),
        point.alt(),
    )
}

/// Inverse of [`geo_to_ortho`].
///
/// Coordinates coming back from the projection are in range by
/// construction, so this cannot fail.
#[must_use]
pub fn ortho_to_geo(point: &Point3<f64>) -> GeoPoint {
    let lon = (point.x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
    GeoPoint::from_raw(lon, lat, point.z)
}
