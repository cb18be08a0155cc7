//! Validated geographic coordinates.

use crate::error::GeodesyError;

/// A geographic coordinate: WGS84 longitude/latitude in degrees and
/// altitude in meters above the datum.
///
/// Longitude lives in `(-180, 180]` — the antimeridian is always written
/// as +180 — and latitude in `[-90, 90]`. Construction validates the
/// ranges once, so downstream geometry never has to re-check them.
/// Equality is exact component equality (used by the path driver to
/// detect repeated vertices).
///
/// # Example
///
/// ```
/// use sid_geodesy::GeoPoint;
///
/// let point = GeoPoint::new(139.753098, 35.685371, 11.0)?;
/// assert_eq!(point.lat(), 35.685371);
///
/// assert!(GeoPoint::new(181.0, 0.0, 0.0).is_err());
/// assert!(GeoPoint::new(-180.0, 0.0, 0.0).is_err());
/// assert!(GeoPoint::new(0.0, 90.1, 0.0).is_err());
/// # Ok::<(), sid_geodesy::GeodesyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    lon: f64,
    lat: f64,
    alt: f64,
}

impl GeoPoint {
    /// Creates a geographic point, validating the coordinate ranges.
    ///
    /// # Errors
    ///
    /// Returns [`GeodesyError::LongitudeOutOfRange`],
    /// [`GeodesyError::LatitudeOutOfRange`], or [`GeodesyError::NotFinite`]
    /// when a component is outside its domain.
    pub fn new(lon: f64, lat: f64, alt: f64) -> Result<Self, GeodesyError> {
        for component in [lon, lat, alt] {
            if !component.is_finite() {
                return Err(GeodesyError::NotFinite(component));
            }
        }
        // The antimeridian's canonical longitude is +180; -180 is excluded.
        if lon <= -180.0 || lon > 180.0 {
            return Err(GeodesyError::LongitudeOutOfRange(lon));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeodesyError::LatitudeOutOfRange(lat));
        }
        Ok(Self { lon, lat, alt })
    }

    /// Creates a point without range validation.
    ///
    /// Reserved for coordinates produced by the inverse projection, which
    /// stay in range by construction.
    pub(crate) const fn from_raw(lon: f64, lat: f64, alt: f64) -> Self {
        Self { lon, lat, alt }
    }

    /// Longitude in degrees, east positive.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees, north positive.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Altitude in meters above the datum.
    #[must_use]
    pub const fn alt(&self) -> f64 {
        self.alt
    }

    /// Returns the same horizontal position at a different altitude.
    #[must_use]
    pub const fn with_alt(&self, alt: f64) -> Self {
        Self {
            lon: self.lon,
            lat: self.lat,
            alt,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let point = GeoPoint::new(139.0, 35.0, -10.0).unwrap();
        assert_eq!(point.lon(), 139.0);
        assert_eq!(point.lat(), 35.0);
        assert_eq!(point.alt(), -10.0);
    }

    #[test]
    fn test_new_boundaries() {
        assert!(GeoPoint::new(180.0, 90.0, 0.0).is_ok());
        assert!(GeoPoint::new(-179.999, -90.0, 0.0).is_ok());

        // The western edge is excluded; +180 is the canonical form.
        let error = GeoPoint::new(-180.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(error, GeodesyError::LongitudeOutOfRange(_)));
    }

    #[test]
    fn test_new_longitude_out_of_range() {
        let error = GeoPoint::new(180.1, 0.0, 0.0).unwrap_err();
        assert!(matches!(error, GeodesyError::LongitudeOutOfRange(_)));
    }

    #[test]
    fn test_new_latitude_out_of_range() {
        let error = GeoPoint::new(0.0, -90.1, 0.0).unwrap_err();
        assert!(matches!(error, GeodesyError::LatitudeOutOfRange(_)));
    }

    #[test]
    fn test_new_rejects_nan() {
        assert!(GeoPoint::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_with_alt() {
        let point = GeoPoint::new(10.0, 20.0, 30.0).unwrap();
        let lowered = point.with_alt(-5.0);
        assert_eq!(lowered.lon(), 10.0);
        assert_eq!(lowered.alt(), -5.0);
    }

    #[test]
    fn test_equality_is_exact() {
        let a = GeoPoint::new(1.0, 2.0, 3.0).unwrap();
        let b = GeoPoint::new(1.0, 2.0, 3.0).unwrap();
        let c = GeoPoint::new(1.0, 2.0, 3.0000001).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
