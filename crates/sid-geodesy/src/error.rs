//! Error types for geodesy operations.

use sid_types::SpatialIdError;

/// Errors that can occur while converting coordinates or enumerating
/// voxels.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GeodesyError {
    /// A longitude was outside `(-180, 180]` degrees.
    #[error("longitude {0} is outside the valid range (-180, 180]")]
    LongitudeOutOfRange(f64),

    /// A latitude was outside `[-90, 90]` degrees.
    #[error("latitude {0} is outside the valid range [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// A coordinate was not a finite number.
    #[error("coordinate component {0} is not finite")]
    NotFinite(f64),

    /// An identifier-level violation (zoom range, format).
    #[error(transparent)]
    InvalidId(#[from] SpatialIdError),
}
