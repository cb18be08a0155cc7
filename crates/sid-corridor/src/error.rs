//! Error types for corridor voxelization.

use sid_geodesy::GeodesyError;
use sid_types::SpatialIdError;

/// Errors that can occur while voxelizing a corridor path.
///
/// Every variant is an input violation surfaced before any geometry runs
/// (or propagated from a voxel-index primitive that rejected its input);
/// there are no partial results.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CorridorError {
    /// The corridor radius must be positive.
    #[error("corridor radius must be positive, got {0}")]
    RadiusNotPositive(f64),

    /// A path edge crosses the 180th meridian, which the grid cannot
    /// express as one contiguous run of cells.
    #[error("segment from longitude {0} to {1} crosses the antimeridian")]
    AntimeridianCrossing(f64, f64),

    /// An identifier-level violation (zoom range, format conversion).
    #[error(transparent)]
    InvalidId(#[from] SpatialIdError),

    /// A violation reported by the geodesy layer.
    #[error(transparent)]
    Geodesy(#[from] GeodesyError),
}

impl CorridorError {
    /// Returns `true` if the underlying cause is a zoom level outside
    /// `0..=35`.
    ///
    /// # Example
    ///
    /// ```
    /// use sid_corridor::CorridorError;
    /// use sid_types::SpatialIdError;
    ///
    /// let error = CorridorError::from(SpatialIdError::ZoomOutOfRange(36));
    /// assert!(error.is_zoom_out_of_range());
    /// ```
    #[must_use]
    pub const fn is_zoom_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::InvalidId(SpatialIdError::ZoomOutOfRange(_))
                | Self::Geodesy(GeodesyError::InvalidId(SpatialIdError::ZoomOutOfRange(_)))
        )
    }
}
