//! Geodesy primitives for the spatial-ID grid.
//!
//! This crate maps between geographic coordinates (WGS84 longitude/latitude
//! in degrees, altitude in meters) and the voxel grid named by
//! [`sid_types::SpatialId`]:
//!
//! - [`GeoPoint`] - validated geographic coordinate
//! - [`geo_to_ortho`] / [`ortho_to_geo`] - the spherical Web-Mercator
//!   projection (EPSG:3857) used as the metric working frame
//! - [`cell_for_point`] / [`cells_on_line`] - voxel lookup for a point and
//!   exhaustive voxel traversal along a straight segment
//! - [`cell_vertices`] / [`cell_center`] - the geographic corners and
//!   center of a voxel
//!
//! # Grid geometry
//!
//! Horizontally the grid is the standard Web-Mercator tiling: `2^zoom`
//! cells per axis, x increasing eastward from 180°W, y increasing
//! southward from the projection's north edge. Vertically the grid slices
//! a 2^25 m altitude column into `2^zoom` cells of `2^(25 - zoom)` m each;
//! indices below the datum are negative.
//!
//! # Example
//!
//! ```
//! use sid_geodesy::{GeoPoint, cell_for_point, cell_center};
//!
//! let tokyo = GeoPoint::new(139.753098, 35.685371, 11.0)?;
//! let cell = cell_for_point(&tokyo, 25, 25)?;
//!
//! // The cell center is inside the cell that contains the point.
//! let center = cell_center(&cell);
//! assert_eq!(cell_for_point(&center, 25, 25)?, cell);
//! # Ok::<(), sid_geodesy::GeodesyError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cell;
mod error;
mod point;
mod projection;
mod traverse;

pub use cell::{cell_center, cell_for_point, cell_vertices, cells_on_line};
pub use error::GeodesyError;
pub use point::GeoPoint;
pub use projection::{EARTH_RADIUS, geo_to_ortho, ortho_to_geo};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
