//! Voxelization of capsule/cylinder corridor paths into spatial-ID sets.
//!
//! Given a polyline of geographic centers, a radius in meters, and
//! horizontal/vertical precision levels, this crate computes every voxel
//! of the spatial-ID grid touched by the swept volume - the shape of a
//! drone corridor or a buried pipeline.
//!
//! # Pipeline
//!
//! Each polyline edge runs through a three-stage classifier in an
//! approximately isotropic working frame (Web-Mercator meters with
//! altitude scaled by `1 / cos(latitude)`):
//!
//! 1. **Bound** - the cells crossed by the edge axis are dilated by the
//!    radius into a conservative outer cover.
//! 2. **Carve** - cells around the (possibly shortened) inner axis that
//!    the inscribed box argument proves interior are accepted outright.
//! 3. **Resolve** - every remaining candidate is decided by exact
//!    rigid-body overlap between the edge's primitive (sphere, capsule,
//!    or cylinder) and the cell's box.
//!
//! Cylinder results additionally have each vertical column filled to a
//! contiguous run, restoring the flat end caps. Consecutive cylinder
//! edges are stitched with joint spheres.
//!
//! # Example
//!
//! ```no_run
//! use sid_corridor::{CorridorOptions, extended_spatial_ids_on_cylinders};
//! use sid_geodesy::GeoPoint;
//!
//! let path = [
//!     GeoPoint::new(139.753098, 35.685371, 30.0)?,
//!     GeoPoint::new(139.755098, 35.687371, 35.0)?,
//!     GeoPoint::new(139.757098, 35.687371, 35.0)?,
//! ];
//! let options = CorridorOptions::default();
//! let ids = extended_spatial_ids_on_cylinders(&path, 4.0, 23, 23, false, &options)?;
//! for id in &ids {
//!     println!("{id}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Determinism
//!
//! For identical inputs the returned set is identical: the unit-voxel
//! metric is truncated to a fixed resolution, the collision test is a
//! pure function of cell metric and center, and set union is order
//! independent.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod columns;
mod error;
mod options;
mod path;
mod primitive;
mod segment;
mod span;

pub use error::CorridorError;
pub use options::CorridorOptions;
pub use path::{extended_spatial_ids_on_cylinders, spatial_ids_on_cylinders};

// Re-export the vocabulary the public API speaks
pub use sid_geodesy::GeoPoint;
pub use sid_types::{CompactId, SpatialId};

/// Degenerate-length threshold: segments at or below this length collapse
/// to spheres, and radii at or below it are rejected as inputs.
pub(crate) const MINIMA: f64 = 1e-12;
