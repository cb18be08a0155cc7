//! Spatial-ID vocabulary shared across the workspace.
//!
//! A *spatial ID* names one voxel of the global three-dimensional grid that
//! tiles the Web-Mercator projection horizontally and a 2^25 m altitude
//! column vertically. This crate provides the identifier types, their wire
//! formats, and the zoom (precision) bounds:
//!
//! - [`SpatialId`] - extended identifier with independent horizontal and
//!   vertical zoom levels, wire format `hZoom/xIdx/yIdx/vZoom/zIdx`
//! - [`CompactId`] - compact identifier with a single zoom level, wire
//!   format `zoom/zIdx/xIdx/yIdx`
//! - [`check_zoom`] / [`MAX_ZOOM`] - the valid precision range `0..=35`
//!
//! # Layer 0 Crate
//!
//! This crate has no geometry dependencies. Identifier values are plain
//! integer tuples; the mapping between identifiers and coordinates lives in
//! `sid-geodesy`.
//!
//! # Example
//!
//! ```
//! use sid_types::SpatialId;
//!
//! let id: SpatialId = "26/59637911/26453548/26/-7".parse()?;
//! assert_eq!(id.indices(), (59637911, 26453548, -7));
//! assert_eq!(id.to_string(), "26/59637911/26453548/26/-7");
//! # Ok::<(), sid_types::SpatialIdError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod id;
mod zoom;

pub use error::SpatialIdError;
pub use id::{CompactId, SpatialId};
pub use zoom::{MAX_ZOOM, check_zoom, zoom_in_range};
