//! The path driver: chains per-edge classifications into one corridor set.

use std::collections::HashSet;

use nalgebra::Point3;
use sid_geodesy::{GeoPoint, geo_to_ortho};
use sid_types::{CompactId, SpatialId, check_zoom};
use tracing::debug;

use crate::MINIMA;
use crate::error::CorridorError;
use crate::options::CorridorOptions;
use crate::segment::Segment;

/// Computes the compact spatial IDs covered by a corridor path.
///
/// The path is a polyline of cylinder (or capsule) center lines of the
/// given `radius`; consecutive cylinders are joined by spheres so the
/// swept volume has no notches at the bends. One zoom level addresses all
/// three axes. Typical uses are drone corridors and buried pipeline runs.
///
/// Returns the empty set for an empty `centers`.
///
/// # Errors
///
/// Returns an error before any geometry runs when `zoom` is outside
/// `0..=35` or `radius` is not positive.
///
/// # Example
///
/// ```no_run
/// use sid_corridor::{CorridorOptions, spatial_ids_on_cylinders};
/// use sid_geodesy::GeoPoint;
///
/// let path = [
///     GeoPoint::new(139.753098, 35.685371, 30.0)?,
///     GeoPoint::new(139.754098, 35.686371, 30.0)?,
/// ];
/// let ids = spatial_ids_on_cylinders(&path, 5.0, 22, false, &CorridorOptions::default())?;
/// assert!(!ids.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn spatial_ids_on_cylinders(
    centers: &[GeoPoint],
    radius: f64,
    zoom: u8,
    is_capsule: bool,
    options: &CorridorOptions,
) -> Result<HashSet<CompactId>, CorridorError> {
    let extended =
        extended_spatial_ids_on_cylinders(centers, radius, zoom, zoom, is_capsule, options)?;
    extended
        .into_iter()
        .map(|id| id.to_compact().map_err(CorridorError::from))
        .collect()
}

/// Computes the extended spatial IDs covered by a corridor path, with
/// independent horizontal and vertical precision.
///
/// See [`spatial_ids_on_cylinders`] for the path semantics. The Mercator
/// correction factor is derived from the first vertex's latitude and held
/// for the whole path, which loses accuracy on polylines spanning large
/// latitude ranges.
///
/// # Errors
///
/// Returns an error before any geometry runs when either zoom level is
/// outside `0..=35` or `radius` is not positive.
pub fn extended_spatial_ids_on_cylinders(
    centers: &[GeoPoint],
    radius: f64,
    h_zoom: u8,
    v_zoom: u8,
    is_capsule: bool,
    options: &CorridorOptions,
) -> Result<HashSet<SpatialId>, CorridorError> {
    check_zoom(h_zoom).map_err(CorridorError::from)?;
    check_zoom(v_zoom).map_err(CorridorError::from)?;
    if radius <= MINIMA {
        return Err(CorridorError::RadiusNotPositive(radius));
    }
    for pair in centers.windows(2) {
        // A longitude gap over 180 degrees means the short way around
        // crosses the antimeridian, where the grid is discontinuous.
        if (pair[0].lon() - pair[1].lon()).abs() > 180.0 {
            return Err(CorridorError::AntimeridianCrossing(
                pair[0].lon(),
                pair[1].lon(),
            ));
        }
    }
    if centers.is_empty() {
        return Ok(HashSet::new());
    }

    let factor = 1.0 / centers[0].lat().to_radians().cos();
    debug!(factor, "mercator correction factor");

    let scaled = |point: &GeoPoint| -> Point3<f64> {
        let mut ortho = geo_to_ortho(point);
        ortho.z *= factor;
        ortho
    };

    let mut ids: HashSet<SpatialId> = HashSet::new();
    let mut joint: Option<Segment> = None;
    let mut edges = 0_usize;

    for (index, pair) in centers.windows(2).enumerate() {
        let (start, end) = (&pair[0], &pair[1]);
        // A repeated vertex contributes no edge.
        if start == end {
            continue;
        }
        edges += 1;

        // The joint left behind by the previous edge is classified only
        // once the path is known to continue.
        if let Some(sphere) = joint.take() {
            ids.extend(sphere.classify(options)?);
        }

        let start_orth = scaled(start);
        let end_orth = scaled(end);
        let segment = Segment::new(
            start_orth,
            end_orth,
            radius,
            h_zoom,
            v_zoom,
            is_capsule,
            factor,
        );
        ids.extend(segment.classify(options)?);
        debug!(edge = index, ids = ids.len(), "accumulated corridor cells");

        // Joint spheres smooth the junction between consecutive cylinder
        // edges; capsules and the final vertex need none.
        let last_edge = index + 2 == centers.len();
        if !last_edge && !is_capsule {
            joint = Some(Segment::new(
                end_orth, end_orth, radius, h_zoom, v_zoom, is_capsule, factor,
            ));
        }
    }

    // A path with a single distinct vertex degenerates to one sphere.
    if edges == 0 {
        let center = scaled(&centers[0]);
        let sphere = Segment::new(center, center, radius, h_zoom, v_zoom, is_capsule, factor);
        ids = sphere.classify(options)?;
    }

    Ok(ids)
}
