//! Invariants of the corridor classification, exercised end to end.

use std::collections::HashMap;

use sid_corridor::{
    CorridorOptions, GeoPoint, extended_spatial_ids_on_cylinders, spatial_ids_on_cylinders,
};

fn point(lon: f64, lat: f64, alt: f64) -> GeoPoint {
    GeoPoint::new(lon, lat, alt).unwrap()
}

fn options() -> CorridorOptions {
    CorridorOptions::default()
}

/// Reversing a capsule's endpoints sweeps the same body. The vertices
/// share a latitude so both orders derive the same correction factor.
#[test]
fn capsule_is_symmetric_under_reversal() {
    let a = point(139.753098, 35.685371, 10.0);
    let b = point(139.753698, 35.685371, 14.0);

    let forward = spatial_ids_on_cylinders(&[a, b], 3.0, 23, true, &options()).unwrap();
    let backward = spatial_ids_on_cylinders(&[b, a], 3.0, 23, true, &options()).unwrap();
    assert_eq!(forward, backward);
}

/// Growing the radius can only grow the swept body.
#[test]
fn radius_growth_is_monotone() {
    let path = [
        point(139.753098, 35.685371, 10.0),
        point(139.753598, 35.685471, 12.0),
    ];
    let thin = spatial_ids_on_cylinders(&path, 1.5, 23, false, &options()).unwrap();
    let thick = spatial_ids_on_cylinders(&path, 3.0, 23, false, &options()).unwrap();

    assert!(thin.is_subset(&thick));
    assert!(thin.len() < thick.len());
}

/// Skipping the collision phase returns the unpruned outer cover, a
/// superset of the resolved set.
#[test]
fn precision_skip_is_a_superset() {
    let path = [
        point(139.753098, 35.685371, 10.0),
        point(139.753598, 35.685471, 12.0),
        point(139.754098, 35.685471, 12.0),
    ];
    let resolved = spatial_ids_on_cylinders(&path, 2.5, 23, false, &options()).unwrap();
    let coarse =
        spatial_ids_on_cylinders(&path, 2.5, 23, false, &options().with_precision(false)).unwrap();

    assert!(resolved.is_subset(&coarse));
}

/// Every vertical column of a cylinder result is a contiguous run of
/// altitude indices.
#[test]
fn cylinder_columns_are_convex() {
    let path = [
        point(139.753098, 35.685371, 10.0),
        point(139.753698, 35.685571, 25.0),
    ];
    let ids = extended_spatial_ids_on_cylinders(&path, 3.0, 23, 23, false, &options()).unwrap();
    assert!(!ids.is_empty());

    let mut columns: HashMap<(i64, i64), Vec<i64>> = HashMap::new();
    for id in &ids {
        columns.entry((id.x, id.y)).or_default().push(id.z);
    }
    for ((x, y), mut zs) in columns {
        zs.sort_unstable();
        for pair in zs.windows(2) {
            assert_eq!(
                pair[1],
                pair[0] + 1,
                "column ({x}, {y}) has a gap between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }
}

/// Raising either precision level never shrinks coverage.
#[test]
fn finer_zoom_never_reduces_cell_count() {
    let path = [
        point(139.753098, 35.685371, 10.0),
        point(139.753598, 35.685371, 10.0),
    ];
    let coarse = spatial_ids_on_cylinders(&path, 3.0, 21, true, &options()).unwrap();
    let fine = spatial_ids_on_cylinders(&path, 3.0, 22, true, &options()).unwrap();
    assert!(fine.len() >= coarse.len());

    let split_coarse =
        extended_spatial_ids_on_cylinders(&path, 3.0, 22, 21, true, &options()).unwrap();
    let split_fine =
        extended_spatial_ids_on_cylinders(&path, 3.0, 22, 22, true, &options()).unwrap();
    assert!(split_fine.len() >= split_coarse.len());
}

/// The same input always classifies to the same set.
#[test]
fn classification_is_deterministic() {
    let path = [
        point(139.753098, 35.685371, 10.0),
        point(139.753598, 35.685471, 12.0),
    ];
    let first = spatial_ids_on_cylinders(&path, 2.5, 23, false, &options()).unwrap();
    let second = spatial_ids_on_cylinders(&path, 2.5, 23, false, &options()).unwrap();
    assert_eq!(first, second);
}
