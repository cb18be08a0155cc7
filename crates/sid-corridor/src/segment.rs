//! Per-edge classification: axis enumeration, bounding, carving, and
//! collision resolution.

use std::collections::{HashMap, HashSet};

use nalgebra::{Point3, Vector3};
use sid_geodesy::{GeoPoint, cell_center, cell_for_point, cells_on_line, geo_to_ortho, ortho_to_geo};
use sid_types::SpatialId;
use tracing::debug;

use crate::MINIMA;
use crate::bounds::{carve, dilate};
use crate::columns::fill_columns;
use crate::error::CorridorError;
use crate::options::CorridorOptions;
use crate::primitive::Primitive;
use crate::span::{base_cell, voxel_span};

/// The geometric kind of one path edge, fixed at construction.
///
/// All downstream stages branch only on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShapeKind {
    /// Degenerate edge (coincident endpoints) or a joint between edges.
    Sphere,
    /// Edge with hemispherical caps.
    Capsule,
    /// Edge with flat caps.
    Cylinder,
}

/// One edge of the corridor path, held in the engine frame: orthogonal
/// Web-Mercator meters with altitude pre-scaled by the correction factor.
///
/// A segment lives for the duration of one classification; its collision
/// primitive is owned, not shared.
pub(crate) struct Segment {
    start: Point3<f64>,
    end: Point3<f64>,
    radius: f64,
    h_zoom: u8,
    v_zoom: u8,
    factor: f64,
    height: f64,
    kind: ShapeKind,
    primitive: Primitive,
}

impl Segment {
    pub(crate) fn new(
        start: Point3<f64>,
        end: Point3<f64>,
        radius: f64,
        h_zoom: u8,
        v_zoom: u8,
        is_capsule: bool,
        factor: f64,
    ) -> Self {
        let height = (end - start).norm();
        let (kind, primitive) = if height < MINIMA {
            (ShapeKind::Sphere, Primitive::sphere(radius * factor, start))
        } else if is_capsule {
            (
                ShapeKind::Capsule,
                Primitive::capsule(radius * factor, start, end),
            )
        } else {
            (
                ShapeKind::Cylinder,
                Primitive::cylinder(radius * factor, start, end),
            )
        };
        Self {
            start,
            end,
            radius,
            h_zoom,
            v_zoom,
            factor,
            height,
            kind,
            primitive,
        }
    }

    /// Classifies the segment into its final spatial-ID set.
    pub(crate) fn classify(
        &self,
        options: &CorridorOptions,
    ) -> Result<HashSet<SpatialId>, CorridorError> {
        let (axis, inner_axis) = self.axis_cells()?;
        let span = voxel_span(&base_cell(self.h_zoom, self.v_zoom), self.factor);

        let outer = dilate(&axis, self.radius, self.factor, &span);
        if !options.precision {
            return Ok(outer);
        }

        let inner = carve(&inner_axis, self.radius, self.factor, &span);
        let mut hits = self.resolve(outer, inner);
        if self.kind == ShapeKind::Cylinder {
            fill_columns(&mut hits, self.h_zoom, self.v_zoom);
        }
        Ok(hits)
    }

    /// Enumerates the cells crossed by the edge axis, and the inner axis
    /// whose dilation is provably interior.
    ///
    /// A cylinder loses one radius of safe interior at each flat cap, so
    /// its inner axis is shortened accordingly (and vanishes entirely for
    /// stubby cylinders); a capsule is interior up to the centers of its
    /// caps and keeps the full axis.
    fn axis_cells(&self) -> Result<(Vec<SpatialId>, Vec<SpatialId>), CorridorError> {
        match self.kind {
            ShapeKind::Sphere => {
                let cell = cell_for_point(&self.to_geo(&self.start), self.h_zoom, self.v_zoom)?;
                debug!(%cell, "axis cell of sphere");
                Ok((vec![cell], vec![cell]))
            }
            ShapeKind::Capsule => {
                let line = cells_on_line(
                    &self.to_geo(&self.start),
                    &self.to_geo(&self.end),
                    self.h_zoom,
                    self.v_zoom,
                )?;
                debug!(cells = line.len(), "axis cells of capsule");
                let inner = line.clone();
                Ok((line, inner))
            }
            ShapeKind::Cylinder => {
                let line = cells_on_line(
                    &self.to_geo(&self.start),
                    &self.to_geo(&self.end),
                    self.h_zoom,
                    self.v_zoom,
                )?;
                debug!(cells = line.len(), "axis cells of cylinder");

                let reach = self.radius * self.factor;
                let inner = if self.height > 2.0 * reach {
                    let offset = (self.end - self.start) * (reach / self.height);
                    cells_on_line(
                        &self.to_geo(&(self.start + offset)),
                        &self.to_geo(&(self.end - offset)),
                        self.h_zoom,
                        self.v_zoom,
                    )?
                } else {
                    Vec::new()
                };
                Ok((line, inner))
            }
        }
    }

    /// Decides every outer cell not already known to be interior by exact
    /// collision against the segment's primitive.
    fn resolve(&self, outer: HashSet<SpatialId>, inner: HashSet<SpatialId>) -> HashSet<SpatialId> {
        // Cells in one latitude row share a diagonal, so the span is
        // computed once per row.
        let mut row_spans: HashMap<i64, Vector3<f64>> = HashMap::new();

        let mut hits = inner;
        for cell in outer {
            if hits.contains(&cell) {
                continue;
            }
            let span = *row_spans
                .entry(cell.y)
                .or_insert_with(|| voxel_span(&cell, self.factor));

            let mut center = geo_to_ortho(&cell_center(&cell));
            center.z *= self.factor;

            if self.primitive.collides_box(&center, &span) {
                hits.insert(cell);
            }
        }
        hits
    }

    /// Converts an engine-frame point back to geographic coordinates,
    /// undoing the altitude scaling on the way out.
    fn to_geo(&self, point: &Point3<f64>) -> GeoPoint {
        ortho_to_geo(&Point3::new(point.x, point.y, point.z / self.factor))
    }
}
