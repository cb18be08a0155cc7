//! Rigid collision primitives for the three segment shapes.

use std::f64::consts::PI;

use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use parry3d_f64::query;
use parry3d_f64::shape::{Ball, Capsule, Cuboid, Cylinder, Shape};

/// The rigid body a segment sweeps through space, posed in the orthogonal
/// frame.
///
/// One primitive is built per segment at construction time and owns its
/// collision state for the segment's lifetime; it is never shared across
/// threads.
#[derive(Debug)]
pub(crate) enum Primitive {
    /// A static ball at the segment's start point.
    Sphere {
        shape: Ball,
        pose: Isometry3<f64>,
    },
    /// A swept sphere between the segment endpoints.
    Capsule {
        shape: Capsule,
        pose: Isometry3<f64>,
    },
    /// A right circular cylinder with flat caps.
    Cylinder {
        shape: Cylinder,
        pose: Isometry3<f64>,
    },
}

impl Primitive {
    pub(crate) fn sphere(radius: f64, center: Point3<f64>) -> Self {
        Self::Sphere {
            shape: Ball::new(radius),
            pose: Isometry3::translation(center.x, center.y, center.z),
        }
    }

    pub(crate) fn capsule(radius: f64, start: Point3<f64>, end: Point3<f64>) -> Self {
        Self::Capsule {
            shape: Capsule::new(start, end, radius),
            pose: Isometry3::identity(),
        }
    }

    pub(crate) fn cylinder(radius: f64, start: Point3<f64>, end: Point3<f64>) -> Self {
        let axis = end - start;
        // Minimum-angle rotation carrying the local symmetry axis onto the
        // segment axis; antiparallel axes need an explicit half-turn.
        let rotation = UnitQuaternion::rotation_between(&Vector3::y(), &axis)
            .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI));
        let midpoint = nalgebra::center(&start, &end);
        Self::Cylinder {
            shape: Cylinder::new(axis.norm() / 2.0, radius),
            pose: Isometry3::from_parts(Translation3::from(midpoint.coords), rotation),
        }
    }

    /// Tests overlap against an axis-aligned box given by its center and
    /// full diagonal span. Tangential contact counts as a hit.
    pub(crate) fn collides_box(&self, center: &Point3<f64>, diagonal: &Vector3<f64>) -> bool {
        let voxel = Cuboid::new(diagonal * 0.5);
        let voxel_pose = Isometry3::translation(center.x, center.y, center.z);
        let (pose, shape): (&Isometry3<f64>, &dyn Shape) = match self {
            Self::Sphere { shape, pose } => (pose, shape),
            Self::Capsule { shape, pose } => (pose, shape),
            Self::Cylinder { shape, pose } => (pose, shape),
        };
        query::intersection_test(pose, shape, &voxel_pose, &voxel).unwrap_or(false)
    }
}
