// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar projection of 3D polygon loops
//!
//! A surface loop lives in arbitrary world coordinates. To triangulate it we
//! rotate it into the local XY plane of its own fitted plane, keeping the
//! rotation and offset needed to put the result back.

use crate::plane::{look_at_rotation, Plane};
use crate::{Point2, Point3, Result, Vector3};
use nalgebra::{Isometry3, Translation3, Unit, UnitQuaternion};
use smallvec::SmallVec;

/// Restoration transform from the local projection plane to world space.
///
/// A local point `(x, y)` lands at `rotation * (x, y, 0) + normal * offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Maps local +Z onto the plane normal
    pub rotation: UnitQuaternion<f64>,
    /// Plane normal in world space
    pub normal: Unit<Vector3<f64>>,
    /// Signed distance of the plane from the origin along `normal`
    pub offset: f64,
}

impl Placement {
    /// Placement for a fitted plane
    pub fn from_plane(plane: &Plane) -> Self {
        Self {
            rotation: look_at_rotation(&plane.normal),
            normal: plane.normal,
            offset: plane.offset(),
        }
    }

    /// World-space translation applied after the rotation
    #[inline]
    pub fn translation(&self) -> Vector3<f64> {
        self.normal.into_inner() * self.offset
    }

    /// Rotation + translation as a single rigid transform
    #[inline]
    pub fn isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.translation()), self.rotation)
    }

    /// Rotate a world point into the local frame (inverse rotation only)
    #[inline]
    pub fn to_local(&self, point: &Point3<f64>) -> Point3<f64> {
        self.rotation.inverse_transform_point(point)
    }

    /// Restore a local planar point to world space
    #[inline]
    pub fn to_world(&self, point: &Point2<f64>) -> Point3<f64> {
        self.rotation * Point3::new(point.x, point.y, 0.0) + self.translation()
    }
}

/// Outer loop and hole loops flattened into the local XY plane
#[derive(Debug, Clone)]
pub struct ProjectedPolygon {
    pub outer: Vec<Point2<f64>>,
    pub holes: SmallVec<[Vec<Point2<f64>>; 2]>,
    pub placement: Placement,
}

/// Flatten a loop with the inverse of the placement rotation.
/// The local z (the plane offset) is dropped.
#[inline]
fn flatten(points: &[Point3<f64>], placement: &Placement) -> Vec<Point2<f64>> {
    points
        .iter()
        .map(|p| {
            let local = placement.to_local(p);
            Point2::new(local.x, local.y)
        })
        .collect()
}

/// Project a surface loop and its holes onto the plane fitted through the
/// outer loop's first three points.
///
/// Holes use the outer loop's rotation so they stay coincident with it.
/// Inputs are only borrowed; the returned loops are new sequences.
pub fn project_polygon(
    outer: &[Point3<f64>],
    holes: &[Vec<Point3<f64>>],
) -> Result<ProjectedPolygon> {
    let plane = Plane::fit(outer)?;
    let placement = Placement::from_plane(&plane);

    Ok(ProjectedPolygon {
        outer: flatten(outer, &placement),
        holes: holes.iter().map(|hole| flatten(hole, &placement)).collect(),
        placement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_relative_eq;

    fn assert_round_trip(points: &[Point3<f64>]) {
        let projected = project_polygon(points, &[]).unwrap();
        assert_eq!(projected.outer.len(), points.len());

        for (original, flat) in points.iter().zip(&projected.outer) {
            let restored = projected.placement.to_world(flat);
            assert_relative_eq!(restored, *original, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_round_trip_floor() {
        assert_round_trip(&[
            Point3::new(0.0, 0.0, 3.0),
            Point3::new(10.0, 0.0, 3.0),
            Point3::new(10.0, 8.0, 3.0),
            Point3::new(0.0, 8.0, 3.0),
        ]);
    }

    #[test]
    fn test_round_trip_downward_slab() {
        assert_round_trip(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 8.0, 0.0),
            Point3::new(10.0, 8.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        ]);
    }

    #[test]
    fn test_round_trip_wall_facing_y() {
        // Normal is parallel to the preferred up axis
        assert_round_trip(&[
            Point3::new(0.0, 5.0, 0.0),
            Point3::new(4.0, 5.0, 0.0),
            Point3::new(4.0, 5.0, 3.0),
            Point3::new(0.0, 5.0, 3.0),
        ]);
    }

    #[test]
    fn test_round_trip_pitched_roof() {
        assert_round_trip(&[
            Point3::new(0.0, 0.0, 3.0),
            Point3::new(10.0, 0.0, 3.0),
            Point3::new(10.0, 4.0, 5.0),
            Point3::new(5.0, 4.0, 5.0),
            Point3::new(0.0, 4.0, 5.0),
        ]);
    }

    #[test]
    fn test_round_trip_oblique_triangle() {
        assert_round_trip(&[
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-4.0, 7.5, 0.25),
            Point3::new(6.0, -1.0, 9.0),
        ]);
    }

    #[test]
    fn test_projected_points_share_offset() {
        let outer = [
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 6.0, 0.0),
            Point3::new(2.0, 6.0, 3.0),
            Point3::new(2.0, 0.0, 3.0),
        ];
        let projected = project_polygon(&outer, &[]).unwrap();

        for p in &outer {
            let local = projected.placement.to_local(p);
            assert_relative_eq!(local.z, projected.placement.offset, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_holes_use_outer_rotation() {
        let outer = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(6.0, 0.0, 0.0),
            Point3::new(6.0, 0.0, 3.0),
            Point3::new(0.0, 0.0, 3.0),
        ];
        // Clockwise when seen from the wall's normal: the hole alone would
        // fit a flipped plane.
        let hole = vec![
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(2.0, 0.0, 2.0),
            Point3::new(2.0, 0.0, 1.0),
        ];

        let projected = project_polygon(&outer, &[hole.clone()]).unwrap();
        assert_eq!(projected.holes.len(), 1);

        for (original, flat) in hole.iter().zip(&projected.holes[0]) {
            let restored = projected.placement.to_world(flat);
            assert_relative_eq!(restored, *original, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_inputs_are_untouched() {
        let outer = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 3.0),
        ];
        let before = outer.clone();

        let _ = project_polygon(&outer, &[]).unwrap();
        assert_eq!(outer, before);
    }

    #[test]
    fn test_collinear_seed_fails() {
        let outer = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
        ];
        assert!(matches!(
            project_polygon(&outer, &[]),
            Err(Error::DegeneratePlane(_))
        ));
    }

    #[test]
    fn test_isometry_matches_to_world() {
        let outer = [
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 2.0, 5.0),
            Point3::new(4.0, 6.0, 5.0),
        ];
        let projected = project_polygon(&outer, &[]).unwrap();
        let placement = projected.placement;

        let local = Point2::new(0.5, -1.5);
        let via_isometry = placement.isometry() * Point3::new(local.x, local.y, 0.0);
        assert_relative_eq!(via_isometry, placement.to_world(&local), epsilon = 1e-12);
    }
}
