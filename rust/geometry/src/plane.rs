// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plane fitting and plane-aligned rotations

use crate::{Error, Point3, Result, Vector3};
use nalgebra::{Matrix3, Rotation3, Unit, UnitQuaternion};

/// Smallest accepted sine of the angle between the two seed edges
pub const PLANE_EPSILON: f64 = 1e-9;

/// Seed edges shorter than this fraction of the loop extent count as
/// coincident points
pub const COINCIDENT_EPSILON: f64 = 1e-12;

/// Plane in Hessian normal form: `normal · p + constant = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Unit<Vector3<f64>>,
    pub constant: f64,
}

impl Plane {
    /// Plane through three points, with the normal following
    /// `(c - b) × (a - b)` so counter-clockwise loops face their viewer.
    ///
    /// The seed is collinear when the sine of the angle at `b` is below
    /// [`PLANE_EPSILON`], however short the two edges are. `extent` is the
    /// size of the loop the points come from and only sets the floor below
    /// which an edge counts as zero length.
    pub fn from_coplanar_points(
        a: &Point3<f64>,
        b: &Point3<f64>,
        c: &Point3<f64>,
        extent: f64,
    ) -> Result<Self> {
        let all_finite = [a, b, c]
            .iter()
            .all(|p| p.coords.iter().all(|v| v.is_finite()));
        if !all_finite || !extent.is_finite() {
            return Err(Error::DegeneratePlane("non-finite seed point".to_string()));
        }

        let ab = a - b;
        let cb = c - b;
        let (ab_len, cb_len) = (ab.norm(), cb.norm());
        // Also rejects a zero extent, where the floor is zero
        let floor = COINCIDENT_EPSILON * extent;
        if !(ab_len > floor && cb_len > floor) {
            return Err(Error::DegeneratePlane(format!(
                "coincident seed points (edges {:e} and {:e}, extent = {})",
                ab_len, cb_len, extent
            )));
        }

        let cross = cb.cross(&ab);
        let magnitude = cross.norm();
        if !(magnitude > PLANE_EPSILON * ab_len * cb_len) {
            return Err(Error::DegeneratePlane(format!(
                "seed points are collinear (sin = {:e})",
                magnitude / (ab_len * cb_len)
            )));
        }

        let normal = Unit::new_unchecked(cross / magnitude);
        let constant = -normal.dot(&a.coords);
        Ok(Self { normal, constant })
    }

    /// Fit a plane through the first three points of a loop
    pub fn fit(points: &[Point3<f64>]) -> Result<Self> {
        if points.len() < 3 {
            return Err(Error::TooFewPoints(points.len()));
        }
        Self::from_coplanar_points(&points[0], &points[1], &points[2], extent(points))
    }

    /// Signed distance from the origin along the normal
    #[inline]
    pub fn offset(&self) -> f64 {
        -self.constant
    }

    /// Signed distance of a point to the plane
    #[inline]
    pub fn distance_to_point(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&point.coords) + self.constant
    }
}

/// Largest axis span of the points' bounding box
pub fn extent(points: &[Point3<f64>]) -> f64 {
    let mut min = Vector3::repeat(f64::INFINITY);
    let mut max = Vector3::repeat(f64::NEG_INFINITY);
    for p in points {
        min = min.inf(&p.coords);
        max = max.sup(&p.coords);
    }
    (max - min).max()
}

/// Rotation whose local +Z axis points along `direction`, using +Y as the
/// preferred up axis (the look-at convention of a non-camera scene object).
///
/// When `direction` is parallel to +Y, +Z is used as the up axis instead so
/// the rotation stays exact.
pub fn look_at_rotation(direction: &Unit<Vector3<f64>>) -> UnitQuaternion<f64> {
    let z = direction.into_inner();

    let mut x = Vector3::y().cross(&z);
    if x.norm_squared() < 1e-20 {
        x = Vector3::z().cross(&z);
    }
    let x = x.normalize();
    let y = z.cross(&x);

    let rotation = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[x, y, z]));
    UnitQuaternion::from_rotation_matrix(&rotation)
}
