// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounds and enclosing spheres of placed surface meshes

use crate::mesh::SurfaceMesh;
use crate::Point3;

/// Axis-aligned bounding box in f64 precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
    /// Number of points added
    pub sample_count: usize,
}

/// Sphere enclosing a bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Point3<f64>,
    pub radius: f64,
}

impl BoundingBox {
    /// Create new bounds initialized to invalid state
    pub fn new() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
            sample_count: 0,
        }
    }

    /// Bounds of the world-space vertices of all meshes
    pub fn from_meshes<'a>(meshes: impl IntoIterator<Item = &'a SurfaceMesh>) -> Self {
        let mut bounds = Self::new();
        for mesh in meshes {
            for vertex in mesh.world_vertices() {
                bounds.expand(&vertex);
            }
        }
        bounds
    }

    /// Check if bounds are valid (at least one point added)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.sample_count > 0
    }

    /// Expand bounds to include a point
    #[inline]
    pub fn expand(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
        self.sample_count += 1;
    }

    /// Center of the box, origin when empty
    #[inline]
    pub fn center(&self) -> Point3<f64> {
        if !self.is_valid() {
            return Point3::origin();
        }
        nalgebra::center(&self.min, &self.max)
    }

    /// Sphere centered on the box, radius reaching its corners.
    /// Empty bounds give a zero-radius sphere at the origin.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        if !self.is_valid() {
            return BoundingSphere {
                center: Point3::origin(),
                radius: 0.0,
            };
        }
        BoundingSphere {
            center: self.center(),
            radius: (self.max - self.min).norm() * 0.5,
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingSphere {
    /// True when the sphere can be used to frame a camera
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.radius > 0.0 && self.radius.is_finite())
            || !self.center.coords.iter().all(|v| v.is_finite())
    }
}
