// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Camera framing from a scene group's bounding sphere

use crate::camera::CameraRig;
use crate::error::FramingError;
use crate::scene::SceneGroup;
use gbxml_lite_geometry::BoundingSphere;
use nalgebra::{Point3, Vector3};

/// Orbit limit as a multiple of the sphere radius
pub const MAX_DISTANCE_FACTOR: f64 = 5.0;
/// Far clipping plane as a multiple of the sphere radius
pub const FAR_FACTOR: f64 = 10.0;

/// Camera parameters derived from a bounding sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Framing {
    pub sphere: BoundingSphere,
    pub target: Point3<f64>,
    pub max_distance: f64,
    pub position: Point3<f64>,
    pub far: f64,
}

impl Framing {
    /// Place the camera one radius off the center along (+x, -y, +z), Z up
    pub fn from_sphere(sphere: BoundingSphere) -> Self {
        let r = sphere.radius;
        Self {
            sphere,
            target: sphere.center,
            max_distance: MAX_DISTANCE_FACTOR * r,
            position: sphere.center + Vector3::new(r, -r, r),
            far: FAR_FACTOR * r,
        }
    }

    /// Write the parameters to a camera rig and refresh its projection
    pub fn apply<C: CameraRig + ?Sized>(&self, rig: &mut C) {
        rig.set_target(self.target);
        rig.set_max_distance(self.max_distance);
        rig.set_position(self.position);
        rig.set_far(self.far);
        rig.update_projection();
    }
}

/// Frame a camera on a scene group.
///
/// Empty groups and degenerate bounds leave the rig untouched.
pub fn frame_group<C: CameraRig + ?Sized>(
    group: &SceneGroup,
    rig: &mut C,
) -> Result<Framing, FramingError> {
    if group.is_empty() {
        return Err(FramingError::EmptyScene);
    }

    let sphere = group.bounding_sphere();
    if sphere.is_degenerate() {
        return Err(FramingError::DegenerateBounds {
            radius: sphere.radius,
        });
    }

    let framing = Framing::from_sphere(sphere);
    framing.apply(rig);
    Ok(framing)
}
