// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Camera and orbit controls

use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector3};

/// Camera/controls collaborator that framing writes to.
pub trait CameraRig {
    /// Orbit target (the point the controls rotate around)
    fn set_target(&mut self, target: Point3<f64>);
    /// Largest distance the controls may move away from the target
    fn set_max_distance(&mut self, distance: f64);
    fn set_position(&mut self, position: Point3<f64>);
    /// Far clipping plane distance
    fn set_far(&mut self, far: f64);
    /// Viewport aspect ratio (width / height)
    fn set_aspect(&mut self, aspect: f64);
    /// Recompute projection parameters after any change above
    fn update_projection(&mut self);

    /// Per-frame controls step. Returns true when the camera moved.
    fn update_controls(&mut self) -> bool {
        false
    }
}

/// Perspective camera parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub fov_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    /// Z-up scene convention
    pub up: Vector3<f64>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 100.0,
            aspect: 1.0,
            near: 1.0,
            far: 10000.0,
            up: Vector3::z(),
        }
    }
}

/// Perspective camera with an orbit-style distance limit
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    settings: CameraSettings,
    position: Point3<f64>,
    target: Point3<f64>,
    max_distance: f64,
    projection: Matrix4<f64>,
}

impl OrbitCamera {
    pub fn new(settings: CameraSettings) -> Self {
        let mut camera = Self {
            settings,
            position: Point3::new(1.0, -1.0, 1.0),
            target: Point3::origin(),
            max_distance: f64::INFINITY,
            projection: Matrix4::identity(),
        };
        camera.update_projection();
        camera
    }

    #[inline]
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    #[inline]
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    #[inline]
    pub fn target(&self) -> Point3<f64> {
        self.target
    }

    #[inline]
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    #[inline]
    pub fn far(&self) -> f64 {
        self.settings.far
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        (self.position - self.target).norm()
    }

    /// Projection matrix as of the last `update_projection`
    #[inline]
    pub fn projection_matrix(&self) -> &Matrix4<f64> {
        &self.projection
    }

    /// View matrix looking from the position to the target
    pub fn view_matrix(&self) -> Matrix4<f64> {
        if self.distance() <= f64::EPSILON {
            return Matrix4::identity();
        }
        Isometry3::look_at_rh(&self.position, &self.target, &self.settings.up).to_homogeneous()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl CameraRig for OrbitCamera {
    fn set_target(&mut self, target: Point3<f64>) {
        self.target = target;
    }

    fn set_max_distance(&mut self, distance: f64) {
        self.max_distance = distance;
    }

    fn set_position(&mut self, position: Point3<f64>) {
        self.position = position;
    }

    fn set_far(&mut self, far: f64) {
        self.settings.far = far;
    }

    fn set_aspect(&mut self, aspect: f64) {
        self.settings.aspect = aspect;
    }

    /// Pull the camera back inside the orbit limit around the target
    fn update_controls(&mut self) -> bool {
        let offset = self.position - self.target;
        let distance = offset.norm();
        if distance <= f64::EPSILON {
            return false;
        }

        let clamped = distance.min(self.max_distance);
        if clamped == distance {
            return false;
        }

        self.position = self.target + offset * (clamped / distance);
        true
    }

    fn update_projection(&mut self) {
        let CameraSettings {
            fov_degrees,
            aspect,
            near,
            far,
            ..
        } = self.settings;

        // Perspective3 panics on a zero aspect or coincident clip planes
        if !(aspect > 0.0 && aspect.is_finite()) || !((far - near).abs() > f64::EPSILON) {
            tracing::warn!(aspect, near, far, "Skipping projection update with invalid parameters");
            return;
        }

        self.projection =
            Perspective3::new(aspect, fov_degrees.to_radians(), near, far).to_homogeneous();
    }
}
