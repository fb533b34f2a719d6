// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed light setup handed to the host renderer every frame.

use gbxml_lite_geometry::Color;
use nalgebra::Point3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Point3<f64>,
    pub cast_shadow: bool,
    /// Shadow map resolution (square)
    pub shadow_map_size: u32,
}

/// Point light that travels with the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLight {
    pub color: Color,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    pub camera_light: CameraLight,
    /// Length of the world axes helper drawn at the origin
    pub axes_helper_size: f64,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: Color::from_hex(0x999999),
            },
            directional: DirectionalLight {
                color: Color::WHITE,
                intensity: 1.0,
                position: Point3::new(1.0, 0.0, 1.0),
                cast_shadow: true,
                shadow_map_size: 2048,
            },
            camera_light: CameraLight {
                color: Color::WHITE,
                intensity: 0.5,
            },
            axes_helper_size: 200.0,
        }
    }
}
