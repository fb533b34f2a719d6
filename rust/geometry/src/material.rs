// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface materials

use gbxml_lite_core::SurfaceType;
use std::fmt;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);

    /// Color from a `0xRRGGBB` value; bits above 24 are masked off
    #[inline]
    pub const fn from_hex(hex: u32) -> Self {
        Color(hex & 0x00ff_ffff)
    }

    /// Parse `#rrggbb`, `0xrrggbb` or bare `rrggbb`
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let digits = text
            .strip_prefix('#')
            .or_else(|| text.strip_prefix("0x"))
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Color)
    }

    #[inline]
    pub const fn hex(&self) -> u32 {
        self.0
    }

    /// Normalized channels in `[0, 1]`
    #[inline]
    pub fn rgb(&self) -> [f32; 3] {
        [
            ((self.0 >> 16) & 0xff) as f32 / 255.0,
            ((self.0 >> 8) & 0xff) as f32 / 255.0,
            (self.0 & 0xff) as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Flat-shaded, double-sided surface material
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub double_sided: bool,
    pub flat_shading: bool,
    /// Surface classification the color was resolved from
    pub surface_type: SurfaceType,
}

impl Material {
    pub fn new(surface_type: SurfaceType, color: Color) -> Self {
        Self {
            color,
            emissive: Color::BLACK,
            double_sided: true,
            flat_shading: true,
            surface_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(Color::parse("#ff0000"), Some(Color::from_hex(0xff0000)));
        assert_eq!(Color::parse("0x00FF00"), Some(Color::from_hex(0x00ff00)));
        assert_eq!(Color::parse("555555"), Some(Color::from_hex(0x555555)));
        assert_eq!(Color::parse("#fff"), None);
        assert_eq!(Color::parse("#gg0000"), None);
    }

    #[test]
    fn test_channels_and_display() {
        let color = Color::from_hex(0xff8000);
        let [r, g, b] = color.rgb();
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(b, 0.0);
        assert_eq!(color.to_string(), "#ff8000");
    }

    #[test]
    fn test_material_defaults() {
        let material = Material::new(SurfaceType::Roof, Color::from_hex(0x00ff00));
        assert_eq!(material.emissive, Color::BLACK);
        assert!(material.double_sided);
        assert!(material.flat_shading);
    }
}
