// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface color table
//!
//! One color per known surface type plus a fallback. JSON keys use the gbXML
//! tag names (`"Roof"`, `"SlabOnGrade"`, ...) and `"Fallback"`; colors may be
//! written as `"#rrggbb"`, `"0xrrggbb"` or a plain integer. Unknown keys and
//! malformed colors are rejected when the table is loaded.

use crate::error::Result;
use gbxml_lite_core::SurfaceType;
use gbxml_lite_geometry::{Color, Material};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Explicit surface type to color mapping
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct ColorTable {
    #[serde(deserialize_with = "de_color")]
    pub interior_wall: Color,
    #[serde(deserialize_with = "de_color")]
    pub exterior_wall: Color,
    #[serde(deserialize_with = "de_color")]
    pub roof: Color,
    #[serde(deserialize_with = "de_color")]
    pub interior_floor: Color,
    #[serde(deserialize_with = "de_color")]
    pub shade: Color,
    #[serde(deserialize_with = "de_color")]
    pub slab_on_grade: Color,
    #[serde(deserialize_with = "de_color")]
    pub fallback: Color,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            interior_wall: Color::from_hex(0xff0000),
            exterior_wall: Color::from_hex(0x0000ff),
            roof: Color::from_hex(0x00ff00),
            interior_floor: Color::from_hex(0xffff00),
            shade: Color::from_hex(0xff00ff),
            slab_on_grade: Color::from_hex(0x555555),
            fallback: Color::from_hex(0x808080),
        }
    }
}

impl ColorTable {
    /// Parse a JSON table; missing entries keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON table from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Color for a surface type. Unknown types get the fallback.
    pub fn resolve(&self, surface_type: &SurfaceType) -> Color {
        match surface_type {
            SurfaceType::InteriorWall => self.interior_wall,
            SurfaceType::ExteriorWall => self.exterior_wall,
            SurfaceType::Roof => self.roof,
            SurfaceType::InteriorFloor => self.interior_floor,
            SurfaceType::Shade => self.shade,
            SurfaceType::SlabOnGrade => self.slab_on_grade,
            SurfaceType::Other(_) => self.fallback,
        }
    }

    /// Surface material with the resolved color
    pub fn material_for(&self, surface_type: SurfaceType) -> Material {
        let color = self.resolve(&surface_type);
        Material::new(surface_type, color)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Hex(u32),
    Text(String),
}

fn de_color<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Color, D::Error> {
    match ColorValue::deserialize(deserializer)? {
        ColorValue::Hex(hex) if hex <= 0xff_ffff => Ok(Color::from_hex(hex)),
        ColorValue::Hex(hex) => Err(D::Error::custom(format!(
            "color {:#x} does not fit in 24 bits",
            hex
        ))),
        ColorValue::Text(text) => Color::parse(&text)
            .ok_or_else(|| D::Error::custom(format!("invalid color {:?}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roof_resolves_to_roof_color() {
        let table = ColorTable::default();
        assert_eq!(table.resolve(&SurfaceType::Roof), Color::from_hex(0x00ff00));
        assert_eq!(
            table.resolve(&SurfaceType::SlabOnGrade),
            Color::from_hex(0x555555)
        );
    }

    #[test]
    fn test_unknown_type_resolves_to_fallback() {
        let table = ColorTable::default();
        let surface_type = SurfaceType::from_tag("UndergroundSlab");
        assert_eq!(table.resolve(&surface_type), table.fallback);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let table = ColorTable::from_json(r##"{"Roof": "#1e434c", "Fallback": 8421504}"##).unwrap();

        assert_eq!(table.roof, Color::from_hex(0x1e434c));
        assert_eq!(table.fallback, Color::from_hex(0x808080));
        assert_eq!(table.interior_wall, ColorTable::default().interior_wall);
    }

    #[test]
    fn test_bad_color_is_rejected_at_load() {
        assert!(ColorTable::from_json(r#"{"Roof": "green"}"#).is_err());
        assert!(ColorTable::from_json(r#"{"Roof": 16777216}"#).is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected_at_load() {
        assert!(ColorTable::from_json(r##"{"Rooof": "#00ff00"}"##).is_err());
    }

    #[test]
    fn test_material_for_carries_type() {
        let material = ColorTable::default().material_for(SurfaceType::Shade);
        assert_eq!(material.color, Color::from_hex(0xff00ff));
        assert_eq!(material.surface_type, SurfaceType::Shade);
    }
}
