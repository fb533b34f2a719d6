// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! gbXML document tree
//!
//! Serde mirror of the subset of the gbXML schema that carries surface
//! geometry. Repeated elements always deserialize into a `Vec`, so a surface
//! with one `Opening` and a surface with many have the same shape.

use crate::error::Result;
use crate::surface_type::SurfaceType;
use serde::Deserialize;
use std::str::FromStr;

/// Root `gbXML` element
#[derive(Debug, Clone, Deserialize)]
pub struct GbxmlDocument {
    #[serde(rename = "Campus")]
    pub campus: Campus,
}

/// `Campus` element holding the flat surface list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Campus {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    /// Surfaces in document order. Other campus children (`Location`,
    /// `Building`) may sit between them.
    #[serde(rename = "Surface", default)]
    pub surfaces: Vec<SurfaceNode>,
}

/// `Surface` element
#[derive(Debug, Clone, Deserialize)]
pub struct SurfaceNode {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "@surfaceType", default)]
    pub surface_type: Option<String>,
    #[serde(rename = "PlanarGeometry", default)]
    pub planar_geometry: Option<PlanarGeometry>,
    #[serde(rename = "Opening", default)]
    pub openings: Vec<OpeningNode>,
}

/// `Opening` element (window, door, skylight...)
#[derive(Debug, Clone, Deserialize)]
pub struct OpeningNode {
    #[serde(rename = "@id", default)]
    pub id: Option<String>,
    #[serde(rename = "PlanarGeometry", default)]
    pub planar_geometry: Option<PlanarGeometry>,
}

/// `PlanarGeometry` element
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanarGeometry {
    #[serde(rename = "PolyLoop", default)]
    pub poly_loop: PolyLoop,
}

/// `PolyLoop` element: an implicitly closed ring of points
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolyLoop {
    #[serde(rename = "CartesianPoint", default)]
    pub points: Vec<CartesianPoint>,
}

/// `CartesianPoint` element with its raw coordinate tokens
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartesianPoint {
    /// Text of each `Coordinate` child, in x, y, z order. Left unparsed here.
    #[serde(rename = "Coordinate", default)]
    pub coordinates: Vec<String>,
}

impl GbxmlDocument {
    /// All surfaces in document order
    #[inline]
    pub fn surfaces(&self) -> &[SurfaceNode] {
        &self.campus.surfaces
    }

    /// Number of surfaces in the campus
    #[inline]
    pub fn surface_count(&self) -> usize {
        self.campus.surfaces.len()
    }
}

impl FromStr for GbxmlDocument {
    type Err = crate::Error;

    fn from_str(xml: &str) -> Result<Self> {
        parse_gbxml(xml)
    }
}

impl SurfaceNode {
    /// Classification from the `surfaceType` attribute. A missing attribute
    /// yields `Other("")`.
    pub fn surface_type(&self) -> SurfaceType {
        SurfaceType::from_tag(self.surface_type.as_deref().unwrap_or(""))
    }

    /// Outer boundary loop, if the surface carries planar geometry
    #[inline]
    pub fn outer_loop(&self) -> Option<&PolyLoop> {
        self.planar_geometry.as_ref().map(|g| &g.poly_loop)
    }

    /// Human-readable identity for diagnostics: the `id` attribute, or the
    /// position in the campus surface list.
    pub fn label(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("#{}", index),
        }
    }
}

impl OpeningNode {
    /// Boundary loop of the opening
    #[inline]
    pub fn poly_loop(&self) -> Option<&PolyLoop> {
        self.planar_geometry.as_ref().map(|g| &g.poly_loop)
    }
}

impl PolyLoop {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Parse gbXML text into a document tree
pub fn parse_gbxml(xml: &str) -> Result<GbxmlDocument> {
    Ok(quick_xml::de::from_str(xml)?)
}
