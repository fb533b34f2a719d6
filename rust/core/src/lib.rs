// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # gbXML-Lite Core
//!
//! Typed document model for gbXML (Green Building XML) files, deserialized
//! with [quick-xml](https://docs.rs/quick-xml).
//!
//! Only the paths needed to rebuild surface geometry are modelled:
//!
//! ```text
//! gbXML/Campus/Surface[@surfaceType,@id]/PlanarGeometry/PolyLoop/CartesianPoint/Coordinate
//! gbXML/Campus/Surface/Opening/PlanarGeometry/PolyLoop/...
//! ```
//!
//! Everything else in the document is ignored.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gbxml_lite_core::{parse_gbxml, SurfaceType};
//!
//! let doc = parse_gbxml(&xml)?;
//! for surface in doc.surfaces() {
//!     if surface.surface_type() == SurfaceType::Roof {
//!         println!("roof with {} openings", surface.openings.len());
//!     }
//! }
//! ```

pub mod document;
pub mod error;
pub mod surface_type;

pub use document::{
    parse_gbxml, Campus, CartesianPoint, GbxmlDocument, OpeningNode, PlanarGeometry, PolyLoop,
    SurfaceNode,
};
pub use error::{Error, Result};
pub use surface_type::SurfaceType;
