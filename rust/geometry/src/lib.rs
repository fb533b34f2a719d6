// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! gbXML-Lite Geometry Processing
//!
//! Rebuilds renderable planar meshes from gbXML polygon loops using earcutr
//! triangulation and nalgebra for transformations.
//!
//! The pipeline for one surface is:
//!
//! 1. [`extract_surface_loops`] parses the coordinate tokens of the outer
//!    loop and each opening.
//! 2. [`project_polygon`] fits a plane through the outer loop and rotates
//!    every loop into its local XY plane.
//! 3. [`build_surface_mesh`] triangulates the flattened shape with its holes
//!    and attaches the [`Placement`] that restores it to world space.

pub mod bounds;
pub mod builder;
pub mod error;
pub mod material;
pub mod mesh;
pub mod plane;
pub mod points;
pub mod projection;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use bounds::{BoundingBox, BoundingSphere};
pub use builder::build_surface_mesh;
pub use error::{Error, Result};
pub use material::{Color, Material};
pub use mesh::{Mesh, SurfaceMesh};
pub use plane::Plane;
pub use points::{extract_points, extract_surface_loops, SurfaceLoops};
pub use projection::{project_polygon, Placement, ProjectedPolygon};
pub use triangulation::{triangulate_polygon, triangulate_polygon_with_holes};
