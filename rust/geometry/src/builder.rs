// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface mesh builder
//!
//! Triangulates a projected outer loop with its holes and attaches the
//! placement and material that turn it into a renderable surface.

use crate::material::Material;
use crate::mesh::{Mesh, SurfaceMesh};
use crate::projection::ProjectedPolygon;
use crate::triangulation::{strip_closing_point, triangulate_polygon_with_holes, usable_holes};
use crate::{Error, Point2, Point3, Result, Vector3};
use smallvec::SmallVec;

/// Build the mesh for one projected surface.
///
/// The outer loop is closed implicitly. Holes are inner boundaries and are
/// not checked for containment or overlap. Every triangle is wound
/// counter-clockwise in the local plane, so faces point along the placement
/// normal.
pub fn build_surface_mesh(projected: &ProjectedPolygon, material: Material) -> Result<SurfaceMesh> {
    let outer = strip_closing_point(&projected.outer);
    let holes: SmallVec<[&[Point2<f64>]; 2]> = projected
        .holes
        .iter()
        .map(|hole| strip_closing_point(hole))
        .collect();

    let indices = triangulate_polygon_with_holes(outer, &holes)?;
    if indices.is_empty() {
        return Err(Error::Triangulation("no triangles produced".to_string()));
    }

    let vertices: Vec<Point2<f64>> = outer
        .iter()
        .chain(usable_holes(&holes).flatten())
        .copied()
        .collect();

    let mut mesh = Mesh::with_capacity(vertices.len(), indices.len());
    for p in &vertices {
        mesh.add_vertex(Point3::new(p.x, p.y, 0.0), Vector3::z());
    }

    for triangle in indices.chunks_exact(3) {
        let (a, b, c) = (triangle[0], triangle[1], triangle[2]);
        let winding = (vertices[b] - vertices[a]).perp(&(vertices[c] - vertices[a]));
        if winding >= 0.0 {
            mesh.add_triangle(a as u32, b as u32, c as u32);
        } else {
            mesh.add_triangle(a as u32, c as u32, b as u32);
        }
    }

    Ok(SurfaceMesh {
        mesh,
        placement: projected.placement,
        material,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Color;
    use crate::projection::project_polygon;
    use gbxml_lite_core::SurfaceType;

    fn wall_material() -> Material {
        Material::new(SurfaceType::ExteriorWall, Color::from_hex(0x0000ff))
    }

    fn rect_xz(x0: f64, z0: f64, x1: f64, z1: f64, y: f64) -> Vec<Point3<f64>> {
        vec![
            Point3::new(x0, y, z0),
            Point3::new(x1, y, z0),
            Point3::new(x1, y, z1),
            Point3::new(x0, y, z1),
        ]
    }

    #[test]
    fn test_wall_with_window_area() {
        let outer = rect_xz(0.0, 0.0, 10.0, 3.0, 0.0);
        let window = rect_xz(2.0, 1.0, 4.0, 2.0, 0.0);
        let door = rect_xz(6.0, 0.5, 7.0, 2.5, 0.0);

        let projected = project_polygon(&outer, &[window, door]).unwrap();
        let surface = build_surface_mesh(&projected, wall_material()).unwrap();

        assert!((surface.area() - (30.0 - 2.0 - 2.0)).abs() < 1e-4);
        assert_eq!(surface.mesh.vertex_count(), 12);
    }

    #[test]
    fn test_world_vertices_land_on_source_plane() {
        let outer = rect_xz(0.0, 0.0, 5.0, 3.0, 7.0);
        let projected = project_polygon(&outer, &[]).unwrap();
        let surface = build_surface_mesh(&projected, wall_material()).unwrap();

        let world: Vec<_> = surface.world_vertices().collect();
        assert_eq!(world.len(), 4);
        for (w, original) in world.iter().zip(&outer) {
            assert!((w - original).norm() < 1e-5);
        }
    }

    #[test]
    fn test_closing_duplicate_is_dropped() {
        let mut outer = rect_xz(0.0, 0.0, 2.0, 2.0, 0.0);
        outer.push(outer[0]);

        let projected = project_polygon(&outer, &[]).unwrap();
        let surface = build_surface_mesh(&projected, wall_material()).unwrap();

        assert_eq!(surface.mesh.vertex_count(), 4);
        assert_eq!(surface.mesh.triangle_count(), 2);
        assert!((surface.area() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_triangles_face_the_normal() {
        let outer = rect_xz(0.0, 0.0, 4.0, 4.0, 0.0);
        let hole = rect_xz(1.0, 1.0, 2.0, 2.0, 0.0);
        let projected = project_polygon(&outer, &[hole]).unwrap();
        let surface = build_surface_mesh(&projected, wall_material()).unwrap();

        let world = surface.to_world_mesh();
        let normal = surface.placement.normal.into_inner();
        for t in world.indices.chunks_exact(3) {
            let a = world.position(t[0] as usize);
            let b = world.position(t[1] as usize);
            let c = world.position(t[2] as usize);
            assert!((b - a).cross(&(c - a)).dot(&normal) > 0.0);
        }
    }

    #[test]
    fn test_material_is_attached() {
        let outer = rect_xz(0.0, 0.0, 1.0, 1.0, 0.0);
        let projected = project_polygon(&outer, &[]).unwrap();
        let surface = build_surface_mesh(&projected, wall_material()).unwrap();

        assert_eq!(surface.material.color, Color::from_hex(0x0000ff));
        assert_eq!(surface.material.surface_type, SurfaceType::ExteriorWall);
    }
}
