// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use crate::material::Material;
use crate::projection::Placement;
use nalgebra::{Point3, Vector3};

/// Triangle mesh
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Add a vertex with normal
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);

        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Vertex position at `index` in f64
    #[inline]
    pub fn position(&self, index: usize) -> Point3<f64> {
        let i = index * 3;
        Point3::new(
            self.positions[i] as f64,
            self.positions[i + 1] as f64,
            self.positions[i + 2] as f64,
        )
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// One renderable surface: a planar mesh in its local frame, the placement
/// that puts it in the world, and its material.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    /// Triangles in the local projection plane (z = 0, normals +Z)
    pub mesh: Mesh,
    pub placement: Placement,
    pub material: Material,
}

impl SurfaceMesh {
    /// Vertex positions with the placement applied
    pub fn world_vertices(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        let isometry = self.placement.isometry();
        (0..self.mesh.vertex_count()).map(move |i| isometry * self.mesh.position(i))
    }

    /// Total triangle area. Rigid placement does not change it, so the local
    /// positions are used directly.
    pub fn area(&self) -> f64 {
        self.mesh
            .indices
            .chunks_exact(3)
            .map(|t| {
                let a = self.mesh.position(t[0] as usize);
                let b = self.mesh.position(t[1] as usize);
                let c = self.mesh.position(t[2] as usize);
                (b - a).cross(&(c - a)).norm() * 0.5
            })
            .sum()
    }

    /// Copy of the mesh with positions and normals in world space
    pub fn to_world_mesh(&self) -> Mesh {
        let normal = self.placement.normal.into_inner();
        let mut world = Mesh::with_capacity(self.mesh.vertex_count(), self.mesh.indices.len());
        for position in self.world_vertices() {
            world.add_vertex(position, normal);
        }
        world.indices.extend_from_slice(&self.mesh.indices);
        world
    }
}
