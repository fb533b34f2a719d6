// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface assembly with parallel mesh reconstruction.
//!
//! Every surface of a document is rebuilt independently on the rayon pool.
//! A surface that fails is logged and skipped; the rest of the document
//! still makes it into the scene group.

use crate::camera::CameraRig;
use crate::colors::ColorTable;
use crate::error::FramingError;
use crate::framing::{frame_group, Framing};
use crate::scene::{RenderTarget, SceneGroup};
use gbxml_lite_core::{GbxmlDocument, SurfaceNode};
use gbxml_lite_geometry::{
    build_surface_mesh, extract_surface_loops, project_polygon, SurfaceMesh,
};
use rayon::prelude::*;
use std::sync::Arc;

/// One surface that could not be rebuilt
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceFailure {
    /// Position of the surface in the document
    pub index: usize,
    /// Surface id, or `#index` when it has none
    pub label: String,
    pub error: gbxml_lite_geometry::Error,
}

/// Outcome counters for one assembly pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyReport {
    /// Surfaces found in the document
    pub surfaces: usize,
    /// Meshes that made it into the group
    pub meshes: usize,
    /// Meshes colored with the fallback color
    pub fallback_colors: usize,
    pub failures: Vec<SurfaceFailure>,
}

impl AssemblyReport {
    #[inline]
    pub fn skipped(&self) -> usize {
        self.failures.len()
    }
}

/// A freshly built scene group with its report. Not yet attached anywhere.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub group: SceneGroup,
    pub report: AssemblyReport,
}

/// Rebuild a single surface: extract, project, triangulate, color.
pub fn assemble_surface(
    surface: &SurfaceNode,
    colors: &ColorTable,
) -> gbxml_lite_geometry::Result<SurfaceMesh> {
    let loops = extract_surface_loops(surface)?;
    let projected = project_polygon(&loops.outer, &loops.openings)?;
    build_surface_mesh(&projected, colors.material_for(surface.surface_type()))
}

/// Rebuild every surface of a document into a new scene group.
///
/// Mesh order follows document order regardless of how the work was
/// scheduled.
pub fn assemble(document: &GbxmlDocument, colors: &ColorTable) -> Assembly {
    let start = std::time::Instant::now();
    let surfaces = document.surfaces();

    tracing::debug!(surfaces = surfaces.len(), "Assembling surfaces");

    let results: Vec<Result<SurfaceMesh, SurfaceFailure>> = surfaces
        .par_iter()
        .enumerate()
        .map(|(index, surface)| {
            assemble_surface(surface, colors).map_err(|error| SurfaceFailure {
                index,
                label: surface.label(index),
                error,
            })
        })
        .collect();

    let mut report = AssemblyReport {
        surfaces: surfaces.len(),
        ..Default::default()
    };
    let mut meshes = Vec::with_capacity(results.len());

    for result in results {
        match result {
            Ok(mesh) => {
                if mesh.material.surface_type.is_other() {
                    tracing::debug!(
                        surface_type = %mesh.material.surface_type,
                        "Unknown surface type, using fallback color"
                    );
                    report.fallback_colors += 1;
                }
                meshes.push(mesh);
            }
            Err(failure) => {
                tracing::warn!(
                    surface = %failure.label,
                    index = failure.index,
                    kind = failure.error.kind(),
                    error = %failure.error,
                    "Skipping surface"
                );
                report.failures.push(failure);
            }
        }
    }

    report.meshes = meshes.len();

    tracing::info!(
        surfaces = report.surfaces,
        meshes = report.meshes,
        skipped = report.skipped(),
        fallback_colors = report.fallback_colors,
        elapsed_ms = start.elapsed().as_millis(),
        "Surface assembly complete"
    );

    Assembly {
        group: SceneGroup::new(meshes),
        report,
    }
}

/// Result of loading a document into a render target
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub report: AssemblyReport,
    /// The group now attached to the target
    pub group: Arc<SceneGroup>,
    /// Framing applied to the camera, or why the camera was left alone
    pub framing: Result<Framing, FramingError>,
}

/// Assemble a document, swap the new group into the target, then frame the
/// camera on it.
pub fn load_document<T, C>(
    document: &GbxmlDocument,
    colors: &ColorTable,
    target: &T,
    rig: &mut C,
) -> LoadOutcome
where
    T: RenderTarget + ?Sized,
    C: CameraRig + ?Sized,
{
    attach_and_frame(assemble(document, colors), target, rig)
}

/// Swap an assembled group into the target and frame the camera on it.
///
/// The previous group is replaced in one step even when the new one is
/// empty. Framing failures are reported, not raised.
pub fn attach_and_frame<T, C>(assembly: Assembly, target: &T, rig: &mut C) -> LoadOutcome
where
    T: RenderTarget + ?Sized,
    C: CameraRig + ?Sized,
{
    let Assembly { group, report } = assembly;
    let group = Arc::new(group);

    if let Some(previous) = target.swap_group(Arc::clone(&group)) {
        tracing::debug!(
            previous = previous.generation(),
            current = group.generation(),
            "Replaced scene group"
        );
    }

    let framing = frame_group(&group, rig);
    match &framing {
        Ok(framing) => tracing::debug!(
            radius = framing.sphere.radius,
            far = framing.far,
            "Camera framed on scene"
        ),
        Err(error) => tracing::warn!(error = %error, "Camera left unchanged"),
    }

    LoadOutcome {
        report,
        group,
        framing,
    }
}
