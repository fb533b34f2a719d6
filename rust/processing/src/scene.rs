// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene groups and the render target slot they are attached to.

use gbxml_lite_geometry::{BoundingBox, BoundingSphere, SurfaceMesh};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Immutable set of surface meshes built from one document load
#[derive(Debug, Clone)]
pub struct SceneGroup {
    generation: u64,
    meshes: Vec<SurfaceMesh>,
}

impl SceneGroup {
    /// Wrap meshes in a new group with a fresh generation number
    pub fn new(meshes: Vec<SurfaceMesh>) -> Self {
        Self {
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
            meshes,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Monotonic id, unique per group in this process
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn meshes(&self) -> &[SurfaceMesh] {
        &self.meshes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Axis-aligned bounds of all world-space vertices
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_meshes(&self.meshes)
    }

    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.bounds().bounding_sphere()
    }
}

/// Host scene that owns at most one top-level group.
pub trait RenderTarget {
    /// Detach the current group and attach `group` as one step.
    /// Returns the detached group, if any.
    fn swap_group(&self, group: Arc<SceneGroup>) -> Option<Arc<SceneGroup>>;

    /// Snapshot of the attached group
    fn current_group(&self) -> Option<Arc<SceneGroup>>;
}

/// Shared slot holding the attached scene group.
///
/// Writers replace the whole `Arc` under one write lock; readers clone the
/// `Arc` and never observe a partially built group.
#[derive(Debug, Default)]
pub struct SceneSlot {
    group: RwLock<Option<Arc<SceneGroup>>>,
}

impl SceneSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderTarget for SceneSlot {
    fn swap_group(&self, group: Arc<SceneGroup>) -> Option<Arc<SceneGroup>> {
        let mut slot = self.group.write().unwrap_or_else(PoisonError::into_inner);
        slot.replace(group)
    }

    fn current_group(&self) -> Option<Arc<SceneGroup>> {
        self.group
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_increase() {
        let first = SceneGroup::empty();
        let second = SceneGroup::empty();
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_swap_returns_previous() {
        let slot = SceneSlot::new();
        assert!(slot.current_group().is_none());

        let first = Arc::new(SceneGroup::empty());
        assert!(slot.swap_group(first.clone()).is_none());

        let second = Arc::new(SceneGroup::empty());
        let detached = slot.swap_group(second.clone()).unwrap();
        assert_eq!(detached.generation(), first.generation());
        assert_eq!(
            slot.current_group().unwrap().generation(),
            second.generation()
        );
    }

    #[test]
    fn test_reader_snapshot_outlives_swap() {
        let slot = SceneSlot::new();
        slot.swap_group(Arc::new(SceneGroup::empty()));

        let snapshot = slot.current_group().unwrap();
        slot.swap_group(Arc::new(SceneGroup::empty()));

        assert_ne!(
            snapshot.generation(),
            slot.current_group().unwrap().generation()
        );
        assert_eq!(Arc::strong_count(&snapshot), 1);
    }

    #[test]
    fn test_empty_group_bounds() {
        let group = SceneGroup::empty();
        assert!(group.is_empty());
        assert!(group.bounding_sphere().is_degenerate());
    }
}
