// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewer facade
//!
//! Owns the scene slot, the camera and the frame loop. Loading fetches a
//! document, rebuilds its surfaces on the blocking pool, swaps the new
//! group in and frames the camera. The frame loop hands the host a
//! snapshot of the current group together with the camera and lights.

use crate::config::EngineConfig;
use crate::error::LoadError;
use crate::frame_loop::{spawn_frame_loop, FrameHandle};
use crate::loader::{DocumentLoader, DocumentSource};
use gbxml_lite_core::GbxmlDocument;
use gbxml_lite_processing::{
    assemble, attach_and_frame, CameraRig, LightRig, LoadOutcome, RenderTarget, SceneGroup,
    SceneSlot,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What the host renders on one tick
#[derive(Debug)]
pub struct Frame<'a, C> {
    /// Frame counter since the loop was started
    pub number: u64,
    /// Attached group, `None` before the first load
    pub group: Option<Arc<SceneGroup>>,
    pub camera: &'a C,
    pub lights: &'a LightRig,
}

pub struct Viewer<C: CameraRig> {
    config: EngineConfig,
    loader: DocumentLoader,
    scene: Arc<SceneSlot>,
    camera: Arc<Mutex<C>>,
    lights: LightRig,
    frame_loop: Option<FrameHandle>,
}

fn lock<C>(camera: &Mutex<C>) -> MutexGuard<'_, C> {
    camera.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<C: CameraRig + Send + 'static> Viewer<C> {
    /// Create a viewer. The camera gets the configured aspect ratio.
    pub fn new(config: EngineConfig, mut camera: C) -> Result<Self, LoadError> {
        let loader = DocumentLoader::new(config.request_timeout)?;

        camera.set_aspect(config.camera.aspect);
        camera.update_projection();

        Ok(Self {
            config,
            loader,
            scene: Arc::new(SceneSlot::new()),
            camera: Arc::new(Mutex::new(camera)),
            lights: LightRig::default(),
            frame_loop: None,
        })
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scene slot shared with the frame loop
    pub fn scene(&self) -> Arc<SceneSlot> {
        Arc::clone(&self.scene)
    }

    /// Camera shared with the frame loop
    pub fn camera(&self) -> Arc<Mutex<C>> {
        Arc::clone(&self.camera)
    }

    #[inline]
    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.frame_loop.is_some()
    }

    /// Load the configured source
    pub async fn load_configured(&self) -> Result<LoadOutcome, LoadError> {
        let source = self.config.source.clone();
        self.load(&source).await
    }

    /// Fetch a document and replace the scene with its surfaces.
    ///
    /// On a fetch or parse error nothing is built and the scene and camera
    /// are left as they were.
    pub async fn load(&self, source: &DocumentSource) -> Result<LoadOutcome, LoadError> {
        let document = self.loader.fetch(source).await?;

        let colors = self.config.colors.clone();
        let scene = Arc::clone(&self.scene);
        let camera = Arc::clone(&self.camera);

        let outcome = tokio::task::spawn_blocking(move || {
            let assembly = assemble(&document, &colors);
            attach_and_frame(assembly, scene.as_ref(), &mut *lock(&camera))
        })
        .await?;

        Ok(outcome)
    }

    /// Replace the scene with an already parsed document, on the calling
    /// thread.
    pub fn load_document(&self, document: &GbxmlDocument) -> LoadOutcome {
        let assembly = assemble(document, &self.config.colors);
        attach_and_frame(assembly, self.scene.as_ref(), &mut *lock(&self.camera))
    }

    /// Start the frame loop, replacing one that is already running.
    ///
    /// Each tick steps the camera controls and passes the host a [`Frame`].
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub fn start<F>(&mut self, mut render: F)
    where
        F: FnMut(&Frame<'_, C>) + Send + 'static,
    {
        let scene = Arc::clone(&self.scene);
        let camera = Arc::clone(&self.camera);
        let lights = self.lights;

        let handle = spawn_frame_loop(self.config.frame_interval, move |number| {
            let group = scene.current_group();
            let mut rig = lock(&camera);
            rig.update_controls();
            render(&Frame {
                number,
                group,
                camera: &*rig,
                lights: &lights,
            });
        });

        if let Some(previous) = self.frame_loop.replace(handle) {
            tracing::debug!("Replacing running frame loop");
            previous.cancel();
        }
        tracing::debug!(
            interval_ms = self.config.frame_interval.as_millis(),
            "Frame loop started"
        );
    }

    /// Viewport size change. A zero height is ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            tracing::debug!(width, height, "Ignoring resize to zero height");
            return;
        }

        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self.config.camera.aspect = f64::from(width) / f64::from(height);

        let mut rig = lock(&self.camera);
        rig.set_aspect(self.config.camera.aspect);
        rig.update_projection();
    }
}

impl<C: CameraRig> Viewer<C> {
    /// Stop the frame loop and release the render callback.
    /// Dropping the viewer does the same.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.frame_loop.take() {
            handle.cancel();
            tracing::debug!("Frame loop stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gbxml_lite_processing::OrbitCamera;

    fn viewer() -> Viewer<OrbitCamera> {
        Viewer::new(EngineConfig::default(), OrbitCamera::default()).unwrap()
    }

    #[tokio::test]
    async fn test_camera_gets_configured_aspect() {
        let viewer = viewer();
        let camera = viewer.camera();
        assert_eq!(lock(&camera).settings().aspect, 1280.0 / 720.0);
    }

    #[tokio::test]
    async fn test_resize_updates_aspect() {
        let mut viewer = viewer();
        viewer.resize(1000, 500);
        assert_eq!(lock(&viewer.camera()).settings().aspect, 2.0);

        viewer.resize(1000, 0);
        assert_eq!(lock(&viewer.camera()).settings().aspect, 2.0);
        assert_eq!(viewer.config().viewport_height, 500);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_scene() {
        let viewer = viewer();
        let before = viewer.scene().current_group();

        let result = viewer
            .load(&DocumentSource::Path("/nonexistent/model.xml".into()))
            .await;

        assert!(result.is_err());
        assert!(before.is_none());
        assert!(viewer.scene().current_group().is_none());
    }
}
