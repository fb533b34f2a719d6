// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Headless load of the configured gbXML source.
//!
//! Rebuilds the scene once and logs what was built, what was skipped and
//! where the camera ended up. Exits non-zero when the document could not be
//! loaded.

use gbxml_lite_engine::processing::OrbitCamera;
use gbxml_lite_engine::{init_logging, EngineConfig, Viewer};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            init_logging(Default::default());
            tracing::error!(error = %error, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    init_logging(config.log_format);

    tracing::info!(
        source = %config.source,
        frame_interval_ms = config.frame_interval.as_millis(),
        viewport_width = config.viewport_width,
        viewport_height = config.viewport_height,
        "Starting gbXML inspection"
    );

    let camera = OrbitCamera::new(config.camera);
    let viewer = match Viewer::new(config, camera) {
        Ok(viewer) => viewer,
        Err(error) => {
            tracing::error!(error = %error, "Failed to create viewer");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match viewer.load_configured().await {
        Ok(outcome) => outcome,
        Err(_) => return ExitCode::FAILURE,
    };

    for failure in &outcome.report.failures {
        tracing::info!(
            surface = %failure.label,
            kind = failure.error.kind(),
            "Skipped surface"
        );
    }

    let camera = viewer.camera();
    let camera = camera.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    tracing::info!(
        meshes = outcome.report.meshes,
        skipped = outcome.report.skipped(),
        triangles = outcome
            .group
            .meshes()
            .iter()
            .map(|m| m.mesh.triangle_count())
            .sum::<usize>(),
        camera_x = camera.position().x,
        camera_y = camera.position().y,
        camera_z = camera.position().z,
        far = camera.far(),
        "Scene ready"
    );

    ExitCode::SUCCESS
}
