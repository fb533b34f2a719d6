// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the viewer facade.

use thiserror::Error;

/// Failure to get a document into the scene.
///
/// Returned before any geometry is built; the attached scene group and the
/// camera are unchanged.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid gbXML document: {0}")]
    Document(#[from] gbxml_lite_core::Error),

    #[error("Assembly task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl LoadError {
    /// True for HTTP 4xx responses (missing or forbidden documents)
    pub fn is_client_error(&self) -> bool {
        matches!(self, LoadError::Status { status, .. } if status.is_client_error())
    }
}

/// Invalid engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Color table {path}: {source}")]
    ColorTable {
        path: String,
        #[source]
        source: gbxml_lite_processing::Error,
    },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: String },

    #[error("CAMERA_NEAR ({near}) must be below CAMERA_FAR ({far})")]
    InvalidClipRange { near: f64, far: f64 },

    #[error("CAMERA_FOV_DEG must be in (0, 180), got {0}")]
    InvalidFov(f64),
}
