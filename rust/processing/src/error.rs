// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for scene processing.

use thiserror::Error;

/// Result type for processing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors raised while loading processing inputs
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid color table: {0}")]
    ColorTable(#[from] serde_json::Error),

    #[error("Failed to read color table: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a scene group could not be used to frame the camera.
/// The camera keeps its previous parameters in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FramingError {
    #[error("Scene group contains no meshes")]
    EmptyScene,

    #[error("Scene bounds are degenerate (radius {radius})")]
    DegenerateBounds { radius: f64 },
}
