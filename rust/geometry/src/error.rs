// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during surface reconstruction.
///
/// All of them are scoped to a single surface: the caller skips that surface
/// and keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Malformed coordinate {token:?} in point {point}")]
    MalformedCoordinate { point: usize, token: String },

    #[error("Degenerate plane: {0}")]
    DegeneratePlane(String),

    #[error("Polygon loop needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    #[error("Surface has no planar geometry")]
    MissingGeometry,

    #[error("Triangulation failed: {0}")]
    Triangulation(String),
}

impl Error {
    /// Short machine-friendly kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MalformedCoordinate { .. } => "malformed_coordinate",
            Error::DegeneratePlane(_) => "degenerate_plane",
            Error::TooFewPoints(_) => "too_few_points",
            Error::MissingGeometry => "missing_geometry",
            Error::Triangulation(_) => "triangulation",
        }
    }
}
