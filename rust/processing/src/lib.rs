// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # gbXML-Lite Processing
//!
//! Turns a parsed gbXML document into a scene group and frames a camera on
//! it.
//!
//! ```rust,ignore
//! use gbxml_lite_processing::{load_document, ColorTable, OrbitCamera, SceneSlot};
//!
//! let slot = SceneSlot::new();
//! let mut camera = OrbitCamera::default();
//! let outcome = load_document(&document, &ColorTable::default(), &slot, &mut camera);
//! println!("{} meshes, {} skipped", outcome.report.meshes, outcome.report.skipped());
//! ```

pub mod assembler;
pub mod camera;
pub mod colors;
pub mod error;
pub mod framing;
pub mod lights;
pub mod scene;

pub use assembler::{
    assemble, assemble_surface, attach_and_frame, load_document, Assembly, AssemblyReport,
    LoadOutcome, SurfaceFailure,
};
pub use camera::{CameraRig, CameraSettings, OrbitCamera};
pub use colors::ColorTable;
pub use error::{Error, FramingError, Result};
pub use framing::{frame_group, Framing};
pub use lights::{AmbientLight, CameraLight, DirectionalLight, LightRig};
pub use scene::{RenderTarget, SceneGroup, SceneSlot};
