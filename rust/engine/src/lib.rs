// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # gbXML-Lite Engine
//!
//! Viewer facade over the gbXML reconstruction pipeline: configuration from
//! the environment, document fetching, scene replacement with camera
//! framing, and a cancellable frame loop that feeds a host renderer.
//!
//! ```rust,ignore
//! use gbxml_lite_engine::{init_logging, EngineConfig, Viewer};
//! use gbxml_lite_processing::OrbitCamera;
//!
//! let config = EngineConfig::from_env()?;
//! init_logging(config.log_format);
//!
//! let mut viewer = Viewer::new(config.clone(), OrbitCamera::new(config.camera))?;
//! viewer.load_configured().await?;
//! viewer.start(|frame| renderer.draw(frame));
//! ```

pub mod config;
pub mod error;
pub mod frame_loop;
pub mod loader;
pub mod logging;
pub mod viewer;

pub use config::EngineConfig;
pub use error::{ConfigError, LoadError};
pub use frame_loop::{spawn_frame_loop, FrameHandle};
pub use loader::{DocumentLoader, DocumentSource};
pub use logging::{init_logging, LogFormat};
pub use viewer::{Frame, Viewer};

// Re-export the pipeline crates so hosts depend on the engine only
pub use gbxml_lite_core as core;
pub use gbxml_lite_geometry as geometry;
pub use gbxml_lite_processing as processing;
