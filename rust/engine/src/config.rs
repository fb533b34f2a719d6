// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Engine configuration loaded from environment variables.

use crate::error::ConfigError;
use crate::loader::DocumentSource;
use crate::logging::LogFormat;
use gbxml_lite_processing::{CameraSettings, ColorTable};
use std::str::FromStr;
use std::time::Duration;

/// Document loaded when nothing else is configured
pub const DEFAULT_SOURCE: &str = "assets/OfficeBuilding.xml";

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Where the gbXML document comes from (`GBXML_SOURCE`).
    pub source: DocumentSource,
    /// Surface colors (`GBXML_COLOR_TABLE`, a JSON file; built-in table otherwise).
    pub colors: ColorTable,
    /// Delay between rendered frames (`FRAME_INTERVAL_MS`).
    pub frame_interval: Duration,
    /// Perspective camera parameters (`CAMERA_FOV_DEG`, `CAMERA_NEAR`, `CAMERA_FAR`).
    pub camera: CameraSettings,
    /// Initial viewport size in pixels (`VIEWPORT_WIDTH`, `VIEWPORT_HEIGHT`).
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Document fetch timeout (`REQUEST_TIMEOUT_SECS`).
    pub request_timeout: Duration,
    /// Log output format (`LOG_FORMAT`, `pretty` or `json`).
    pub log_format: LogFormat,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Unparseable numbers fall back to their defaults. A color table that
    /// cannot be read or parsed is an error, as is a camera that could not
    /// build a projection.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CameraSettings::default();

        let viewport_width = positive(&lookup, "VIEWPORT_WIDTH", 1280u32)?;
        let viewport_height = positive(&lookup, "VIEWPORT_HEIGHT", 720u32)?;

        let fov_degrees = parsed(&lookup, "CAMERA_FOV_DEG", defaults.fov_degrees);
        if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
            return Err(ConfigError::InvalidFov(fov_degrees));
        }
        let near = positive(&lookup, "CAMERA_NEAR", defaults.near)?;
        let far = positive(&lookup, "CAMERA_FAR", defaults.far)?;
        if near >= far {
            return Err(ConfigError::InvalidClipRange { near, far });
        }

        let colors = match lookup("GBXML_COLOR_TABLE").filter(|p| !p.trim().is_empty()) {
            Some(path) => ColorTable::from_path(&path)
                .map_err(|source| ConfigError::ColorTable { path, source })?,
            None => ColorTable::default(),
        };

        Ok(Self {
            source: DocumentSource::parse(
                &lookup("GBXML_SOURCE").unwrap_or_else(|| DEFAULT_SOURCE.into()),
            ),
            colors,
            frame_interval: Duration::from_millis(positive(&lookup, "FRAME_INTERVAL_MS", 16u64)?),
            camera: CameraSettings {
                fov_degrees,
                aspect: f64::from(viewport_width) / f64::from(viewport_height),
                near,
                far,
                up: defaults.up,
            },
            viewport_width,
            viewport_height,
            request_timeout: Duration::from_secs(parsed(&lookup, "REQUEST_TIMEOUT_SECS", 30)),
            log_format: parsed(&lookup, "LOG_FORMAT", LogFormat::Pretty),
        })
    }
}

impl Default for EngineConfig {
    /// Built-in defaults, ignoring the environment
    fn default() -> Self {
        Self {
            source: DocumentSource::parse(DEFAULT_SOURCE),
            colors: ColorTable::default(),
            frame_interval: Duration::from_millis(16),
            camera: CameraSettings {
                aspect: 1280.0 / 720.0,
                ..CameraSettings::default()
            },
            viewport_width: 1280,
            viewport_height: 720,
            request_timeout: Duration::from_secs(30),
            log_format: LogFormat::Pretty,
        }
    }
}

fn parsed<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(name)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn positive<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + Default + ToString,
{
    let value = parsed(lookup, name, default);
    if value > T::default() {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive {
            name,
            value: value.to_string(),
        })
    }
}
