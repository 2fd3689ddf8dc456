// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, including loading and saving
//! gesture tuning to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use carousel_lens::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.gestures.double_tap_window_ms = Some(250);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.gestures.double_tap_window_ms, Some(250));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::ui::{DoubleTapScale, DoubleTapWindow, SnapTolerance};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "CarouselLens";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gestures: GestureConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// `[gestures]` section. Missing keys fall back to the defaults in [`defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    #[serde(default)]
    pub double_tap_window_ms: Option<u64>,
    #[serde(default)]
    pub double_tap_scale: Option<f32>,
    #[serde(default)]
    pub snap_back_tolerance: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_window_ms: Some(DEFAULT_DOUBLE_TAP_WINDOW_MS),
            double_tap_scale: Some(DEFAULT_DOUBLE_TAP_SCALE),
            snap_back_tolerance: Some(DEFAULT_SNAP_BACK_TOLERANCE),
        }
    }
}

/// `[diagnostics]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

/// Validated gesture tuning consumed by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSettings {
    pub double_tap_window: DoubleTapWindow,
    pub double_tap_scale: DoubleTapScale,
    pub snap_tolerance: SnapTolerance,
}

impl Config {
    /// Resolves the gesture section into clamped settings.
    ///
    /// A double-tap scale that would snap straight back on release falls
    /// back to the default, which always sits above the widest tolerance.
    #[must_use]
    pub fn gesture_settings(&self) -> GestureSettings {
        let gestures = &self.gestures;
        let snap_tolerance = gestures
            .snap_back_tolerance
            .map(SnapTolerance::new)
            .unwrap_or_default();

        let mut double_tap_scale = gestures
            .double_tap_scale
            .map(DoubleTapScale::new)
            .unwrap_or_default();
        if snap_tolerance.contains(double_tap_scale.scale()) {
            log::warn!(
                "double_tap_scale {:.2} is inside snap_back_tolerance {:.2}, using {:.2}",
                double_tap_scale.scale().value(),
                snap_tolerance.value(),
                DEFAULT_DOUBLE_TAP_SCALE
            );
            double_tap_scale = DoubleTapScale::default();
        }

        GestureSettings {
            double_tap_window: gestures
                .double_tap_window_ms
                .map(DoubleTapWindow::from_millis)
                .unwrap_or_default(),
            double_tap_scale,
            snap_tolerance,
        }
    }

    /// Resolves the diagnostics log capacity.
    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        self.diagnostics
            .buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    log::info!("No settings file found, using defaults");
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => {
            log::info!("Settings loaded from: {}", path.display());
            Ok(config)
        }
        Err(e) => {
            log::warn!("Invalid settings file, using defaults: {}", e);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    log::info!("Settings saved to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_gestures() {
        let config = Config {
            gestures: GestureConfig {
                double_tap_window_ms: Some(250),
                double_tap_scale: Some(3.0),
                snap_back_tolerance: Some(1.1),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(64),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_fills_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gestures]\ndouble_tap_window_ms = 400\n")
            .expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.gestures.double_tap_window_ms, Some(400));
        assert_eq!(loaded.gestures.double_tap_scale, None);
        assert_eq!(loaded.diagnostics, DiagnosticsConfig::default());

        let settings = loaded.gesture_settings();
        assert_eq!(settings.double_tap_window.millis(), 400);
        assert_eq!(settings.double_tap_scale, DoubleTapScale::default());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn gesture_settings_clamp_out_of_range_values() {
        let config = Config {
            gestures: GestureConfig {
                double_tap_window_ms: Some(5),
                double_tap_scale: Some(50.0),
                snap_back_tolerance: Some(0.2),
            },
            ..Config::default()
        };

        let settings = config.gesture_settings();
        assert_eq!(settings.double_tap_window.millis(), MIN_DOUBLE_TAP_WINDOW_MS);
        assert_abs_diff_eq!(settings.double_tap_scale.scale().value(), MAX_SCALE);
        assert_abs_diff_eq!(settings.snap_tolerance.value(), MIN_SCALE);
    }

    #[test]
    fn double_tap_scale_inside_snap_band_falls_back_to_default() {
        let config = Config {
            gestures: GestureConfig {
                double_tap_scale: Some(1.2),
                snap_back_tolerance: Some(1.5),
                ..GestureConfig::default()
            },
            ..Config::default()
        };

        let settings = config.gesture_settings();
        assert_eq!(settings.double_tap_scale, DoubleTapScale::default());
        assert!(!settings
            .snap_tolerance
            .contains(settings.double_tap_scale.scale()));
    }

    #[test]
    fn double_tap_scale_above_snap_band_is_kept() {
        let config = Config {
            gestures: GestureConfig {
                double_tap_scale: Some(1.6),
                snap_back_tolerance: Some(1.5),
                ..GestureConfig::default()
            },
            ..Config::default()
        };

        let settings = config.gesture_settings();
        assert_abs_diff_eq!(settings.double_tap_scale.scale().value(), 1.6);
    }

    #[test]
    fn default_config_resolves_to_default_settings() {
        let config = Config::default();
        assert_eq!(config.gesture_settings(), GestureSettings::default());
        assert_eq!(config.diagnostics_capacity(), BufferCapacity::default());
    }
}
