// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[lens]` - Scale, rotation, size and tint of the magnifier lens
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_MAGNIFIER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_magnifier::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load_with_override(None);
//!
//! // Modify a setting
//! config.lens.scale = Some(0.5);
//!
//! // Save the modified configuration
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::lens::{LensParams, LensScale, LensTint, RotationFraction, SizeDelta};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Magnifier lens settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LensConfig {
    /// Scale slider value; the lens magnifies by `1 + scale`.
    #[serde(default = "default_scale", skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,

    /// Rotation as a fraction of a full turn.
    #[serde(default = "default_rotation", skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,

    /// Added to the 150px base diameter.
    #[serde(default = "default_size", skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,

    /// Glyph color as `#RRGGBB` or `#RRGGBBAA`.
    #[serde(default = "default_tint", skip_serializing_if = "Option::is_none")]
    pub tint: Option<String>,

    /// Rotate the magnified image with the glass, not only the glyph.
    #[serde(
        default = "default_rotate_content",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotate_content: Option<bool>,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            rotation: default_rotation(),
            size: default_size(),
            tint: default_tint(),
            rotate_content: default_rotate_content(),
        }
    }
}

impl LensConfig {
    /// Builds clamped lens parameters. An unparsable tint falls back to the default.
    #[must_use]
    pub fn to_params(&self) -> LensParams {
        let tint = match self.tint.as_deref().map(LensTint::from_hex) {
            Some(Ok(tint)) => tint,
            Some(Err(err)) => {
                tracing::warn!("{err}, using default tint");
                LensTint::default()
            }
            None => LensTint::default(),
        };

        LensParams {
            scale: LensScale::new(self.scale.unwrap_or(DEFAULT_LENS_SCALE)),
            rotation: RotationFraction::new(self.rotation.unwrap_or(DEFAULT_LENS_ROTATION)),
            size: SizeDelta::new(self.size.unwrap_or(DEFAULT_LENS_SIZE)),
            tint,
            rotate_content: self.rotate_content.unwrap_or(DEFAULT_ROTATE_CONTENT),
        }
    }

    /// Stores the current slider values.
    pub fn apply_params(&mut self, params: &LensParams) {
        self.scale = Some(params.scale.value());
        self.rotation = Some(params.rotation.value());
        self.size = Some(params.size.value());
        self.tint = Some(params.tint.to_hex());
        self.rotate_content = Some(params.rotate_content);
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Magnifier lens settings.
    #[serde(default)]
    pub lens: LensConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_scale() -> Option<f32> {
    Some(DEFAULT_LENS_SCALE)
}

fn default_rotation() -> Option<f32> {
    Some(DEFAULT_LENS_ROTATION)
}

fn default_size() -> Option<f32> {
    Some(DEFAULT_LENS_SIZE)
}

fn default_tint() -> Option<String> {
    Some(DEFAULT_LENS_TINT.to_string())
}

fn default_rotate_content() -> Option<bool> {
    Some(DEFAULT_ROTATE_CONTENT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration, from `base_dir` when given.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "failed to load config: {err}");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration, to `base_dir` when given.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            lens: LensConfig {
                scale: Some(0.4),
                rotation: Some(0.25),
                size: Some(60.0),
                tint: Some("#ff000080".to_string()),
                rotate_content: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_invalid_toml_returns_default_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[lens\nscale = ")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_returns_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_keys_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[lens]\nscale = 0.75\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("partial config should load");

        assert_eq!(loaded.lens.scale, Some(0.75));
        assert_eq!(loaded.lens.size, Some(DEFAULT_LENS_SIZE));
        assert_eq!(loaded.lens.tint.as_deref(), Some(DEFAULT_LENS_TINT));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write toml");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_clamped_into_params() {
        let lens = LensConfig {
            scale: Some(4.0),
            rotation: Some(-1.0),
            size: Some(1_000.0),
            tint: Some("not a color".to_string()),
            rotate_content: None,
        };

        let params = lens.to_params();

        assert!((params.scale.value() - 1.0).abs() < f32::EPSILON);
        assert!(params.rotation.value().abs() < f32::EPSILON);
        assert!((params.size.value() - 100.0).abs() < f32::EPSILON);
        assert_eq!(params.tint, LensTint::default());
        assert!(params.rotate_content);
    }

    #[test]
    fn apply_params_stores_slider_values() {
        let params = LensParams {
            scale: LensScale::new(0.3),
            rotation: RotationFraction::new(0.6),
            size: SizeDelta::new(-10.0),
            tint: LensTint::rgb(1, 2, 3),
            rotate_content: false,
        };
        let mut lens = LensConfig::default();

        lens.apply_params(&params);

        assert_eq!(lens.to_params(), params);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.lens.size = Some(42.0);

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert!(config.general.language.is_none());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.lens.to_params(), LensParams::default());
    }
}
