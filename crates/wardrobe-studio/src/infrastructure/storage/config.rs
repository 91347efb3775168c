//! TOML-based configuration for the studio.
//!
//! Reads and writes [`StudioConfig`] to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\WardrobeStudio\config.toml`
//! - Linux:    `~/.config/wardrobe-studio/config.toml`
//! - macOS:    `~/Library/Application Support/WardrobeStudio/config.toml`
//!
//! A different file can be given with `--config` on the command line.
//!
//! # Example
//!
//! ```toml
//! [studio]
//! log_level = "debug"
//!
//! [connectivity]
//! tolerance = 12.5
//! debounce_ms = 80
//!
//! [indicator]
//! alive_variations = 3
//!
//! [[layers]]
//! category = "jacket"
//! display_name = "Outerwear"
//! z_index = 3
//! ```
//!
//! # Serde default values
//!
//! Every field has a `#[serde(default = "...")]` helper and every section is
//! optional, so an empty file, a missing file and an older file all load.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wardrobe_core::{LayerStyle, DEFAULT_TOLERANCE, DEFAULT_VARIATIONS};

use crate::application::compose_outfit::SessionSettings;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level studio configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudioConfig {
    #[serde(default)]
    pub studio: StudioSection,
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
    #[serde(default)]
    pub indicator: IndicatorConfig,
    /// Per-layer display overrides.  Layers not listed keep their defaults.
    #[serde(default)]
    pub layers: Vec<LayerStyle>,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudioSection {
    /// Schema version string, bumped on breaking changes.
    #[serde(default = "default_version")]
    pub version: String,
    /// `tracing` level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Connectivity check settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectivityConfig {
    /// Margin in layout units within which two items touch.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Quiet period before a layout snapshot is evaluated.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Liveliness indicator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndicatorConfig {
    #[serde(default = "default_variations")]
    pub alive_variations: usize,
    #[serde(default = "default_variations")]
    pub dead_variations: usize,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_version() -> String {
    "1.0".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}
fn default_debounce_ms() -> u64 {
    50
}
fn default_variations() -> usize {
    DEFAULT_VARIATIONS
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            studio: StudioSection::default(),
            connectivity: ConnectivityConfig::default(),
            indicator: IndicatorConfig::default(),
            layers: Vec::new(),
        }
    }
}

impl Default for StudioSection {
    fn default() -> Self {
        Self {
            version: default_version(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            alive_variations: default_variations(),
            dead_variations: default_variations(),
        }
    }
}

impl StudioConfig {
    /// Settings for a new [`OutfitSession`](crate::application::compose_outfit::OutfitSession).
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            layer_styles: self.layers.clone(),
            tolerance: self.connectivity.tolerance,
            alive_variations: self.indicator.alive_variations,
            dead_variations: self.indicator.dead_variations,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.connectivity.debounce_ms)
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the default config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads the config from the default location.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<StudioConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads `StudioConfig` from `path`, returning `StudioConfig::default()` if
/// the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<StudioConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: StudioConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StudioConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(config: &StudioConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("WardrobeStudio"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("wardrobe-studio"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("WardrobeStudio")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use wardrobe_core::ClothingCategory;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("wardrobe_test_{}", Uuid::new_v4()))
    }

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_default_config_matches_detector_defaults() {
        let cfg = StudioConfig::default();
        assert_eq!(cfg.connectivity.tolerance, 10.0);
        assert_eq!(cfg.connectivity.debounce_ms, 50);
        assert_eq!(cfg.debounce(), Duration::from_millis(50));
    }

    #[test]
    fn test_default_log_level_is_info() {
        assert_eq!(StudioSection::default().log_level, "info");
    }

    #[test]
    fn test_default_indicator_has_two_variations_per_mood() {
        let cfg = IndicatorConfig::default();
        assert_eq!(cfg.alive_variations, 2);
        assert_eq!(cfg.dead_variations, DEFAULT_VARIATIONS);
    }

    // ── TOML parsing ──────────────────────────────────────────────────────────

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: StudioConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, StudioConfig::default());
    }

    #[test]
    fn test_partial_section_overrides_only_given_fields() {
        let toml_str = r#"
[connectivity]
tolerance = 25.0
"#;
        let cfg: StudioConfig = toml::from_str(toml_str).expect("deserialize partial");
        assert_eq!(cfg.connectivity.tolerance, 25.0);
        assert_eq!(cfg.connectivity.debounce_ms, 50);
        assert_eq!(cfg.studio.log_level, "info");
    }

    #[test]
    fn test_layer_overrides_are_parsed() {
        let toml_str = r#"
[[layers]]
category = "jacket"
display_name = "Outerwear"
z_index = 7
"#;
        let cfg: StudioConfig = toml::from_str(toml_str).expect("deserialize layers");
        assert_eq!(cfg.layers.len(), 1);
        assert_eq!(cfg.layers[0].category, ClothingCategory::Jacket);
        assert_eq!(cfg.layers[0].display_name, "Outerwear");
        assert_eq!(cfg.layers[0].z_index, 7);
    }

    #[test]
    fn test_invalid_toml_returns_parse_error() {
        let result: Result<StudioConfig, toml::de::Error> = toml::from_str("[[[ not valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_session_settings_carry_config_values() {
        let mut cfg = StudioConfig::default();
        cfg.connectivity.tolerance = 3.5;
        cfg.indicator.dead_variations = 4;
        cfg.layers.push(LayerStyle::default_for(ClothingCategory::Hat));

        let settings = cfg.session_settings();

        assert_eq!(settings.tolerance, 3.5);
        assert_eq!(settings.dead_variations, 4);
        assert_eq!(settings.alive_variations, 2);
        assert_eq!(settings.layer_styles.len(), 1);
    }

    // ── load / save ───────────────────────────────────────────────────────────

    #[test]
    fn test_load_config_from_missing_file_returns_default() {
        let path = temp_dir().join("config.toml");
        let cfg = load_config_from(&path).expect("missing file is not an error");
        assert_eq!(cfg, StudioConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip_via_temp_dir() {
        // Arrange
        let dir = temp_dir();
        let path = dir.join("nested").join("config.toml");
        let mut cfg = StudioConfig::default();
        cfg.studio.log_level = "debug".to_string();
        cfg.connectivity.debounce_ms = 120;
        cfg.layers.push(LayerStyle {
            category: ClothingCategory::Shoes,
            display_name: "Footwear".to_string(),
            z_index: 0,
        });

        // Act
        save_config_to(&cfg, &path).expect("save");
        let loaded = load_config_from(&path).expect("load");

        // Assert
        assert_eq!(loaded, cfg);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_config_from_malformed_file_is_parse_error() {
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[connectivity]\ntolerance = \"wide\"\n").unwrap();

        let result = load_config_from(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
        std::fs::remove_dir_all(&dir).ok();
    }

    // ── config_dir path formation ─────────────────────────────────────────────

    #[test]
    fn test_config_file_path_ends_with_app_dir_and_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(path.ends_with("config.toml"), "got {path:?}");
        }
        // NoPlatformConfigDir in a stripped environment is also acceptable.
    }
}
