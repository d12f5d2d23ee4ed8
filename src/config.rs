//! Configuration management for `RiskMap`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::RiskMapError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `RiskMap`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskMapConfig {
    /// Random source settings for the scorer
    #[serde(default)]
    pub scorer: ScorerConfig,
    /// Map display settings handed to the map session
    #[serde(default)]
    pub map: MapConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scorer settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Fixed seed for reproducible assessments; fresh entropy when absent
    pub seed: Option<u64>,
}

/// Map display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center_latitude")]
    pub center_latitude: f64,
    #[serde(default = "default_center_longitude")]
    pub center_longitude: f64,
    /// Initial zoom level
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Tile URL template with `{z}`, `{x}` and `{y}` placeholders
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_tile_attribution")]
    pub tile_attribution: String,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
    /// Marker icon settings
    #[serde(default)]
    pub marker: MarkerConfig,
}

/// Marker icon settings, passed explicitly to the map session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_icon_url")]
    pub icon_url: String,
    #[serde(default = "default_icon_retina_url")]
    pub icon_retina_url: String,
    #[serde(default = "default_shadow_url")]
    pub shadow_url: String,
    /// Icon size in pixels (width, height)
    #[serde(default = "default_icon_size")]
    pub icon_size: [u32; 2],
    /// Pixel offset of the icon tip from its top-left corner
    #[serde(default = "default_icon_anchor")]
    pub icon_anchor: [i32; 2],
    #[serde(default = "default_popup_anchor")]
    pub popup_anchor: [i32; 2],
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_center_latitude() -> f64 {
    20.0
}

fn default_center_longitude() -> f64 {
    0.0
}

fn default_zoom() -> u8 {
    2
}

fn default_max_zoom() -> u8 {
    19
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_tile_attribution() -> String {
    "&copy; OpenStreetMap contributors".to_string()
}

fn default_icon_url() -> String {
    "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png".to_string()
}

fn default_icon_retina_url() -> String {
    "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon-2x.png".to_string()
}

fn default_shadow_url() -> String {
    "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png".to_string()
}

fn default_icon_size() -> [u32; 2] {
    [25, 41]
}

fn default_icon_anchor() -> [i32; 2] {
    [12, 41]
}

fn default_popup_anchor() -> [i32; 2] {
    [1, -34]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_latitude: default_center_latitude(),
            center_longitude: default_center_longitude(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            tile_attribution: default_tile_attribution(),
            max_zoom: default_max_zoom(),
            marker: MarkerConfig::default(),
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            icon_url: default_icon_url(),
            icon_retina_url: default_icon_retina_url(),
            shadow_url: default_shadow_url(),
            icon_size: default_icon_size(),
            icon_anchor: default_icon_anchor(),
            popup_anchor: default_popup_anchor(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl RiskMapConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // RISKMAP_LOGGING__LEVEL=debug, RISKMAP_SCORER__SEED=7, ...
        builder = builder.add_source(
            Environment::with_prefix("RISKMAP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: RiskMapConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("riskmap").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.map.tile_url.is_empty() {
            self.map.tile_url = default_tile_url();
        }
        if self.map.max_zoom == 0 {
            self.map.max_zoom = default_max_zoom();
        }
        if self.map.marker.icon_url.is_empty() {
            self.map.marker.icon_url = default_icon_url();
        }
        if self.map.marker.icon_retina_url.is_empty() {
            self.map.marker.icon_retina_url = default_icon_retina_url();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_map()?;
        self.validate_marker()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_map(&self) -> Result<()> {
        let map = &self.map;

        if map.max_zoom > 22 {
            return Err(RiskMapError::config("Tile max zoom cannot exceed 22").into());
        }

        if map.zoom > map.max_zoom {
            return Err(RiskMapError::config(format!(
                "Initial zoom {} exceeds tile max zoom {}",
                map.zoom, map.max_zoom
            ))
            .into());
        }

        if !(-90.0..=90.0).contains(&map.center_latitude)
            || !(-180.0..=180.0).contains(&map.center_longitude)
        {
            return Err(RiskMapError::config(format!(
                "Map center ({}, {}) is not on the globe",
                map.center_latitude, map.center_longitude
            ))
            .into());
        }

        if !map.tile_url.starts_with("http://") && !map.tile_url.starts_with("https://") {
            return Err(
                RiskMapError::config("Tile URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        for placeholder in ["{z}", "{x}", "{y}"] {
            if !map.tile_url.contains(placeholder) {
                return Err(RiskMapError::config(format!(
                    "Tile URL is missing the {placeholder} placeholder"
                ))
                .into());
            }
        }

        Ok(())
    }

    fn validate_marker(&self) -> Result<()> {
        let marker = &self.map.marker;

        if marker.icon_size.contains(&0) {
            return Err(RiskMapError::config("Marker icon size must be non-zero").into());
        }

        if marker.icon_size.iter().any(|&side| side > 256) {
            return Err(RiskMapError::config("Marker icon cannot exceed 256 pixels").into());
        }

        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(RiskMapError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(RiskMapError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RiskMapConfig::default();
        assert_eq!(config.map.zoom, 2);
        assert_eq!(config.map.max_zoom, 19);
        assert_eq!(config.map.marker.icon_size, [25, 41]);
        assert_eq!(config.logging.level, "info");
        assert!(config.scorer.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = RiskMapConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_zoom() {
        let mut config = RiskMapConfig::default();
        config.map.zoom = 20;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("exceeds tile max zoom"));
    }

    #[test]
    fn test_config_validation_tile_placeholders() {
        let mut config = RiskMapConfig::default();
        config.map.tile_url = "https://tiles.example.com/{z}/{x}.png".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("{y}"));
    }

    #[test]
    fn test_config_validation_icon_size() {
        let mut config = RiskMapConfig::default();
        config.map.marker.icon_size = [0, 41];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_center() {
        let mut config = RiskMapConfig::default();
        config.map.center_latitude = 95.0;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("not on the globe"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_strings() {
        let mut config = RiskMapConfig::default();
        config.logging.level = String::new();
        config.map.tile_url = String::new();
        config.apply_defaults();
        assert_eq!(config.logging.level, "info");
        assert!(config.map.tile_url.contains("{z}"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("riskmap-test-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[scorer]\nseed = 42\n\n[map]\nzoom = 5\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = RiskMapConfig::load_from_path(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.scorer.seed, Some(42));
        assert_eq!(config.map.zoom, 5);
        assert_eq!(config.map.max_zoom, 19);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = RiskMapConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("riskmap"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
