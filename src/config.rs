//! Startup configuration.
//!
//! Read once at launch from `viewer_config.ron` in the working directory. When that
//! file is missing or unreadable the embedded `default_viewer_config.ron` is used,
//! and if even that fails to parse, the hard-coded [`Default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "viewer_config.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Mode shown at startup; clamped into `0..16`.
    pub initial_mode: usize,
    /// Quality level `0..=3`; anything else means High.
    pub quality_level: i64,
    /// One of 30, 60, 120, 144.
    pub target_fps: u32,
    pub vsync: bool,
    pub mouse_sensitivity: f32,
    pub camera_speed: f32,
    pub background_index: usize,
    pub capture_cursor: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: 1200,
            window_height: 900,
            initial_mode: 0,
            quality_level: 2,
            target_fps: 60,
            vsync: true,
            mouse_sensitivity: 0.1,
            camera_speed: 2.5,
            background_index: 0,
            capture_cursor: true,
        }
    }
}

impl ViewerConfig {
    /// Load from the working directory, falling back to the embedded default.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);

        if path.exists() {
            match Self::load_from_file(path) {
                Ok(config) => {
                    log::info!("Loaded viewer config from {:?}", path);
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to load viewer config: {}. Using embedded default.", e);
                }
            }
        } else {
            log::info!("No {} found, using embedded default", CONFIG_FILE);
        }

        Self::load_embedded_default()
    }

    fn load_embedded_default() -> Self {
        let embedded_content = include_str!("../default_viewer_config.ron");

        match Self::from_ron_str(embedded_content) {
            Ok(config) => config,
            Err(e) => {
                log::error!(
                    "Failed to parse embedded default viewer config: {}. Using hardcoded default.",
                    e
                );
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = ron::from_str(contents)?;
        Ok(config.sanitized())
    }

    /// Replace values the viewer cannot use with defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.window_width == 0 || self.window_height == 0 {
            self.window_width = defaults.window_width;
            self.window_height = defaults.window_height;
        }
        if !(self.mouse_sensitivity.is_finite() && self.mouse_sensitivity > 0.0) {
            self.mouse_sensitivity = defaults.mouse_sensitivity;
        }
        if !self.camera_speed.is_finite() {
            self.camera_speed = defaults.camera_speed;
        }
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let embedded = include_str!("../default_viewer_config.ron");
        let config = ViewerConfig::from_ron_str(embedded).expect("embedded config must parse");
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = ViewerConfig::from_ron_str("(initial_mode: 7, vsync: false)").unwrap();
        assert_eq!(config.initial_mode, 7);
        assert!(!config.vsync);
        assert_eq!(config.window_width, 1200);
        assert_eq!(config.camera_speed, 2.5);
    }

    #[test]
    fn test_unusable_values_are_replaced() {
        let config =
            ViewerConfig::from_ron_str("(window_width: 0, mouse_sensitivity: -1.0)").unwrap();
        assert_eq!(config.window_width, 1200);
        assert_eq!(config.window_height, 900);
        assert_eq!(config.mouse_sensitivity, 0.1);
    }

    #[test]
    fn test_out_of_range_quality_level_loads_as_high() {
        use crate::generators::QualityLevel;
        use crate::scene::ViewerState;

        for level in [-1, 4, 9] {
            let text = format!("(quality_level: {})", level);
            let config = ViewerConfig::from_ron_str(&text).unwrap();
            assert_eq!(config.quality_level, level);
            assert_eq!(ViewerState::from_config(&config).quality, QualityLevel::High);
        }
    }

    #[test]
    fn test_malformed_ron_is_an_error() {
        let err = ViewerConfig::from_ron_str("(initial_mode: \"seven\")").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Ron(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ViewerConfig::load_from_file(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io(_)));
    }
}
