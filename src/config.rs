//! Generation request configuration.
//!
//! A [`GenerationConfig`] is the one inbound message the pipeline consumes.
//! It can be loaded from a YAML or JSON file; every field has a default so
//! partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BlotError, Result};
use crate::synth::ColourMode;

/// Configuration for one composition request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of blob shapes to generate.
    pub count: u32,

    /// Multiplier applied to `count`.
    pub density: f32,

    /// Preset name used in preset mode.
    pub preset: String,

    /// Manual hex colour list used in manual mode.
    pub colours: Vec<String>,

    /// Colour sourcing mode.
    pub mode: ColourMode,

    /// Base blur radius; each shape jitters around it.
    pub blur: f32,

    /// Side length of the square canvas frame.
    pub canvas: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: 12,
            density: 1.0,
            preset: "aurora".to_string(),
            colours: vec![],
            mode: ColourMode::Preset,
            blur: 60.0,
            canvas: 1200.0,
        }
    }
}

impl GenerationConfig {
    /// Load a config from a YAML (`.yml`/`.yaml`) or JSON (`.json`) file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BlotError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "json" => Self::parse_json(&content),
            _ => Self::parse_yaml(&content),
        }
    }

    /// Parse a config from a YAML string.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| BlotError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check the config file syntax".to_string()),
        })
    }

    /// Parse a config from a JSON string.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| BlotError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check the config file syntax".to_string()),
        })
    }

    /// Number of shapes one request produces: `count * density`, rounded
    /// up so fractional densities still fill the palette.
    pub fn shape_total(&self) -> usize {
        (self.count as f32 * self.density).ceil().max(0.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();

        assert_eq!(config.count, 12);
        assert_eq!(config.density, 1.0);
        assert_eq!(config.preset, "aurora");
        assert!(config.colours.is_empty());
        assert_eq!(config.mode, ColourMode::Preset);
        assert_eq!(config.shape_total(), 12);
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let config = GenerationConfig::parse_yaml("count: 5").unwrap();

        assert_eq!(config.count, 5);
        assert_eq!(config.preset, "aurora");
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
count: 8
density: 1.5
preset: neon
mode: preset
blur: 40
canvas: 800
"#;
        let config = GenerationConfig::parse_yaml(yaml).unwrap();

        assert_eq!(config.count, 8);
        assert_eq!(config.density, 1.5);
        assert_eq!(config.preset, "neon");
        assert_eq!(config.blur, 40.0);
        assert_eq!(config.canvas, 800.0);
    }

    #[test]
    fn test_parse_manual_yaml() {
        let yaml = r#"
mode: manual
colours:
  - "#FF0000"
  - "#00FF00"
"#;
        let config = GenerationConfig::parse_yaml(yaml).unwrap();

        assert_eq!(config.mode, ColourMode::Manual);
        assert_eq!(config.colours, vec!["#FF0000", "#00FF00"]);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{ "count": 3, "preset": "dark", "blur": 25.5 }"#;
        let config = GenerationConfig::parse_json(json).unwrap();

        assert_eq!(config.count, 3);
        assert_eq!(config.preset, "dark");
        assert_eq!(config.blur, 25.5);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = GenerationConfig::parse_yaml("count: [not a number");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_empty_yaml_uses_defaults() {
        let config = GenerationConfig::parse_yaml("").unwrap();
        assert_eq!(config.count, 12);
        assert_eq!(config.preset, "aurora");
    }

    #[test]
    fn test_shape_total_rounds_up() {
        let config = GenerationConfig {
            count: 5,
            density: 1.5,
            ..Default::default()
        };
        assert_eq!(config.shape_total(), 8);
    }

    #[test]
    fn test_shape_total_zero_count() {
        let config = GenerationConfig {
            count: 0,
            ..Default::default()
        };
        assert_eq!(config.shape_total(), 0);
    }

    #[test]
    fn test_shape_total_fractional_density() {
        let config = GenerationConfig {
            count: 10,
            density: 0.25,
            ..Default::default()
        };
        assert_eq!(config.shape_total(), 3);
    }
}
