//! Playground configuration, read from `playground.json` in the config
//! directory. Every field is optional.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use dse::{SelectConfig, SelectOption};
use dse_foundation::Spacing;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Trigger text before anything is picked.
    pub label: String,
    pub options: Vec<SelectOption>,
    pub select: SelectConfig,
    pub swatch: SwatchConfig,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            label: "Please select an option...".to_string(),
            options: ["A", "B", "C", "D"]
                .into_iter()
                .map(|value| SelectOption::new(format!("Option{value}"), value))
                .collect(),
            select: SelectConfig::default(),
            swatch: SwatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchConfig {
    pub hex_code: String,
    pub width: Spacing,
    pub height: Spacing,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            hex_code: "#000".to_string(),
            width: Spacing::Lg,
            height: Spacing::Lg,
        }
    }
}

impl PlaygroundConfig {
    pub fn from_json(json: &str, path: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Json {
            path: path.to_string(),
            source,
        })
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        match fs::read_to_string(path) {
            Ok(json) => {
                log::info!("[config] loaded {display}");
                Self::from_json(&json, &display)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("[config] {display} not found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: display,
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlaygroundConfig::default();
        let labels: Vec<&str> = config.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["OptionA", "OptionB", "OptionC", "OptionD"]);
        assert_eq!(config.options[2].value, "C");
        assert_eq!(config.swatch.hex_code, "#000");
        assert_eq!(config.select.overlay_gap, 10);
    }

    #[test]
    fn test_partial_file() {
        let json = r##"{
            "options": [{ "label": "Tea", "value": "tea" }],
            "select": { "overlay_gap": 2 },
            "swatch": { "width": "sm" }
        }"##;
        let config = PlaygroundConfig::from_json(json, "test.json").unwrap();

        assert_eq!(config.label, "Please select an option...");
        assert_eq!(config.options, vec![SelectOption::new("Tea", "tea")]);
        assert_eq!(config.select.overlay_gap, 2);
        assert_eq!(config.select.fallback_label, "Select option");
        assert_eq!(config.swatch.width, Spacing::Sm);
        assert_eq!(config.swatch.height, Spacing::Lg);
    }

    #[test]
    fn test_bad_json_names_the_file() {
        let err = PlaygroundConfig::from_json("{ nope", "broken.json").unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("dse-playground-does-not-exist.json");
        let config = PlaygroundConfig::load(&path).unwrap();
        assert_eq!(config, PlaygroundConfig::default());
    }
}
