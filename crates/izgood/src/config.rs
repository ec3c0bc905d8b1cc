// File: src/config.rs
// Purpose: Validation configuration parsing from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Message used when a failing check gives no reason and the rule sets none
pub const DEFAULT_MESSAGE: &str = "Invalid input";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Fallback message for failing rules (default: "Invalid input")
    #[serde(default = "default_message")]
    pub default_message: String,

    /// Trim string values when decoding form submissions
    #[serde(default)]
    pub trim_form_values: bool,
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            default_message: default_message(),
            trim_form_values: false,
        }
    }
}

impl ValidationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert_eq!(config.default_message, "Invalid input");
        assert!(!config.trim_form_values);
    }

    #[test]
    fn test_empty_config() {
        let config = ValidationConfig::from_toml_str("").unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_custom_values() {
        let toml = r#"
            default_message = "Please check this field"
            trim_form_values = true
        "#;
        let config = ValidationConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.default_message, "Please check this field");
        assert!(config.trim_form_values);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ValidationConfig::load("does/not/exist/izgood.toml").unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("izgood-config-{}.toml", std::process::id()));
        fs::write(&path, "default_message = \"Nope\"\n").unwrap();

        let config = ValidationConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.default_message, "Nope");
        assert!(!config.trim_form_values);
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let path = std::env::temp_dir().join(format!("izgood-bad-{}.toml", std::process::id()));
        fs::write(&path, "default_message = [").unwrap();

        let err = ValidationConfig::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
