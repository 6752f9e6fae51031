//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Get the default config file path
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ranger")
        .join("config.toml")
}

/// Configuration for the CLI
///
/// Command line flags take precedence over every value here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format used when --format is not given
    pub format: String,
    /// Scenario used when --scenario is not given
    pub scenario: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: "table".to_string(),
            scenario: None,
        }
    }
}

impl Config {
    /// Load config from `path`, or from the default location
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// file that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = config_file_path();
                if !default.exists() {
                    tracing::debug!("No config at {:?}, using defaults", default);
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format, "table");
        assert!(config.scenario.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(r#"scenario = "parks.toml""#).unwrap();
        assert_eq!(config.format, "table");
        assert_eq!(config.scenario, Some(PathBuf::from("parks.toml")));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/ranger.toml"))).is_err());
    }
}
