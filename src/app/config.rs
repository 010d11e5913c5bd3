//! Configuration Management

use crate::intent::IntentOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default binding options used by replay
    pub engine: IntentOptions,
    /// Replay output settings
    pub replay: ReplayConfig,
}

/// Replay output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Emit the replay report as JSON instead of a text summary
    pub json_output: bool,
    /// Directory traces are listed from (defaults to the standard trace dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traces_dir: Option<PathBuf>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            json_output: false,
            traces_dir: None,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first
    /// invalid field. File-level config is validated hard; only the
    /// in-process binding record absorbs bad values silently.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.engine.poll_interval_ms == 0 || self.engine.poll_interval_ms > 60_000 {
            return Err(crate::Error::Config(format!(
                "engine.poll_interval_ms must be in (0, 60000], got {}",
                self.engine.poll_interval_ms
            )));
        }
        if !self.engine.sensitivity_px.is_finite()
            || self.engine.sensitivity_px <= 0.0
            || self.engine.sensitivity_px > 10_000.0
        {
            return Err(crate::Error::Config(format!(
                "engine.sensitivity_px must be in (0, 10000], got {}",
                self.engine.sensitivity_px
            )));
        }
        if self.engine.exit_delay_ms > 600_000 {
            return Err(crate::Error::Config(format!(
                "engine.exit_delay_ms must be at most 600000, got {}",
                self.engine.exit_delay_ms
            )));
        }
        if let Some(selector) = &self.engine.target_selector {
            if selector.trim().is_empty() {
                return Err(crate::Error::Config(
                    "engine.target_selector must not be blank".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".hoverintent").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
