//! Presentation tuning loaded from JSON.
//!
//! The guessing range is fixed and deliberately absent here.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::celebration::CelebrationConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How long the "evaluating" spinner runs before a guess is submitted.
    pub evaluate_delay_ms: u32,
    /// Preference store key for the theme flag.
    pub theme_key: String,
    pub celebration: CelebrationConfig,
}

impl GameConfig {
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            evaluate_delay_ms: 900,
            theme_key: "rn_theme".to_string(),
            celebration: CelebrationConfig::default_config(),
        }
    }

    /// Parse and validate a JSON document; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is unusable.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check values the presentation cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.evaluate_delay_ms == 0 {
            return Err(ConfigError::Invalid("evaluate_delay_ms must be positive"));
        }
        if self.theme_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme_key must not be empty"));
        }
        if self.celebration.piece_count == 0 {
            return Err(ConfigError::Invalid("celebration.piece_count must be positive"));
        }
        if self.celebration.palette.is_empty() {
            return Err(ConfigError::Invalid("celebration.palette must not be empty"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
