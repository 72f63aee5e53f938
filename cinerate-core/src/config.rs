//! Engine configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Configuration loading failures.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunables for the rating board.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Distinct rated movies required before the form may be submitted.
    pub min_ratings: usize,
    /// Most genres a user may select in the questionnaire step.
    pub genre_limit: usize,
    /// Manual search settings.
    pub search: SearchSettings,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            min_ratings: 5,
            genre_limit: 5,
            search: SearchSettings::default(),
        }
    }
}

impl BoardConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Settings for the manual search client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSettings {
    /// Full URL of the title lookup endpoint.
    pub endpoint: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: Url::parse("http://localhost:8080/rating-form/api/search")
                .expect("default endpoint is a valid URL"),
            timeout_secs: 30,
        }
    }
}

impl SearchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
