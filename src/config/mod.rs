// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Environment variable '{0}' is referenced but not set")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for a Thumbor server
///
/// ```yaml
/// host: "https://thumbor.example.com"
/// key: "${THUMBOR_KEY}"
/// legacy: false
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumborConfig {
    /// Server base URL (default: "/")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Shared signing key; unsafe URLs only when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Sign with the legacy AES scheme by default
    #[serde(default)]
    pub legacy: bool,
}

impl ThumborConfig {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, ConfigError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let mut missing = None;
        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    missing.get_or_insert_with(|| var_name.to_string());
                    String::new()
                }
            }
        });

        if let Some(var_name) = missing {
            return Err(ConfigError::MissingEnvVar(var_name));
        }

        // An empty document is a config with every field defaulted
        if substituted.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&substituted)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(host) = &self.host {
            if host.trim().is_empty() {
                return Err(ConfigError::Invalid("host cannot be empty".to_string()));
            }
        }

        if let Some(key) = &self.key {
            if key.trim().is_empty() {
                return Err(ConfigError::Invalid("key cannot be empty".to_string()));
            }
        }

        if self.legacy && self.key.is_none() {
            return Err(ConfigError::Invalid(
                "legacy signing requires a key".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for ThumborConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThumborConfig")
            .field("host", &self.host)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("legacy", &self.legacy)
            .finish()
    }
}
