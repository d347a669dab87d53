//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// How counters are kept in step with reaction records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterPolicy {
    /// Counters are created on first use, only decremented when a record was
    /// actually deleted, and never go below zero.
    #[default]
    Consistent,

    /// Counters must already exist (missing ones are skipped) and every
    /// removal decrements, even when no record matched. Counters can drift
    /// and go negative. Use only when sharing tables with a system that
    /// relies on this behavior.
    Legacy,
}

/// Event publication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Publish reaction events on a broadcast bus
    #[serde(default)]
    pub enabled: bool,

    /// Broadcast channel buffer size
    #[serde(default = "default_event_capacity")]
    pub capacity: usize,
}

fn default_event_capacity() -> usize {
    1024
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            capacity: default_event_capacity(),
        }
    }
}

/// Complete configuration for reactify
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReactifyConfig {
    #[serde(default)]
    pub counter_policy: CounterPolicy,

    #[serde(default)]
    pub events: EventsConfig,
}

impl ReactifyConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the YAML loaders cannot reject on their own
    ///
    /// Run by both loaders; call it directly on a config built in code.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // tokio's broadcast channel panics on a zero capacity
        if self.events.enabled && self.events.capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "events.capacity".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
