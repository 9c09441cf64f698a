// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ConfigError, DispatchConfig};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Run parameters. Every field is optional in the JSON file; missing ones
/// keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub requests: usize,
    pub workers: usize,
    pub base_url: String,
    pub path: String,
    pub stall_timeout_secs: u64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            requests: 999,
            workers: 100,
            base_url: "https://limiter.moontrader.com".to_string(),
            path: "/index10.bin".to_string(),
            stall_timeout_secs: 3,
        }
    }
}

impl LoadConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: LoadConfig =
            serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
                path: "<inline>".to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be at least 1".to_string()));
        }
        if self.stall_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "stall_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn stall_timeout(&self) -> Duration {
        Duration::from_secs(self.stall_timeout_secs)
    }

    pub fn dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            total_units: self.requests,
            worker_count: self.workers,
            stall_timeout: self.stall_timeout(),
        }
    }
}
