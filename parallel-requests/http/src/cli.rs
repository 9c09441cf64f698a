// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use parallel_requests_core::{ConfigError, LoadConfig};
use std::path::PathBuf;

/// Fire a fixed number of GET requests at one URL from a fixed pool of workers.
#[derive(Debug, Parser)]
#[command(name = "parallel-requests", version)]
pub struct Args {
    /// JSON config file; defaults are used when it does not exist
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Number of requests to issue
    #[arg(long)]
    pub requests: Option<usize>,

    /// Number of concurrent workers
    #[arg(long)]
    pub workers: Option<usize>,

    /// Scheme and host, e.g. https://example.com
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path requested on the base URL
    #[arg(long)]
    pub path: Option<String>,

    /// Seconds without a finished request before a warning is logged
    #[arg(long)]
    pub stall_timeout_secs: Option<u64>,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve(&self) -> Result<LoadConfig, ConfigError> {
        let mut config = if self.config.exists() {
            LoadConfig::load(&self.config)?
        } else {
            tracing::info!(
                path = %self.config.display(),
                "Config file not found, using defaults",
            );
            LoadConfig::default()
        };

        if let Some(requests) = self.requests {
            config.requests = requests;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(path) = &self.path {
            config.path = path.clone();
        }
        if let Some(secs) = self.stall_timeout_secs {
            config.stall_timeout_secs = secs;
        }

        config.validate()?;
        Ok(config)
    }
}
