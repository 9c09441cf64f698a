// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::HttpActionError;
use async_trait::async_trait;
use parallel_requests_core::{messages, EventLog, LoadConfig, UnitAction};
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Instant;

/// Join the configured base address and path into the request URL.
pub fn target_url(base_url: &str, path: &str) -> Result<Url, HttpActionError> {
    let invalid = |reason: String| HttpActionError::InvalidUrl {
        url: format!("{}{}", base_url, path),
        reason,
    };

    let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    base.join(path).map_err(|e| invalid(e.to_string()))
}

/// Issues one GET per unit against a fixed URL, timing the full round trip
/// including the body read.
///
/// A single [`Client`] (and so a single connection pool) is shared by every
/// worker of the run.
pub struct HttpGetAction<L> {
    client: Client,
    url: Url,
    log: Arc<L>,
}

impl<L: EventLog> HttpGetAction<L> {
    pub fn new(client: Client, url: Url, log: Arc<L>) -> Self {
        Self { client, url, log }
    }

    pub fn from_config(config: &LoadConfig, log: Arc<L>) -> Result<Self, HttpActionError> {
        let url = target_url(&config.base_url, &config.path)?;
        let client = Client::builder().build().map_err(HttpActionError::Client)?;
        Ok(Self::new(client, url, log))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl<L: EventLog + 'static> UnitAction for HttpGetAction<L> {
    type Error = HttpActionError;

    async fn execute(&self, worker_id: usize, unit: usize) -> Result<(), HttpActionError> {
        self.log.write(worker_id, &messages::before_send(unit));
        let started = Instant::now();

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(HttpActionError::Send)?;
        let status = response.status();
        let body = response.bytes().await.map_err(HttpActionError::Body)?;

        let elapsed = started.elapsed();
        tracing::debug!(
            worker_id,
            unit,
            status = status.as_u16(),
            body_bytes = body.len(),
            "Response received",
        );
        self.log.write(worker_id, &messages::after_send(unit, elapsed));
        Ok(())
    }
}
