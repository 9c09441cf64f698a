// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;

/// The work performed for one claimed unit.
///
/// Implementations are shared by every worker of a run, so they must be
/// safe to call concurrently.
#[async_trait]
pub trait UnitAction: Send + Sync {
    type Error: std::fmt::Display + Send + 'static;

    /// Process unit `unit` (1-based) on behalf of worker `worker_id`.
    async fn execute(&self, worker_id: usize, unit: usize) -> Result<(), Self::Error>;
}
