// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Outcome of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_units: usize,
    pub worker_count: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub stalls: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Units that neither succeeded nor failed, i.e. lost to a crashed worker.
    pub fn abandoned(&self) -> usize {
        self.total_units.saturating_sub(self.succeeded + self.failed)
    }
}
