// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Bumped once per finished unit. Only changes in the value are meaningful.
#[derive(Clone, Default)]
pub struct ActivityCounter {
    value: Arc<AtomicU64>,
}

impl ActivityCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
