// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Number of workers still inside their claim loop.
#[derive(Clone)]
pub struct ActiveWorkers {
    remaining: Arc<AtomicUsize>,
}

impl ActiveWorkers {
    pub fn new(worker_count: usize) -> Self {
        Self {
            remaining: Arc::new(AtomicUsize::new(worker_count)),
        }
    }

    /// Record one worker leaving its loop.
    /// Returns true only for the exit that brings the count to zero.
    pub fn exit(&self) -> bool {
        self.remaining.fetch_sub(1, Ordering::SeqCst) == 1
    }

    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::SeqCst)
    }
}
