// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Hands out unit indices `1..=total`, each exactly once.
#[derive(Clone)]
pub struct WorkCounter {
    next: Arc<AtomicUsize>,
    total: usize,
}

impl WorkCounter {
    pub fn new(total: usize) -> Self {
        Self {
            next: Arc::new(AtomicUsize::new(0)),
            total,
        }
    }

    /// Claim the next unit. Returns None once every unit has been handed out.
    pub fn claim(&self) -> Option<usize> {
        let unit = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        if unit > self.total {
            None
        } else {
            Some(unit)
        }
    }

    /// Units handed out so far, capped at the total.
    pub fn claimed(&self) -> usize {
        self.next.load(Ordering::SeqCst).min(self.total)
    }
}
