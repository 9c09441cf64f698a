// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ActiveWorkers, ActivityCounter, CompletionSignal, WorkCounter};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared state of a single run. Cloning hands out another set of handles
/// to the same counters.
#[derive(Clone)]
pub struct Coordinator {
    work: WorkCounter,
    active: ActiveWorkers,
    activity: ActivityCounter,
    signal: CompletionSignal,
    succeeded: Arc<AtomicUsize>,
    failed: Arc<AtomicUsize>,
}

impl Coordinator {
    pub fn new(total_units: usize, worker_count: usize) -> Self {
        Self {
            work: WorkCounter::new(total_units),
            active: ActiveWorkers::new(worker_count),
            activity: ActivityCounter::new(),
            signal: CompletionSignal::new(),
            succeeded: Arc::new(AtomicUsize::new(0)),
            failed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn claim(&self) -> Option<usize> {
        self.work.claim()
    }

    pub fn unit_succeeded(&self) {
        self.succeeded.fetch_add(1, Ordering::SeqCst);
        self.activity.record();
    }

    pub fn unit_failed(&self) {
        self.failed.fetch_add(1, Ordering::SeqCst);
        self.activity.record();
    }

    /// Called once by every worker after its claim loop ends.
    /// The last caller sets the completion signal; returns true for that caller.
    pub fn worker_exited(&self) -> bool {
        if self.active.exit() {
            self.signal.set()
        } else {
            false
        }
    }

    pub fn active_workers(&self) -> usize {
        self.active.remaining()
    }

    pub fn activity(&self) -> &ActivityCounter {
        &self.activity
    }

    pub fn signal(&self) -> &CompletionSignal {
        &self.signal
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded.load(Ordering::SeqCst)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }
}
