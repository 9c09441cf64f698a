// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ActivityCounter, CompletionSignal};
use std::time::Duration;

/// Watches the activity counter until the run completes and reports every
/// window in which it did not move.
pub struct LivenessMonitor {
    activity: ActivityCounter,
    signal: CompletionSignal,
    timeout: Duration,
}

impl LivenessMonitor {
    pub fn new(activity: ActivityCounter, signal: CompletionSignal, timeout: Duration) -> Self {
        Self {
            activity,
            signal,
            timeout,
        }
    }

    /// Runs until the completion signal fires. `on_stall` is called once per
    /// silent window. Returns the number of stalls reported.
    pub async fn run<F>(self, mut on_stall: F) -> usize
    where
        F: FnMut() + Send,
    {
        let mut stalls = 0;
        let mut observed = self.activity.snapshot();

        while !self.signal.wait_timeout(self.timeout).await {
            let current = self.activity.snapshot();
            if current == observed {
                stalls += 1;
                on_stall();
            }
            observed = current;
        }

        stalls
    }
}
