// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Source id used for lines written by the dispatcher itself.
/// Workers are numbered from 1 and the liveness monitor follows the last worker.
pub const COORDINATOR_SOURCE: usize = 0;

/// Sink for the one-line-per-event run output.
pub trait EventLog: Send + Sync {
    /// Write one complete line. Concurrent calls must not interleave within a line.
    fn write(&self, source: usize, message: &str);
}
