// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::event_log::COORDINATOR_SOURCE;
use crate::{
    messages, Coordinator, DispatchError, EventLog, LivenessMonitor, RunSummary, UnitAction,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Shape of a run: how many units, how many workers, how long a silent
/// window may last before the monitor complains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    pub total_units: usize,
    pub worker_count: usize,
    pub stall_timeout: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            total_units: 999,
            worker_count: 100,
            stall_timeout: Duration::from_secs(3),
        }
    }
}

/// Spreads `total_units` numbered units over a fixed pool of workers.
///
/// Every worker loops on [`Coordinator::claim`] until the supply runs out,
/// then reports its exit. The exit that empties the pool sets the completion
/// signal, which is what [`Dispatcher::start`] waits on.
pub struct Dispatcher<A, L> {
    config: DispatchConfig,
    coordinator: Coordinator,
    action: Arc<A>,
    log: Arc<L>,
}

impl<A, L> Dispatcher<A, L>
where
    A: UnitAction + 'static,
    L: EventLog + 'static,
{
    pub fn new(config: DispatchConfig, action: A, log: Arc<L>) -> Result<Self, DispatchError> {
        if config.worker_count == 0 {
            return Err(DispatchError::NoWorkers);
        }
        let window = config.stall_timeout;
        if window.as_secs() == 0 || window.subsec_nanos() != 0 {
            return Err(DispatchError::InvalidStallWindow(window));
        }

        Ok(Self {
            coordinator: Coordinator::new(config.total_units, config.worker_count),
            config,
            action: Arc::new(action),
            log,
        })
    }

    /// Handles to the run's shared counters, for observation from outside.
    pub fn coordinator(&self) -> Coordinator {
        self.coordinator.clone()
    }

    /// Runs every unit to completion and returns once all workers have exited.
    pub async fn start(self) -> RunSummary {
        let started = Instant::now();
        tracing::info!(
            total_units = self.config.total_units,
            worker_count = self.config.worker_count,
            stall_timeout_secs = self.config.stall_timeout.as_secs(),
            "Dispatch started",
        );

        let monitor = self.spawn_monitor();
        let workers: Vec<JoinHandle<()>> = (1..=self.config.worker_count)
            .map(|worker_id| self.spawn_worker(worker_id))
            .collect();

        self.coordinator.signal().wait().await;

        for (idx, handle) in workers.into_iter().enumerate() {
            if let Err(e) = handle.await {
                tracing::error!(worker_id = idx + 1, error = %e, "Worker task failed");
            }
        }

        let stalls = match monitor.await {
            Ok(stalls) => stalls,
            Err(e) => {
                tracing::error!(error = %e, "Liveness monitor task failed");
                0
            }
        };

        let elapsed = started.elapsed();
        self.log.write(COORDINATOR_SOURCE, &messages::complete(elapsed));

        let summary = RunSummary {
            total_units: self.config.total_units,
            worker_count: self.config.worker_count,
            succeeded: self.coordinator.succeeded(),
            failed: self.coordinator.failed(),
            stalls,
            elapsed,
        };

        tracing::info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            abandoned = summary.abandoned(),
            stalls = summary.stalls,
            elapsed_ms = elapsed.as_millis() as u64,
            "Dispatch finished",
        );

        summary
    }

    fn spawn_worker(&self, worker_id: usize) -> JoinHandle<()> {
        let coordinator = self.coordinator.clone();
        let action = Arc::clone(&self.action);
        let log = Arc::clone(&self.log);

        tokio::spawn(async move {
            let _exit = WorkerExit {
                worker_id,
                coordinator: coordinator.clone(),
            };

            while let Some(unit) = coordinator.claim() {
                match action.execute(worker_id, unit).await {
                    Ok(()) => coordinator.unit_succeeded(),
                    Err(e) => {
                        tracing::warn!(worker_id, unit, error = %e, "Unit failed");
                        log.write(worker_id, &messages::unit_failed(unit, &e));
                        coordinator.unit_failed();
                    }
                }
            }
        })
    }

    fn spawn_monitor(&self) -> JoinHandle<usize> {
        let source = self.config.worker_count + 1;
        let window = self.config.stall_timeout;
        let log = Arc::clone(&self.log);
        let monitor = LivenessMonitor::new(
            self.coordinator.activity().clone(),
            self.coordinator.signal().clone(),
            window,
        );

        tokio::spawn(monitor.run(move || {
            tracing::warn!(window_secs = window.as_secs(), "No unit finished in stall window");
            log.write(source, &messages::no_activity(window));
        }))
    }
}

/// Reports a worker's exit when dropped, including when its unit action panics,
/// so a crashed worker cannot keep the run from completing.
struct WorkerExit {
    worker_id: usize,
    coordinator: Coordinator,
}

impl Drop for WorkerExit {
    fn drop(&mut self) {
        if std::thread::panicking() {
            tracing::error!(worker_id = self.worker_id, "Worker aborted by a panic");
        }

        if self.coordinator.worker_exited() {
            tracing::debug!(worker_id = self.worker_id, "Last worker exited, run complete");
        }
    }
}
