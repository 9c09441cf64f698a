// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod work_counter;
pub use work_counter::WorkCounter;

mod active_workers;
pub use active_workers::ActiveWorkers;

mod activity_counter;
pub use activity_counter::ActivityCounter;

mod completion_signal;
pub use completion_signal::CompletionSignal;

mod coordinator;
pub use coordinator::Coordinator;

mod unit_action;
pub use unit_action::UnitAction;

pub mod event_log;
pub use event_log::EventLog;

mod console_log;
pub use console_log::ConsoleLog;

mod memory_log;
pub use memory_log::MemoryLog;

pub mod messages;

mod liveness_monitor;
pub use liveness_monitor::LivenessMonitor;

mod dispatcher;
pub use dispatcher::{DispatchConfig, Dispatcher};

mod run_summary;
pub use run_summary::RunSummary;

mod config;
pub use config::LoadConfig;

mod error;
pub use error::{ConfigError, DispatchError};
