// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::EventLog;
use chrono::{DateTime, Local};

/// Writes event lines to stdout as `HH:MM:SS.mmm | src | message`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLog;

impl ConsoleLog {
    pub fn new() -> Self {
        Self
    }

    pub fn format_line(time: &DateTime<Local>, source: usize, message: &str) -> String {
        format!("{} | {:>3} | {}", time.format("%H:%M:%S%.3f"), source, message)
    }
}

impl EventLog for ConsoleLog {
    fn write(&self, source: usize, message: &str) {
        println!("{}", Self::format_line(&Local::now(), source, message));
    }
}
