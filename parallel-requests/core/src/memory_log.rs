// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::EventLog;
use std::sync::Mutex;

/// Keeps every line in memory, in write order.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<(usize, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(usize, String)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|(_, message)| message).collect()
    }

    pub fn count_matching(&self, pattern: &str) -> usize {
        self.lines()
            .iter()
            .filter(|(_, message)| message.contains(pattern))
            .count()
    }
}

impl EventLog for MemoryLog {
    fn write(&self, source: usize, message: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push((source, message.to_string()));
    }
}
