// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Text of the run's event lines.

use std::time::Duration;

pub fn before_send(unit: usize) -> String {
    format!("#{:<3} Before Send", unit)
}

pub fn after_send(unit: usize, elapsed: Duration) -> String {
    format!(
        "#{:<3} After Send: {} ms",
        unit,
        group_thousands(elapsed.as_millis())
    )
}

pub fn unit_failed(unit: usize, error: &dyn std::fmt::Display) -> String {
    format!("#{:<3} Failed: {}", unit, error)
}

pub fn no_activity(window: Duration) -> String {
    format!("!!! No logger activity in last {} seconds", window.as_secs())
}

pub fn complete(elapsed: Duration) -> String {
    format!("Complete: {}", format_mm_ss(elapsed))
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Minutes and seconds components of a duration; whole hours are dropped.
pub fn format_mm_ss(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", (secs / 60) % 60, secs % 60)
}
