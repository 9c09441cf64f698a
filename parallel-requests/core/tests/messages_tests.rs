// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{Duration as ChronoDuration, Local, TimeZone};
use parallel_requests_core::{messages, ConsoleLog};
use std::time::Duration;

#[test]
fn test_unit_number_left_aligned_to_three() {
    assert_eq!(messages::before_send(7), "#7   Before Send");
    assert_eq!(messages::before_send(42), "#42  Before Send");
    assert_eq!(messages::before_send(999), "#999 Before Send");
    assert_eq!(messages::before_send(1000), "#1000 Before Send");
}

#[test]
fn test_after_send_groups_milliseconds() {
    assert_eq!(
        messages::after_send(5, Duration::from_millis(87)),
        "#5   After Send: 87 ms"
    );
    assert_eq!(
        messages::after_send(12, Duration::from_millis(12_345)),
        "#12  After Send: 12,345 ms"
    );
}

#[test]
fn test_unit_failed_carries_error_text() {
    let error = "connection refused".to_string();
    assert_eq!(
        messages::unit_failed(3, &error),
        "#3   Failed: connection refused"
    );
}

#[test]
fn test_group_thousands() {
    assert_eq!(messages::group_thousands(0), "0");
    assert_eq!(messages::group_thousands(999), "999");
    assert_eq!(messages::group_thousands(1_000), "1,000");
    assert_eq!(messages::group_thousands(65_536), "65,536");
    assert_eq!(messages::group_thousands(1_234_567), "1,234,567");
}

#[test]
fn test_mm_ss_drops_whole_hours() {
    assert_eq!(messages::format_mm_ss(Duration::from_millis(900)), "00:00");
    assert_eq!(messages::format_mm_ss(Duration::from_secs(65)), "01:05");
    assert_eq!(messages::format_mm_ss(Duration::from_secs(3_725)), "02:05");
}

#[test]
fn test_liveness_and_completion_lines() {
    assert_eq!(
        messages::no_activity(Duration::from_secs(3)),
        "!!! No logger activity in last 3 seconds"
    );
    assert_eq!(
        messages::complete(Duration::from_secs(754)),
        "Complete: 12:34"
    );
}

#[test]
fn test_console_line_layout() {
    let time = Local.with_ymd_and_hms(2025, 1, 2, 13, 4, 5).unwrap()
        + ChronoDuration::milliseconds(42);

    assert_eq!(
        ConsoleLog::format_line(&time, 7, "#1   Before Send"),
        "13:04:05.042 |   7 | #1   Before Send"
    );
    assert_eq!(
        ConsoleLog::format_line(&time, 101, "Complete: 00:01"),
        "13:04:05.042 | 101 | Complete: 00:01"
    );
}
