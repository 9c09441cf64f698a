// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use parallel_requests_core::ConfigError;
use parallel_requests_http::Args;
use std::fs;

const MISSING: &str = "/definitely/not/here/config.json";

#[test]
fn test_no_arguments_uses_defaults_when_file_missing() {
    let args = Args::parse_from(["parallel-requests", "--config", MISSING]);
    let config = args.resolve().unwrap();

    assert_eq!(config.requests, 999);
    assert_eq!(config.workers, 100);
    assert_eq!(config.base_url, "https://limiter.moontrader.com");
}

#[test]
fn test_flags_override_defaults() {
    let args = Args::parse_from([
        "parallel-requests",
        "--config",
        MISSING,
        "--requests",
        "10",
        "--workers",
        "2",
        "--base-url",
        "http://127.0.0.1:9000",
        "--path",
        "/ping",
        "--stall-timeout-secs",
        "5",
    ]);
    let config = args.resolve().unwrap();

    assert_eq!(config.requests, 10);
    assert_eq!(config.workers, 2);
    assert_eq!(config.base_url, "http://127.0.0.1:9000");
    assert_eq!(config.path, "/ping");
    assert_eq!(config.stall_timeout_secs, 5);
}

#[test]
fn test_flags_override_file() {
    let path = std::env::temp_dir().join(format!(
        "parallel-requests-cli-{}.json",
        std::process::id()
    ));
    fs::write(&path, r#"{ "requests": 50, "workers": 8 }"#).unwrap();

    let args = Args::parse_from([
        "parallel-requests".to_string(),
        "--config".to_string(),
        path.display().to_string(),
        "--workers".to_string(),
        "4".to_string(),
    ]);
    let config = args.resolve();
    fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!(config.requests, 50);
    assert_eq!(config.workers, 4);
}

#[test]
fn test_zero_workers_flag_rejected() {
    let args = Args::parse_from(["parallel-requests", "--config", MISSING, "--workers", "0"]);
    assert!(matches!(args.resolve(), Err(ConfigError::Invalid(_))));
}
