// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use parallel_requests_core::{ConsoleLog, Dispatcher};
use parallel_requests_http::{Args, HttpGetAction};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parallel_requests=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = args.resolve()?;

    let log = Arc::new(ConsoleLog::new());
    let action = HttpGetAction::from_config(&config, Arc::clone(&log))?;

    tracing::info!(
        url = %action.url(),
        requests = config.requests,
        workers = config.workers,
        "Starting parallel requests",
    );

    let dispatcher = Dispatcher::new(config.dispatch_config(), action, log)?;
    let summary = dispatcher.start().await;

    if summary.failed > 0 || summary.abandoned() > 0 {
        tracing::warn!(
            failed = summary.failed,
            abandoned = summary.abandoned(),
            "Some requests did not complete",
        );
    }

    Ok(())
}
