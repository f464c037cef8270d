// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Extract CLI
//!
//! Reads Strava credentials from the environment (or `.env`) and writes the
//! athlete's activities and GPS points as CSV files.

use anyhow::Context;
use strava_extract::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        per_page = config.per_page,
        output_dir = %config.output_dir.display(),
        "Starting Strava extraction"
    );

    let summary = strava_extract::run(&config).await?;

    tracing::info!(
        activities = summary.activity_count,
        points = summary.point_count,
        activities_path = %summary.activities_path.display(),
        coordinates_path = %summary.coordinates_path.display(),
        "Finished"
    );
    Ok(())
}

/// Initialize logging to stdout. `LOG_FORMAT=json` selects structured JSON.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("strava_extract=info,warn"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}
