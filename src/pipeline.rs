// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end extraction run.

use crate::config::{Config, ACTIVITIES_FILE, COORDINATES_FILE};
use crate::error::ExtractError;
use crate::services::{
    export_table, ActivityPager, StravaClient, StreamCollector, Table, TokenProvider,
};
use std::path::PathBuf;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub activity_count: usize,
    pub point_count: usize,
    pub activities_path: PathBuf,
    pub coordinates_path: PathBuf,
}

/// Token, then activities, then GPS points, then both CSV files.
///
/// Every step runs to completion before the next starts; nothing is retried.
pub async fn run(config: &Config) -> Result<RunSummary, ExtractError> {
    let client = StravaClient::new(config)?;

    let access_token = TokenProvider::new(&client, config).access_token().await?;

    let activities = ActivityPager::new(&client, config.per_page, config.page_delay)
        .fetch_all(&access_token)
        .await;
    tracing::info!(count = activities.len(), "Fetched activities");

    let points = StreamCollector::new(&client)
        .collect(&access_token, &activities)
        .await?;

    let activities_path = export_table(
        &config.output_dir,
        ACTIVITIES_FILE,
        &Table::from_activities(&activities),
    )?;
    let coordinates_path = export_table(
        &config.output_dir,
        COORDINATES_FILE,
        &Table::from_points(&points),
    )?;

    Ok(RunSummary {
        activity_count: activities.len(),
        point_count: points.len(),
        activities_path,
        coordinates_path,
    })
}
