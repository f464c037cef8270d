// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Extract: dump a Strava athlete's activities and GPS tracks to CSV
//!
//! One sequential batch run: refresh an access token, page through every
//! activity, fetch each activity's `latlng` stream, and write
//! `activities_data.csv` and `coordinates_data.csv`.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;

pub use error::ExtractError;
pub use pipeline::{run, RunSummary};
