// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - Strava access and export.

pub mod auth;
pub mod export;
pub mod pager;
pub mod strava;
pub mod streams;

pub use auth::TokenProvider;
pub use export::{export_table, Table};
pub use pager::ActivityPager;
pub use strava::{ApiError, StravaClient};
pub use streams::StreamCollector;
