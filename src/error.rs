// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Extraction error types.
//!
//! Every failure is either absorbed (a failed activity page truncates the
//! listing) or fatal and propagated to the process boundary.

use crate::config::ConfigError;
use crate::services::strava::ApiError;
use std::path::PathBuf;

/// Errors that can end (or, for page fetches, truncate) an extraction run.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Strava token exchange failed: {0}")]
    Authentication(#[source] ApiError),

    #[error("Failed to fetch activity page {page}: {source}")]
    PageFetch {
        page: u32,
        #[source]
        source: ApiError,
    },

    #[error("Failed to fetch streams for activity {activity_id}: {source}")]
    StreamFetch {
        activity_id: u64,
        #[source]
        source: ApiError,
    },

    #[error("Activity at position {0} has no numeric id")]
    MissingActivityId(usize),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),
}

impl ExtractError {
    /// Whether this error must abort the run.
    ///
    /// Page fetch failures are the one kind the pager absorbs.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ExtractError::PageFetch { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for extraction steps
pub type Result<T> = std::result::Result<T, ExtractError>;
