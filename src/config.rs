// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run configuration loaded from environment variables.
//!
//! Credentials are read once at startup and passed explicitly to the
//! components that need them; nothing reads the environment after this.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Default Strava REST API root.
pub const DEFAULT_API_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Default Strava OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://www.strava.com/oauth/token";

/// Largest page Strava will serve, and our default.
pub const DEFAULT_PER_PAGE: u32 = 200;

/// Pause between activity page requests, to stay under Strava's rate limit.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(200);

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// File name for the exported activity summaries.
pub const ACTIVITIES_FILE: &str = "activities_data.csv";

/// File name for the exported GPS points.
pub const COORDINATES_FILE: &str = "coordinates_data.csv";

/// Run configuration, loaded once at startup.
#[derive(Clone)]
pub struct Config {
    // --- Secrets ---
    /// Strava OAuth client ID
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    /// Long-lived refresh token exchanged for an access token each run
    pub strava_refresh_token: String,

    // --- Endpoints ---
    pub api_base_url: String,
    pub token_url: String,

    // --- Fetch behavior ---
    /// Activities requested per page
    pub per_page: u32,
    /// Fixed delay between page requests
    pub page_delay: Duration,
    /// Per-request timeout for the HTTP client
    pub request_timeout: Duration,

    /// Directory the CSV files are written into
    pub output_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("strava_client_id", &self.strava_client_id)
            .field("strava_client_secret", &"[redacted]")
            .field("strava_refresh_token", &"[redacted]")
            .field("api_base_url", &self.api_base_url)
            .field("token_url", &self.token_url)
            .field("per_page", &self.per_page)
            .field("page_delay", &self.page_delay)
            .field("request_timeout", &self.request_timeout)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            strava_refresh_token: "test_refresh_token".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            page_delay: DEFAULT_PAGE_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let per_page = match optional("STRAVA_PER_PAGE") {
            Some(raw) => parse_per_page(&raw)?,
            None => DEFAULT_PER_PAGE,
        };

        let page_delay = match optional("STRAVA_PAGE_DELAY_MS") {
            Some(raw) => Duration::from_millis(parse_number("STRAVA_PAGE_DELAY_MS", &raw)?),
            None => DEFAULT_PAGE_DELAY,
        };

        let request_timeout = match optional("STRAVA_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                Duration::from_secs(parse_number("STRAVA_REQUEST_TIMEOUT_SECS", &raw)?)
            }
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            strava_client_id: required("STRAVA_CLIENT_ID")?,
            strava_client_secret: required("STRAVA_CLIENT_SECRET")?,
            strava_refresh_token: required("STRAVA_REFRESH_TOKEN")?,
            api_base_url: optional("STRAVA_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            token_url: optional("STRAVA_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            per_page,
            page_delay,
            request_timeout,
            output_dir: optional("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        })
    }
}

fn parse_per_page(raw: &str) -> Result<u32, ConfigError> {
    let value: u32 = raw.parse().map_err(|_| ConfigError::Invalid {
        key: "STRAVA_PER_PAGE",
        value: raw.to_string(),
    })?;
    if value == 0 {
        return Err(ConfigError::Invalid {
            key: "STRAVA_PER_PAGE",
            value: raw.to_string(),
        });
    }
    Ok(value)
}

fn parse_number(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
