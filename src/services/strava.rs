// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client.
//!
//! Handles:
//! - Refresh-token exchange for a fresh access token
//! - Paged activity listing
//! - Per-activity stream fetching
//! - Rate limit detection (logged, never retried)

use crate::config::Config;
use crate::error::ExtractError;
use crate::models::{AccessToken, ActivitySummary, StreamSet, LATLNG_STREAM};
use crate::models::token::TokenRefreshResponse;
use reqwest::StatusCode;
use serde::Deserialize;

/// Failure talking to Strava.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success response; `body` is the upstream body verbatim.
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("JSON parse error: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status for non-success responses.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    token_url: String,
}

impl StravaClient {
    /// Create a client for the endpoints named in `config`.
    pub fn new(config: &Config) -> Result<Self, ExtractError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ExtractError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            token_url: config.token_url.clone(),
        })
    }

    /// Exchange a refresh token for an access token.
    pub async fn refresh_access_token(
        &self,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> Result<AccessToken, ApiError> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        let tokens: TokenRefreshResponse = check_response_json(response).await?;
        Ok(tokens.into())
    }

    /// List one page of the athlete's activities.
    pub async fn list_activities(
        &self,
        access_token: &AccessToken,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<ActivitySummary>, ApiError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token.as_str())
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await?;

        check_response_json(response).await
    }

    /// Get the `latlng` stream for an activity, keyed by stream type.
    pub async fn get_activity_streams(
        &self,
        access_token: &AccessToken,
        activity_id: u64,
    ) -> Result<StreamSet, ApiError> {
        let url = format!("{}/activities/{}/streams", self.base_url, activity_id);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token.as_str())
            .query(&[("keys", LATLNG_STREAM), ("key_by_type", "true")])
            .send()
            .await?;

        check_response_json(response).await
    }
}

/// Check response status and parse the JSON body.
async fn check_response_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Strava rate limit hit (429)");
        }

        return Err(ApiError::Status { status, body });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
