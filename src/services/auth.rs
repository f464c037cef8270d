// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access token acquisition.

use crate::config::Config;
use crate::error::ExtractError;
use crate::models::AccessToken;
use crate::services::strava::StravaClient;

/// Exchanges the configured refresh token for an access token.
pub struct TokenProvider<'a> {
    client: &'a StravaClient,
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
}

impl<'a> TokenProvider<'a> {
    pub fn new(client: &'a StravaClient, config: &'a Config) -> Self {
        Self {
            client,
            client_id: &config.strava_client_id,
            client_secret: &config.strava_client_secret,
            refresh_token: &config.strava_refresh_token,
        }
    }

    /// Perform the exchange. One network request, no retry.
    pub async fn access_token(&self) -> Result<AccessToken, ExtractError> {
        let token = self
            .client
            .refresh_access_token(self.client_id, self.client_secret, self.refresh_token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Strava token exchange failed");
                ExtractError::Authentication(e)
            })?;

        tracing::info!("Obtained Strava access token");
        Ok(token)
    }
}
