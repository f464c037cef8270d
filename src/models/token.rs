// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Short-lived Strava access token.

use serde::Deserialize;
use std::fmt;

/// Bearer token obtained from the refresh exchange, valid for this run.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([redacted])")
    }
}

/// Token refresh response from Strava.
///
/// Strava also returns a rotated `refresh_token` and `expires_at`; this run
/// uses the access token once and does not persist either.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    pub access_token: String,
}

impl From<TokenRefreshResponse> for AccessToken {
    fn from(response: TokenRefreshResponse) -> Self {
        AccessToken(response.access_token)
    }
}
