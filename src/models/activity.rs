// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava activity summary as returned by the list endpoint.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One activity from `/athlete/activities`.
///
/// The field set is whatever Strava sends, so the record is kept as a JSON
/// object. Only the `id` is read structurally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ActivitySummary(Map<String, Value>);

impl ActivitySummary {
    /// Strava activity ID, if present and an unsigned integer.
    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    /// All fields in the order Strava sent them.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ActivitySummary {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
