// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GPS point collection from activity streams.

use crate::error::ExtractError;
use crate::models::{AccessToken, ActivitySummary, GpsPoint};
use crate::services::strava::{ApiError, StravaClient};

/// Fetches the `latlng` stream of each activity and concatenates the points.
pub struct StreamCollector<'a> {
    client: &'a StravaClient,
}

impl<'a> StreamCollector<'a> {
    pub fn new(client: &'a StravaClient) -> Self {
        Self { client }
    }

    /// Collect GPS points for `activities`, in activity order.
    ///
    /// Activities without a `latlng` stream contribute nothing. Any failed
    /// stream request aborts the whole collection and no points are returned.
    pub async fn collect(
        &self,
        access_token: &AccessToken,
        activities: &[ActivitySummary],
    ) -> Result<Vec<GpsPoint>, ExtractError> {
        let mut points = Vec::new();

        for (position, activity) in activities.iter().enumerate() {
            let activity_id = activity
                .id()
                .ok_or(ExtractError::MissingActivityId(position))?;

            let streams = self
                .client
                .get_activity_streams(access_token, activity_id)
                .await
                .map_err(|source| ExtractError::StreamFetch {
                    activity_id,
                    source,
                })?;

            let latlng = streams
                .latlng_points()
                .map_err(|e| ExtractError::StreamFetch {
                    activity_id,
                    source: ApiError::Decode(e.to_string()),
                })?;

            match latlng {
                Some(activity_points) => {
                    tracing::debug!(activity_id, count = activity_points.len(), "GPS points");
                    points.extend(activity_points);
                }
                None => tracing::debug!(activity_id, "No GPS stream"),
            }
        }

        tracing::info!(count = points.len(), "Collected GPS points");
        Ok(points)
    }
}
