// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Paged activity listing.

use crate::error::ExtractError;
use crate::models::{AccessToken, ActivitySummary};
use crate::services::strava::StravaClient;
use std::time::Duration;

/// Walks `/athlete/activities` page by page until Strava returns an empty page.
pub struct ActivityPager<'a> {
    client: &'a StravaClient,
    per_page: u32,
    page_delay: Duration,
}

impl<'a> ActivityPager<'a> {
    pub fn new(client: &'a StravaClient, per_page: u32, page_delay: Duration) -> Self {
        Self {
            client,
            per_page,
            page_delay,
        }
    }

    /// Fetch every activity, in the order Strava returns them.
    ///
    /// A failed page ends the listing: the error is logged and the activities
    /// gathered so far are returned. Pages after the first are preceded by
    /// the configured delay.
    pub async fn fetch_all(&self, access_token: &AccessToken) -> Vec<ActivitySummary> {
        let mut activities = Vec::new();
        let mut page = 1u32;

        loop {
            tracing::info!(page, "Fetching page");

            let batch = match self
                .client
                .list_activities(access_token, page, self.per_page)
                .await
            {
                Ok(batch) => batch,
                Err(source) => {
                    let err = ExtractError::PageFetch { page, source };
                    tracing::error!(
                        error = %err,
                        fetched = activities.len(),
                        "Stopping pagination early"
                    );
                    break;
                }
            };

            if batch.is_empty() {
                tracing::info!(
                    total = activities.len(),
                    "No more activities found, all data retrieved"
                );
                break;
            }

            tracing::debug!(page, count = batch.len(), "Fetched activities");
            activities.extend(batch);
            page += 1;

            tokio::time::sleep(self.page_delay).await;
        }

        activities
    }
}
