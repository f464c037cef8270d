// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde_json::{json, Value};
use std::path::Path;
use std::time::Duration;
use strava_extract::config::Config;
use strava_extract::models::AccessToken;
use strava_extract::services::StravaClient;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_ACCESS_TOKEN: &str = "test_access_token";

const BEARER: &str = "Bearer test_access_token";

/// Config pointing at the mock server, with no page delay.
#[allow(dead_code)]
pub fn test_config(server: &MockServer, output_dir: &Path) -> Config {
    Config {
        api_base_url: format!("{}/api/v3", server.uri()),
        token_url: format!("{}/oauth/token", server.uri()),
        page_delay: Duration::ZERO,
        output_dir: output_dir.to_path_buf(),
        ..Config::default()
    }
}

#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> StravaClient {
    let config = test_config(server, Path::new("unused"));
    StravaClient::new(&config).expect("Failed to build client")
}

#[allow(dead_code)]
pub fn access_token() -> AccessToken {
    AccessToken::new(TEST_ACCESS_TOKEN)
}

/// Minimal activity summary as Strava returns it.
#[allow(dead_code)]
pub fn activity_json(id: u64) -> Value {
    json!({
        "resource_state": 2,
        "name": format!("Activity {}", id),
        "distance": 1000.5,
        "sport_type": "Run",
        "id": id,
        "start_date": "2026-01-02T15:04:05Z",
    })
}

/// Keyed streams response carrying the given `[lat, lng]` pairs.
#[allow(dead_code)]
pub fn latlng_streams(points: &[[f64; 2]]) -> Value {
    json!({
        "latlng": {
            "data": points,
            "series_type": "distance",
            "original_size": points.len(),
            "resolution": "high"
        },
        "distance": {
            "data": vec![0.0; points.len()],
            "series_type": "distance",
            "original_size": points.len(),
            "resolution": "high"
        }
    })
}

/// Keyed streams response for an activity recorded without GPS.
#[allow(dead_code)]
pub fn distance_only_streams() -> Value {
    json!({
        "distance": {
            "data": [0.0, 250.0],
            "series_type": "distance",
            "original_size": 2,
            "resolution": "high"
        }
    })
}

/// Mount a successful token exchange, expected exactly once.
#[allow(dead_code)]
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "Bearer",
            "access_token": TEST_ACCESS_TOKEN,
            "expires_at": 1_800_000_000u64,
            "expires_in": 21600,
            "refresh_token": "rotated_refresh_token"
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount one activity page response, expected exactly `times` times.
#[allow(dead_code)]
pub async fn mount_page(
    server: &MockServer,
    page: u32,
    per_page: u32,
    response: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("GET"))
        .and(path("/api/v3/athlete/activities"))
        .and(header("authorization", BEARER))
        .and(query_param("page", page.to_string()))
        .and(query_param("per_page", per_page.to_string()))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

/// Mount the streams response for one activity, expected exactly `times` times.
#[allow(dead_code)]
pub async fn mount_streams(
    server: &MockServer,
    activity_id: u64,
    response: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v3/activities/{}/streams", activity_id)))
        .and(header("authorization", BEARER))
        .and(query_param("keys", "latlng"))
        .and(query_param("key_by_type", "true"))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}
