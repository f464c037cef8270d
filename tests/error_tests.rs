// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use reqwest::StatusCode;
use strava_extract::config::ConfigError;
use strava_extract::error::ExtractError;
use strava_extract::services::ApiError;

fn status_error(code: StatusCode, body: &str) -> ApiError {
    ApiError::Status {
        status: code,
        body: body.to_string(),
    }
}

#[test]
fn test_only_page_fetch_is_non_fatal() {
    let err = ExtractError::PageFetch {
        page: 3,
        source: status_error(StatusCode::INTERNAL_SERVER_ERROR, ""),
    };
    assert!(!err.is_fatal());

    let err = ExtractError::StreamFetch {
        activity_id: 1,
        source: status_error(StatusCode::NOT_FOUND, ""),
    };
    assert!(err.is_fatal());

    let err = ExtractError::from(ConfigError::Missing("STRAVA_CLIENT_ID"));
    assert!(err.is_fatal());

    assert!(ExtractError::MissingActivityId(0).is_fatal());
}

#[test]
fn test_error_messages() {
    let err = ExtractError::PageFetch {
        page: 3,
        source: status_error(StatusCode::TOO_MANY_REQUESTS, "Rate Limit Exceeded"),
    };
    assert_eq!(
        err.to_string(),
        "Failed to fetch activity page 3: HTTP 429 Too Many Requests: Rate Limit Exceeded"
    );

    let err = ExtractError::StreamFetch {
        activity_id: 42,
        source: ApiError::Decode("expected value at line 1 column 1".to_string()),
    };
    assert_eq!(
        err.to_string(),
        "Failed to fetch streams for activity 42: JSON parse error: expected value at line 1 column 1"
    );

    let err = ExtractError::from(ConfigError::Missing("STRAVA_REFRESH_TOKEN"));
    assert_eq!(
        err.to_string(),
        "Missing required environment variable: STRAVA_REFRESH_TOKEN"
    );
}
