// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity stream responses and GPS points.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Stream type holding `[lat, lng]` pairs.
pub const LATLNG_STREAM: &str = "latlng";

/// A single GPS fix.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct GpsPoint {
    pub lat: f64,
    pub lng: f64,
}

impl From<[f64; 2]> for GpsPoint {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

/// Streams for one activity, requested with `key_by_type=true`.
///
/// Keys are stream types (`latlng`, `distance`, ...). Strava may include
/// streams we did not ask for, so each entry is left as raw JSON until read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StreamSet(Map<String, Value>);

/// One keyed stream entry; only `data` is used.
#[derive(Debug, Deserialize)]
struct LatLngStream {
    data: Vec<GpsPoint>,
}

impl StreamSet {
    /// GPS points from the `latlng` stream, or `None` if the activity has none.
    pub fn latlng_points(&self) -> Result<Option<Vec<GpsPoint>>, serde_json::Error> {
        match self.0.get(LATLNG_STREAM) {
            Some(entry) => {
                let stream = LatLngStream::deserialize(entry)?;
                Ok(Some(stream.data))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlng_stream_parsed_in_order() {
        let json = r#"{
            "latlng": {
                "data": [[37.3861, -122.0839], [37.3870, -122.0851]],
                "series_type": "distance",
                "original_size": 2,
                "resolution": "high"
            },
            "distance": {
                "data": [0.0, 141.2],
                "series_type": "distance",
                "original_size": 2,
                "resolution": "high"
            }
        }"#;

        let streams: StreamSet = serde_json::from_str(json).unwrap();
        let points = streams.latlng_points().unwrap().unwrap();

        assert_eq!(
            points,
            vec![
                GpsPoint { lat: 37.3861, lng: -122.0839 },
                GpsPoint { lat: 37.3870, lng: -122.0851 },
            ]
        );
    }

    #[test]
    fn test_missing_latlng_is_none() {
        // Manual activities only carry the distance stream.
        let json = r#"{"distance": {"data": [0.0, 10.0], "series_type": "distance"}}"#;

        let streams: StreamSet = serde_json::from_str(json).unwrap();
        assert_eq!(streams.latlng_points().unwrap(), None);
    }

    #[test]
    fn test_malformed_pair_is_an_error() {
        let json = r#"{"latlng": {"data": [[37.0]]}}"#;

        let streams: StreamSet = serde_json::from_str(json).unwrap();
        assert!(streams.latlng_points().is_err());
    }
}
