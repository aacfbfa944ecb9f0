//! Deezer API Data Transfer Objects
//!
//! These types match what the Deezer public API returns for the two calls we
//! make. Fields we don't read are left out; serde ignores them.
//! DO NOT use these types outside the deezer module - convert to domain types.
//!
//! Search response (`/search?q=...&limit=1`):
//! ```json
//! { "data": [ { "id": 908604612, "title": "Blinding Lights" } ], "total": 1 }
//! ```
//!
//! Track response (`/track/908604612`):
//! ```json
//! { "id": 908604612, "title": "Blinding Lights", "bpm": 171 }
//! ```
//!
//! Errors come back with HTTP 200 and an `error` object instead of data.

use serde::{Deserialize, Serialize};

use crate::tempo::domain::TempoValue;

/// Search endpoint response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<SearchHit>,
    pub error: Option<ApiError>,
}

/// One search hit; only the id is needed for the follow-up lookup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchHit {
    pub id: u64,
    pub title: Option<String>,
}

/// Track endpoint response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackResponse {
    pub id: Option<u64>,
    pub title: Option<String>,
    /// Tempo; Deezer sends 0 when it has no analysis for the track
    pub bpm: Option<TempoValue>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
    pub code: Option<i64>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_with_hit() {
        let json = r#"{
            "data": [{
                "id": 908604612,
                "readable": true,
                "title": "Blinding Lights",
                "duration": 200,
                "artist": {"id": 4050205, "name": "The Weeknd"}
            }],
            "total": 1,
            "next": "https://api.deezer.com/search?q=...&index=1"
        }"#;

        let response: SearchResponse = serde_json::from_str(json).expect("Should parse search");
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, 908604612);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_parse_empty_search() {
        let json = r#"{"data": [], "total": 0}"#;
        let response: SearchResponse = serde_json::from_str(json).expect("Should parse");
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_parse_track_with_bpm() {
        let json = r#"{
            "id": 908604612,
            "title": "Blinding Lights",
            "bpm": 171,
            "gain": -7.5
        }"#;

        let response: TrackResponse = serde_json::from_str(json).expect("Should parse track");
        assert_eq!(response.bpm, Some(TempoValue::Number(171.0)));
    }

    #[test]
    fn test_parse_error_payload() {
        let json = r#"{
            "error": {"type": "DataException", "message": "no data", "code": 800}
        }"#;

        let response: TrackResponse = serde_json::from_str(json).expect("Should parse error");
        let error = response.error.expect("error present");
        assert_eq!(error.code, Some(800));
        assert!(response.bpm.is_none());
    }
}
