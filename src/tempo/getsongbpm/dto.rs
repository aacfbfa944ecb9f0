//! GetSongBPM API Data Transfer Objects
//!
//! A `type=song` lookup answers either with a single `song` object or with a
//! `search` list, depending on how specific the free-text lookup was. When
//! nothing matches, `search` is an object carrying an error string instead of
//! a list.
//!
//! ```json
//! { "search": [ { "id": "o2r0L", "title": "Blinding Lights", "tempo": "171" } ] }
//! { "song": { "id": "o2r0L", "title": "Blinding Lights", "tempo": "171.02" } }
//! { "search": { "error": "no result" } }
//! ```
//!
//! Tempo values are strings.

use serde::{Deserialize, Serialize};

use crate::tempo::domain::TempoValue;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LookupResponse {
    pub song: Option<Song>,
    pub search: Option<SearchField>,
    /// Top-level error (bad key, quota)
    pub error: Option<String>,
}

/// `search` is a list of hits, or an error object when there are none
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SearchField {
    Hits(Vec<Song>),
    Error { error: String },
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Song {
    pub id: Option<String>,
    pub title: Option<String>,
    pub tempo: Option<TempoValue>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_song_response() {
        let json = r#"{
            "song": {
                "id": "o2r0L",
                "title": "Blinding Lights",
                "uri": "https://getsongbpm.com/song/blinding-lights/o2r0L",
                "tempo": "171.02",
                "time_sig": "4/4",
                "artist": {"id": "x", "name": "The Weeknd"}
            }
        }"#;

        let response: LookupResponse = serde_json::from_str(json).expect("Should parse song");
        let song = response.song.expect("song present");
        assert_eq!(song.tempo, Some(TempoValue::Text("171.02".to_string())));
    }

    #[test]
    fn test_parse_search_list() {
        let json = r#"{
            "search": [
                {"id": "a", "title": "Blinding Lights", "tempo": "171"},
                {"id": "b", "title": "Blinding Lights (Remix)", "tempo": "120"}
            ]
        }"#;

        let response: LookupResponse = serde_json::from_str(json).expect("Should parse search");
        match response.search {
            Some(SearchField::Hits(hits)) => assert_eq!(hits.len(), 2),
            other => panic!("expected hits, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_no_result() {
        let json = r#"{"search": {"error": "no result"}}"#;
        let response: LookupResponse = serde_json::from_str(json).expect("Should parse error");
        assert!(matches!(response.search, Some(SearchField::Error { .. })));
    }

    #[test]
    fn test_parse_top_level_error() {
        let json = r#"{"error": "Invalid API key"}"#;
        let response: LookupResponse = serde_json::from_str(json).expect("Should parse");
        assert_eq!(response.error.as_deref(), Some("Invalid API key"));
    }
}
