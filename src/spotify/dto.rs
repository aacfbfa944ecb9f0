//! Spotify Web API Data Transfer Objects
//!
//! Only the fields the visualizer reads. DO NOT use these types outside the
//! spotify module - convert to [`NowPlaying`](super::NowPlaying).
//!
//! Currently playing (`GET /v1/me/player/currently-playing`):
//! ```json
//! {
//!   "is_playing": true,
//!   "currently_playing_type": "track",
//!   "item": {
//!     "id": "0VjIjW4GlUZAMYd2vXMi3b",
//!     "uri": "spotify:track:0VjIjW4GlUZAMYd2vXMi3b",
//!     "name": "Blinding Lights",
//!     "artists": [{"name": "The Weeknd"}],
//!     "album": {"images": [{"url": "https://i.scdn.co/image/...", "width": 640, "height": 640}]}
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Token endpoint response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
}

/// Token endpoint error body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenError {
    pub error: String,
    pub error_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrentlyPlaying {
    #[serde(default)]
    pub is_playing: bool,
    /// "track", "episode", "ad" or "unknown"
    pub currently_playing_type: Option<String>,
    pub item: Option<Track>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub id: Option<String>,
    pub uri: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub album: Option<Album>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Album {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_token_response() {
        let json = r#"{
            "access_token": "BQD...",
            "token_type": "Bearer",
            "scope": "user-read-playback-state user-read-currently-playing",
            "expires_in": 3600,
            "refresh_token": "AQA..."
        }"#;

        let token: TokenResponse = serde_json::from_str(json).expect("Should parse token");
        assert_eq!(token.access_token, "BQD...");
        assert_eq!(token.expires_in, Some(3600));
    }

    #[test]
    fn test_parse_currently_playing_track() {
        let json = r#"{
            "timestamp": 1700000000000,
            "progress_ms": 42000,
            "is_playing": true,
            "currently_playing_type": "track",
            "item": {
                "id": "0VjIjW4GlUZAMYd2vXMi3b",
                "uri": "spotify:track:0VjIjW4GlUZAMYd2vXMi3b",
                "name": "Blinding Lights",
                "duration_ms": 200040,
                "artists": [{"id": "1Xyo4u8uXC1ZmMpatF05PJ", "name": "The Weeknd"}],
                "album": {
                    "name": "After Hours",
                    "images": [
                        {"url": "https://i.scdn.co/image/640", "width": 640, "height": 640},
                        {"url": "https://i.scdn.co/image/300", "width": 300, "height": 300}
                    ]
                }
            }
        }"#;

        let playing: CurrentlyPlaying = serde_json::from_str(json).expect("Should parse");
        let item = playing.item.expect("item present");
        assert_eq!(item.name, "Blinding Lights");
        assert_eq!(item.artists[0].name, "The Weeknd");
        assert_eq!(item.album.unwrap().images.len(), 2);
    }

    #[test]
    fn test_parse_ad_without_item() {
        let json = r#"{"is_playing": true, "currently_playing_type": "ad", "item": null}"#;
        let playing: CurrentlyPlaying = serde_json::from_str(json).expect("Should parse ad");
        assert!(playing.item.is_none());
    }
}
