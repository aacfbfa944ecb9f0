//! Deezer HTTP client
//!
//! Deezer has no direct "tempo by title" endpoint, so a lookup is two chained
//! requests: an advanced search restricted to track and artist, then a fetch
//! of the first hit's track record, which carries `bpm`.
//! No API key is required.
//!
//! See: https://developers.deezer.com/api/search

use super::{adapter, dto};
use crate::tempo::domain::{TempoError, TempoQuery};
use crate::tempo::request::get_json;

/// Public Deezer API root
pub const BASE_URL: &str = "https://api.deezer.com";

/// Deezer API client
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_base_url(http_client, BASE_URL)
    }

    /// Create a client pointed at a different API root
    pub fn with_base_url(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Search for the track, then read the tempo off its detail record
    pub async fn lookup_tempo(&self, query: &TempoQuery) -> Result<f64, TempoError> {
        let track_id = self.search_track_id(query).await?;
        tracing::debug!(track_id, "Deezer search hit");

        let track: dto::TrackResponse = get_json(&self.http_client, &self.track_url(track_id)).await?;
        adapter::to_bpm(track)
    }

    async fn search_track_id(&self, query: &TempoQuery) -> Result<u64, TempoError> {
        let response: dto::SearchResponse =
            get_json(&self.http_client, &self.search_url(query)).await?;
        adapter::to_track_id(response)
    }

    /// `q=track:"<title>" artist:"<artist>"`, limited to one hit
    fn search_url(&self, query: &TempoQuery) -> String {
        let q = format!(
            "track:\"{}\" artist:\"{}\"",
            query.track_title, query.artist_name
        );
        format!("{}/search?q={}&limit=1", self.base_url, urlencoding::encode(&q))
    }

    fn track_url(&self, track_id: u64) -> String {
        format!("{}/track/{}", self.base_url, track_id)
    }
}
