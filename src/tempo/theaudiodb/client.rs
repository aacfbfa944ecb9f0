//! TheAudioDB HTTP client
//!
//! One request per lookup against `searchtrack.php`, with the artist in `s`
//! and the title in `t`. The key is part of the path.

use super::{adapter, dto};
use crate::tempo::domain::{TempoError, TempoQuery};
use crate::tempo::request::get_json;

pub const BASE_URL: &str = "https://theaudiodb.com/api/v1/json";

/// TheAudioDB's shared test key, used when no personal key is configured
pub const PUBLIC_API_KEY: &str = "2";

/// TheAudioDB API client
pub struct TheAudioDbClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl TheAudioDbClient {
    pub fn new(http_client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(http_client, api_key, BASE_URL)
    }

    pub fn with_base_url(
        http_client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http_client,
            base_url: base_url.into(),
        }
    }

    pub async fn lookup_tempo(&self, query: &TempoQuery) -> Result<f64, TempoError> {
        let response: dto::SearchTrackResponse =
            get_json(&self.http_client, &self.search_url(query)).await?;
        adapter::to_bpm(response)
    }

    fn search_url(&self, query: &TempoQuery) -> String {
        format!(
            "{}/{}/searchtrack.php?s={}&t={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&query.artist_name),
            urlencoding::encode(&query.track_title)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_puts_artist_in_s_and_title_in_t() {
        let client = TheAudioDbClient::new(reqwest::Client::new(), PUBLIC_API_KEY);
        let url = client.search_url(&TempoQuery::new("Blinding Lights", "The Weeknd"));
        assert_eq!(
            url,
            "https://theaudiodb.com/api/v1/json/2/searchtrack.php?s=The%20Weeknd&t=Blinding%20Lights"
        );
    }

    #[test]
    fn test_client_with_custom_url() {
        let client =
            TheAudioDbClient::with_base_url(reqwest::Client::new(), "key", "http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.api_key, "key");
    }
}
