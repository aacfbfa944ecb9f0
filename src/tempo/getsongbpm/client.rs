//! GetSongBPM HTTP client
//!
//! One request per lookup: title and artist are joined into a single
//! free-text `lookup` parameter.

use super::{adapter, dto};
use crate::tempo::domain::{TempoError, TempoQuery};
use crate::tempo::request::get_json;

pub const BASE_URL: &str = "https://api.getsongbpm.com";

/// GetSongBPM API client
pub struct GetSongBpmClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl GetSongBpmClient {
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
        let response: dto::LookupResponse =
            get_json(&self.http_client, &self.lookup_url(query)).await?;
        adapter::to_bpm(response)
    }

    fn lookup_url(&self, query: &TempoQuery) -> String {
        let lookup = format!("{} {}", query.track_title, query.artist_name);
        format!(
            "{}/?api_key={}&type=song&lookup={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&lookup)
        )
    }
}
