//! Spotify HTTP client
//!
//! Covers the two calls the visualizer makes: exchanging an authorization
//! code for an access token, and reading the currently playing item.
//! See: https://developer.spotify.com/documentation/web-api/tutorials/code-pkce-flow

use super::{SCOPES, SpotifyError, adapter, dto};
use super::adapter::NowPlaying;

pub const ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const API_URL: &str = "https://api.spotify.com/v1";

/// Authorization URL the user opens to grant access.
pub fn authorize_url(client_id: &str, redirect_uri: &str, code_challenge: &str) -> String {
    format!(
        "{}/authorize?client_id={}&response_type=code&redirect_uri={}&code_challenge_method=S256&code_challenge={}&scope={}",
        ACCOUNTS_URL,
        urlencoding::encode(client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode(code_challenge),
        urlencoding::encode(&SCOPES.join(" "))
    )
}

/// Spotify API client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    client_id: String,
    redirect_uri: String,
    accounts_url: String,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(
        http_client: reqwest::Client,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            accounts_url: ACCOUNTS_URL.to_string(),
            api_url: API_URL.to_string(),
        }
    }

    /// Point both the accounts and API roots somewhere else
    pub fn with_base_urls(
        mut self,
        accounts_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        self.accounts_url = accounts_url.into();
        self.api_url = api_url.into();
        self
    }

    /// Exchange an authorization code (plus the PKCE verifier) for a token
    pub async fn exchange_code(
        &self,
        code: &str,
        code_verifier: &str,
    ) -> Result<dto::TokenResponse, SpotifyError> {
        let body = format!(
            "client_id={}&grant_type=authorization_code&code={}&redirect_uri={}&code_verifier={}",
            urlencoding::encode(&self.client_id),
            urlencoding::encode(code),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(code_verifier)
        );

        let response = self
            .http_client
            .post(format!("{}/api/token", self.accounts_url))
            .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| SpotifyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<dto::TokenError>().await {
                Ok(err) => err.error_description.unwrap_or(err.error),
                Err(_) => status.canonical_reason().unwrap_or("Unknown").to_string(),
            };
            return Err(SpotifyError::TokenExchange {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<dto::TokenResponse>()
            .await
            .map_err(|e| SpotifyError::Parse(e.to_string()))
    }

    /// The track playing right now, or `None` when nothing (or no music) is playing
    pub async fn currently_playing(
        &self,
        access_token: &str,
    ) -> Result<Option<NowPlaying>, SpotifyError> {
        let response = self
            .http_client
            .get(format!("{}/me/player/currently-playing", self.api_url))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| SpotifyError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SpotifyError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let playing = response
            .json::<dto::CurrentlyPlaying>()
            .await
            .map_err(|e| SpotifyError::Parse(e.to_string()))?;

        Ok(adapter::to_now_playing(playing))
    }
}
