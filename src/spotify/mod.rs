//! Spotify integration - PKCE login and currently-playing lookup.
//!
//! Only the two read scopes the visualizer needs are requested. The access
//! token lives in a plain session file next to the config (see [`store`]).
//!
//! API docs: https://developer.spotify.com/documentation/web-api

mod adapter;
mod client;
pub mod dto;
pub mod pkce;
pub mod store;

pub use adapter::NowPlaying;
pub use client::{SpotifyClient, authorize_url};
pub use store::{SessionStore, StoredSession};

/// Scopes requested during authorization
pub const SCOPES: [&str; 2] = ["user-read-playback-state", "user-read-currently-playing"];

/// Errors from the Spotify collaborator
#[derive(Debug, thiserror::Error)]
pub enum SpotifyError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Token exchange failed: HTTP {status}: {message}")]
    TokenExchange { status: u16, message: String },

    #[error("Access token rejected - run `pulsegroove login` again")]
    Unauthorized,

    #[error("Spotify API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No pending login - run `pulsegroove login` first")]
    MissingVerifier,

    #[error("Not logged in - run `pulsegroove login` first")]
    NotLoggedIn,

    #[error("Spotify client id not configured (set SPOTIFY_CLIENT_ID)")]
    MissingClientId,

    #[error("Session file error: {0}")]
    Store(String),
}
