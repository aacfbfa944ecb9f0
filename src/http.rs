//! Shared HTTP client construction.
//!
//! All outbound calls (tempo providers, Spotify, artwork) go through a
//! `reqwest::Client` built here so they share the same user agent, gzip
//! handling and request timeout.

use std::time::Duration;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Default bound for a single outbound request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Build the HTTP client used by every collaborator.
///
/// The client is configured to:
/// - Accept gzip-compressed responses (reduces bandwidth)
/// - Send a User-Agent header identifying the application
/// - Give up on any request that takes longer than `timeout`
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}
