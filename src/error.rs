//! Application-wide error types.
//!
//! This module provides a unified error hierarchy for the application.
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors (e.g., [`SpotifyError`](crate::spotify::SpotifyError)) for detailed handling
//! - All errors implement `std::error::Error` for compatibility
//!
//! # Example
//!
//! ```ignore
//! use pulsegroove::error::{Result, ResultExt};
//!
//! fn load_session(store: &SessionStore) -> Result<StoredSession> {
//!     let session = store.load()?; // Spotify errors auto-convert
//!     Ok(session)
//! }
//! ```

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Spotify login or playback lookup error
    #[error("Spotify error: {0}")]
    Spotify(#[from] crate::spotify::SpotifyError),

    /// Artwork download or decoding error
    #[error("Palette error: {0}")]
    Palette(#[from] crate::palette::PaletteError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    ConfigFile(#[from] crate::config::ConfigError),

    /// Configuration value missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, crate::spotify::SpotifyError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Spotify(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, crate::palette::PaletteError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Palette(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteError;
    use crate::spotify::SpotifyError;

    #[test]
    fn test_error_display() {
        let err = Error::config("SPOTIFY_CLIENT_ID not set");
        assert!(err.to_string().contains("SPOTIFY_CLIENT_ID"));
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::from(PaletteError::Http(404)).context("while loading artwork");
        let msg = err.to_string();
        assert!(msg.contains("while loading artwork"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn test_spotify_error_converts() {
        let err: Error = SpotifyError::NotLoggedIn.into();
        assert!(matches!(err, Error::Spotify(SpotifyError::NotLoggedIn)));
        assert!(err.to_string().contains("login"));
    }

    #[test]
    fn test_result_ext() {
        let result: std::result::Result<(), SpotifyError> = Err(SpotifyError::Unauthorized);
        let with_ctx = result.with_context("polling playback");
        assert!(with_ctx.unwrap_err().to_string().contains("polling playback"));
    }
}
