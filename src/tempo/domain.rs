//! Internal domain models for tempo lookup.
//!
//! These types are OUR types - they don't change when provider APIs change.
//! Every provider response gets converted into these types via adapters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an external tempo database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Deezer,
    GetSongBpm,
    TheAudioDb,
}

impl ProviderId {
    /// Providers in the order they are consulted. Earlier wins.
    pub const PRIORITY: [ProviderId; 3] = [
        ProviderId::Deezer,
        ProviderId::GetSongBpm,
        ProviderId::TheAudioDb,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProviderId::Deezer => "deezer",
            ProviderId::GetSongBpm => "getsongbpm",
            ProviderId::TheAudioDb => "theaudiodb",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What we ask the providers: a track title plus its artist, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempoQuery {
    pub track_title: String,
    pub artist_name: String,
}

impl TempoQuery {
    pub fn new(track_title: impl Into<String>, artist_name: impl Into<String>) -> Self {
        Self {
            track_title: track_title.into(),
            artist_name: artist_name.into(),
        }
    }

    /// Both fields must be non-empty before any provider is contacted.
    pub fn is_valid(&self) -> bool {
        !self.track_title.is_empty() && !self.artist_name.is_empty()
    }
}

/// Outcome of one resolution.
///
/// `bpm` and `source` are either both present or both absent; the fields are
/// private so the only way to build one is through [`TempoResult::found`] or
/// [`TempoResult::absent`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TempoResult {
    bpm: Option<f64>,
    source: Option<ProviderId>,
}

impl TempoResult {
    /// A successful lookup. Returns `absent` if `bpm` is not a usable tempo.
    pub fn found(bpm: f64, source: ProviderId) -> Self {
        if is_valid_bpm(bpm) {
            Self {
                bpm: Some(bpm),
                source: Some(source),
            }
        } else {
            Self::absent()
        }
    }

    pub fn absent() -> Self {
        Self {
            bpm: None,
            source: None,
        }
    }

    pub fn bpm(&self) -> Option<f64> {
        self.bpm
    }

    pub fn source(&self) -> Option<ProviderId> {
        self.source
    }
}

/// A tempo field as it appears on the wire: some providers send numbers,
/// others send strings like `"171.02"`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TempoValue {
    Number(f64),
    Text(String),
}

impl TempoValue {
    pub fn to_bpm(&self) -> Option<f64> {
        let value = match self {
            TempoValue::Number(n) => *n,
            TempoValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        is_valid_bpm(value).then_some(value)
    }
}

/// A usable tempo is finite and strictly positive.
pub fn is_valid_bpm(bpm: f64) -> bool {
    bpm.is_finite() && bpm > 0.0
}

/// Coerce an optional wire value into a usable tempo.
pub fn coerce_bpm(value: Option<&TempoValue>) -> Result<f64, TempoError> {
    let value = value.ok_or(TempoError::MissingTempo)?;
    value
        .to_bpm()
        .ok_or_else(|| TempoError::InvalidTempo(format!("{:?}", value)))
}

/// Errors a single provider attempt can produce.
///
/// None of these ever leave the resolver; they are logged and the chain moves on.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TempoError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No matching track found")]
    NoMatch,

    #[error("Response has no tempo field")]
    MissingTempo,

    #[error("Unusable tempo value: {0}")]
    InvalidTempo(String),

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Lookup cancelled")]
    Cancelled,
}

impl TempoError {
    /// Network, status, timeout: the provider could not be reached properly.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            TempoError::Network(_) | TempoError::Http { .. } | TempoError::Timeout(_)
        )
    }
}
