//! TheAudioDB API Data Transfer Objects
//!
//! `searchtrack.php` answers with a `track` list, or `null` when nothing
//! matches. Every scalar is a string, including the tempo.
//!
//! ```json
//! { "track": [ { "idTrack": "32793500", "strTrack": "Blinding Lights", "intTempo": "171" } ] }
//! { "track": null }
//! ```

use serde::{Deserialize, Serialize};

use crate::tempo::domain::TempoValue;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchTrackResponse {
    /// `null` on no match
    pub track: Option<Vec<Track>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Track {
    #[serde(rename = "idTrack")]
    pub id: Option<String>,
    #[serde(rename = "strTrack")]
    pub title: Option<String>,
    #[serde(rename = "strArtist")]
    pub artist: Option<String>,
    #[serde(rename = "intTempo")]
    pub tempo: Option<TempoValue>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
