//! Adapter layer: Convert GetSongBPM DTOs to domain values

use super::dto;
use crate::tempo::domain::{TempoError, coerce_bpm};

/// Read the tempo, preferring `song.tempo` over `search[0].tempo`.
pub fn to_bpm(response: dto::LookupResponse) -> Result<f64, TempoError> {
    if let Some(error) = response.error {
        return Err(TempoError::Http {
            status: 200,
            message: error,
        });
    }

    // A song object without a tempo still falls back to the search hits
    let song_seen = response.song.is_some();
    if let Some(tempo) = response.song.and_then(|song| song.tempo) {
        return coerce_bpm(Some(&tempo));
    }

    match response.search {
        Some(dto::SearchField::Hits(hits)) => {
            let first = hits.into_iter().next().ok_or(TempoError::NoMatch)?;
            coerce_bpm(first.tempo.as_ref())
        }
        Some(dto::SearchField::Error { .. }) | None if song_seen => Err(TempoError::MissingTempo),
        Some(dto::SearchField::Error { .. }) | None => Err(TempoError::NoMatch),
    }
}
