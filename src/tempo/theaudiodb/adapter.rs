//! Adapter layer: Convert TheAudioDB DTOs to domain values

use super::dto;
use crate::tempo::domain::{TempoError, coerce_bpm};

/// Read `track[0].intTempo`.
pub fn to_bpm(response: dto::SearchTrackResponse) -> Result<f64, TempoError> {
    let first = response
        .track
        .and_then(|tracks| tracks.into_iter().next())
        .ok_or(TempoError::NoMatch)?;
    coerce_bpm(first.tempo.as_ref())
}
