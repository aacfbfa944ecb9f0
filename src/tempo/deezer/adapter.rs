//! Adapter layer: Convert Deezer DTOs to domain values
//!
//! This is the ONLY place where Deezer DTOs are interpreted.

use super::dto;
use crate::tempo::domain::{TempoError, coerce_bpm};

/// Pick the track id from a search response.
pub fn to_track_id(response: dto::SearchResponse) -> Result<u64, TempoError> {
    if let Some(error) = response.error {
        return Err(api_error(error));
    }

    response
        .data
        .first()
        .map(|hit| hit.id)
        .ok_or(TempoError::NoMatch)
}

/// Read the tempo from a track response.
pub fn to_bpm(response: dto::TrackResponse) -> Result<f64, TempoError> {
    if let Some(error) = response.error {
        return Err(api_error(error));
    }

    coerce_bpm(response.bpm.as_ref())
}

fn api_error(error: dto::ApiError) -> TempoError {
    TempoError::Http {
        status: 200,
        message: format!(
            "{} ({})",
            error.message.unwrap_or_else(|| "Unknown error".to_string()),
            error.kind.unwrap_or_default()
        ),
    }
}
