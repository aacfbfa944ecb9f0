//! Trait definitions for tempo providers.
//!
//! The resolver only ever talks to providers through [`TempoProvider`], so
//! production code plugs in the real HTTP clients while tests substitute the
//! mocks below.
//!
//! # Example
//!
//! ```ignore
//! use pulsegroove::tempo::traits::TempoProvider;
//!
//! async fn probe(provider: &dyn TempoProvider, query: &TempoQuery) {
//!     match provider.lookup_tempo(query).await {
//!         Ok(bpm) => println!("{}: {bpm}", provider.id()),
//!         Err(e) => println!("{}: {e}", provider.id()),
//!     }
//! }
//! ```

use async_trait::async_trait;

use super::domain::{ProviderId, TempoError, TempoQuery};

/// One external tempo database.
///
/// Implementations perform exactly one lookup attempt per call (possibly made
/// of several chained requests) and never retry.
#[async_trait]
pub trait TempoProvider: Send + Sync {
    /// Which provider this is; used for priority and for the result's `source`.
    fn id(&self) -> ProviderId;

    /// Look up the tempo for a title and artist.
    ///
    /// `Ok` always carries a finite tempo greater than zero; every "nothing
    /// usable" outcome is an error.
    async fn lookup_tempo(&self, query: &TempoQuery) -> Result<f64, TempoError>;
}

#[async_trait]
impl TempoProvider for super::deezer::DeezerClient {
    fn id(&self) -> ProviderId {
        ProviderId::Deezer
    }

    async fn lookup_tempo(&self, query: &TempoQuery) -> Result<f64, TempoError> {
        self.lookup_tempo(query).await
    }
}

#[async_trait]
impl TempoProvider for super::getsongbpm::GetSongBpmClient {
    fn id(&self) -> ProviderId {
        ProviderId::GetSongBpm
    }

    async fn lookup_tempo(&self, query: &TempoQuery) -> Result<f64, TempoError> {
        self.lookup_tempo(query).await
    }
}

#[async_trait]
impl TempoProvider for super::theaudiodb::TheAudioDbClient {
    fn id(&self) -> ProviderId {
        ProviderId::TheAudioDb
    }

    async fn lookup_tempo(&self, query: &TempoQuery) -> Result<f64, TempoError> {
        self.lookup_tempo(query).await
    }
}
