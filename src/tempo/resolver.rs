//! Tempo resolver - short-circuit fallback chain over the providers.
//!
//! Providers are asked one after another in priority order; the first one to
//! produce a tempo greater than zero wins and the rest are never contacted.
//! Every provider failure is logged and absorbed, so callers only ever see a
//! tempo with its source, or nothing.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::config::ProviderConfig;
use super::deezer::DeezerClient;
use super::domain::{ProviderId, TempoError, TempoQuery, TempoResult, is_valid_bpm};
use super::getsongbpm::GetSongBpmClient;
use super::theaudiodb::TheAudioDbClient;
use super::traits::TempoProvider;

/// Ordered chain of tempo providers.
///
/// Holds no mutable state; one resolver can serve concurrent queries.
pub struct TempoResolver {
    providers: Vec<Box<dyn TempoProvider>>,
    attempt_timeout: Duration,
}

impl TempoResolver {
    /// Build the production chain from configuration.
    ///
    /// Disabled providers are left out entirely, so they are never attempted.
    pub fn from_config(config: &ProviderConfig, http_client: reqwest::Client) -> Self {
        let mut providers: Vec<Box<dyn TempoProvider>> = Vec::new();

        for id in config.enabled_providers() {
            match id {
                ProviderId::Deezer => {
                    providers.push(Box::new(DeezerClient::new(http_client.clone())));
                }
                ProviderId::GetSongBpm => {
                    if let Some(key) = &config.getsongbpm_api_key {
                        providers.push(Box::new(GetSongBpmClient::new(http_client.clone(), key)));
                    }
                }
                ProviderId::TheAudioDb => {
                    providers.push(Box::new(TheAudioDbClient::new(
                        http_client.clone(),
                        config.theaudiodb_key(),
                    )));
                }
            }
        }

        Self::with_providers(providers, config.attempt_timeout)
    }

    /// Build a chain from explicit providers, consulted in the given order.
    pub fn with_providers(providers: Vec<Box<dyn TempoProvider>>, attempt_timeout: Duration) -> Self {
        Self {
            providers,
            attempt_timeout,
        }
    }

    /// Providers in the order they will be tried
    pub fn provider_ids(&self) -> Vec<ProviderId> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Resolve the tempo for a track.
    ///
    /// Never fails: an empty title or artist, or a chain where every provider
    /// errors or has no usable value, both come back as [`TempoResult::absent`].
    pub async fn resolve(&self, query: &TempoQuery) -> TempoResult {
        self.resolve_cancellable(query, &CancellationToken::new())
            .await
    }

    /// Like [`resolve`](Self::resolve), but gives up as soon as `cancel` fires.
    ///
    /// No provider is contacted after cancellation and the result is absent.
    pub async fn resolve_cancellable(
        &self,
        query: &TempoQuery,
        cancel: &CancellationToken,
    ) -> TempoResult {
        if !query.is_valid() {
            tracing::debug!(?query, "Skipping tempo lookup: empty title or artist");
            return TempoResult::absent();
        }

        for provider in &self.providers {
            if cancel.is_cancelled() {
                return TempoResult::absent();
            }

            let id = provider.id();
            match self.attempt(provider.as_ref(), query, cancel).await {
                Ok(bpm) if is_valid_bpm(bpm) => {
                    tracing::info!(
                        provider = %id,
                        bpm,
                        title = %query.track_title,
                        artist = %query.artist_name,
                        "Tempo resolved"
                    );
                    return TempoResult::found(bpm, id);
                }
                Ok(bpm) => {
                    tracing::debug!(provider = %id, bpm, "Provider returned unusable tempo");
                }
                Err(TempoError::Cancelled) => {
                    tracing::debug!(provider = %id, "Tempo lookup cancelled");
                    return TempoResult::absent();
                }
                Err(e) if e.is_unavailable() => {
                    tracing::warn!(provider = %id, error = %e, "Tempo provider unavailable");
                }
                Err(e) => {
                    tracing::debug!(provider = %id, error = %e, "Tempo provider had no data");
                }
            }
        }

        tracing::debug!(
            title = %query.track_title,
            artist = %query.artist_name,
            "No provider had a tempo"
        );
        TempoResult::absent()
    }

    /// One bounded attempt against one provider
    async fn attempt(
        &self,
        provider: &dyn TempoProvider,
        query: &TempoQuery,
        cancel: &CancellationToken,
    ) -> Result<f64, TempoError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TempoError::Cancelled),
            outcome = tokio::time::timeout(self.attempt_timeout, provider.lookup_tempo(query)) => {
                outcome.unwrap_or(Err(TempoError::Timeout(self.attempt_timeout)))
            }
        }
    }
}
