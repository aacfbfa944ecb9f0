//! Live session - follows what the user is playing and keeps the visuals fed.
//!
//! Each tick polls the currently playing track. When the track changes, the
//! session announces `Searching`, resolves tempo and palette, then announces
//! `Playing` with everything a renderer needs. Updates go out on a `watch`
//! channel so late subscribers always see the latest state.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::palette::{ArtworkFetcher, Palette};
use crate::spotify::{NowPlaying, SpotifyClient, SpotifyError};
use crate::tempo::{TempoQuery, TempoResolver, TempoResult};
use crate::visuals::BeatTiming;

/// Everything the visuals need for one track
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackVisuals {
    pub track: NowPlaying,
    pub tempo: TempoResult,
    pub palette: Palette,
    pub timing: BeatTiming,
}

/// State published to subscribers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SessionUpdate {
    /// No poll has completed yet
    Starting,
    /// Nothing (or no music) is playing
    Idle,
    /// New track seen, tempo and palette still being looked up
    Searching(NowPlaying),
    Playing(TrackVisuals),
}

/// Where the session learns what's playing
#[async_trait]
pub trait NowPlayingSource: Send + Sync {
    async fn now_playing(&self) -> Result<Option<NowPlaying>, SpotifyError>;
}

/// Where the session gets artwork palettes
#[async_trait]
pub trait PaletteSource: Send + Sync {
    async fn palette_for(&self, artwork_url: Option<&str>) -> Palette;
}

/// Spotify account plus the token to poll it with
pub struct SpotifySource {
    client: SpotifyClient,
    access_token: String,
}

impl SpotifySource {
    pub fn new(client: SpotifyClient, access_token: impl Into<String>) -> Self {
        Self {
            client,
            access_token: access_token.into(),
        }
    }
}

#[async_trait]
impl NowPlayingSource for SpotifySource {
    async fn now_playing(&self) -> Result<Option<NowPlaying>, SpotifyError> {
        self.client.currently_playing(&self.access_token).await
    }
}

#[async_trait]
impl PaletteSource for ArtworkFetcher {
    async fn palette_for(&self, artwork_url: Option<&str>) -> Palette {
        self.palette_for(artwork_url).await
    }
}

/// The poll loop
pub struct LiveSession {
    source: Box<dyn NowPlayingSource>,
    resolver: TempoResolver,
    artwork: Box<dyn PaletteSource>,
    poll_interval: Duration,
    updates: watch::Sender<SessionUpdate>,
    current_track: Option<String>,
}

impl LiveSession {
    pub fn new(
        source: Box<dyn NowPlayingSource>,
        resolver: TempoResolver,
        artwork: Box<dyn PaletteSource>,
        poll_interval: Duration,
    ) -> Self {
        let (updates, _) = watch::channel(SessionUpdate::Starting);
        Self {
            source,
            resolver,
            artwork,
            poll_interval,
            updates,
            current_track: None,
        }
    }

    /// Receive every state change from now on
    pub fn subscribe(&self) -> watch::Receiver<SessionUpdate> {
        self.updates.subscribe()
    }

    /// Poll until `cancel` fires.
    ///
    /// Transient poll errors are logged and retried on the next tick; only an
    /// expired or revoked token ends the loop with an error.
    pub async fn run(&mut self, cancel: CancellationToken) -> Result<(), SpotifyError> {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(interval = ?self.poll_interval, "Live session started");
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::info!("Live session stopped");
                    return Ok(());
                }
                _ = ticker.tick() => {}
            }
            self.poll_once(&cancel).await?;
        }
    }

    /// One tick of the loop
    pub async fn poll_once(&mut self, cancel: &CancellationToken) -> Result<(), SpotifyError> {
        let polled = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Ok(()),
            polled = self.source.now_playing() => polled,
        };
        let track = match polled {
            Ok(Some(track)) => track,
            Ok(None) => {
                self.current_track = None;
                self.updates.send_if_modified(|update| {
                    let changed = *update != SessionUpdate::Idle;
                    *update = SessionUpdate::Idle;
                    changed
                });
                return Ok(());
            }
            Err(SpotifyError::Unauthorized) => return Err(SpotifyError::Unauthorized),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to poll currently playing track");
                return Ok(());
            }
        };

        if self.current_track.as_deref() == Some(track.track_id.as_str()) {
            return Ok(());
        }

        tracing::info!(
            track = %track.title,
            artist = %track.artists_display(),
            "Now playing"
        );
        self.current_track = Some(track.track_id.clone());
        self.updates.send_replace(SessionUpdate::Searching(track.clone()));

        let query = TempoQuery::new(
            track.title.clone(),
            track.primary_artist().unwrap_or_default(),
        );
        // Neither the lookup nor the artwork download may outlive a cancel
        let lookups = async {
            tokio::join!(
                self.resolver.resolve_cancellable(&query, cancel),
                self.artwork.palette_for(track.artwork_url.as_deref()),
            )
        };
        let (tempo, palette) = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Ok(()),
            done = lookups => done,
        };
        if cancel.is_cancelled() {
            return Ok(());
        }

        let timing = BeatTiming::from_bpm(tempo.bpm());
        self.updates.send_replace(SessionUpdate::Playing(TrackVisuals {
            track,
            tempo,
            palette,
            timing,
        }));
        Ok(())
    }
}
