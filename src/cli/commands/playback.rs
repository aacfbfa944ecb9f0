//! Currently playing track and the live session.

use std::time::Duration;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::http;
use crate::palette::{ArtworkFetcher, SwatchRole};
use crate::session::{LiveSession, SessionUpdate, SpotifySource, TrackVisuals};
use crate::tempo::{ProviderConfig, TempoResolver};

use super::{access_token, session_store, spotify_client};

/// Poll once and print what the visuals would show
pub fn cmd_now_playing(rt: &Runtime, config: &Config, json: bool) -> anyhow::Result<()> {
    let token = access_token(&session_store()?)?;

    rt.block_on(async {
        let mut session = build_session(config, token)?;
        let updates = session.subscribe();
        session.poll_once(&CancellationToken::new()).await?;

        let update = updates.borrow().clone();
        match update {
            SessionUpdate::Starting if !json => {
                println!("Could not reach Spotify, see log for details")
            }
            update => println!("{}", format_update(&update, json)?),
        }
        Ok(())
    })
}

/// Follow playback until Ctrl-C, printing each change
pub fn cmd_live(rt: &Runtime, config: &Config, json: bool) -> anyhow::Result<()> {
    let token = access_token(&session_store()?)?;

    rt.block_on(async {
        let mut session = build_session(config, token)?;
        let cancel = CancellationToken::new();

        let on_ctrl_c = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl-C received, stopping");
                on_ctrl_c.cancel();
            }
        });

        let mut updates = session.subscribe();
        let printer = tokio::spawn(async move {
            while updates.changed().await.is_ok() {
                let update = updates.borrow_and_update().clone();
                match format_update(&update, json) {
                    Ok(line) => println!("{}", line),
                    Err(e) => tracing::warn!(error = %e, "Failed to format update"),
                }
            }
        });

        if !json {
            println!("Following Spotify playback (Ctrl-C to stop)...");
        }
        let outcome = session.run(cancel).await;

        // Dropping the session closes the channel and ends the printer
        drop(session);
        if let Err(e) = printer.await {
            tracing::warn!(error = %e, "Update printer failed");
        }

        outcome?;
        Ok(())
    })
}

fn build_session(config: &Config, access_token: String) -> crate::error::Result<LiveSession> {
    let providers = ProviderConfig::from_config(config);
    let http_client = http::build_client(providers.attempt_timeout)?;

    let source = SpotifySource::new(spotify_client(config, http_client.clone())?, access_token);
    let resolver = TempoResolver::from_config(&providers, http_client.clone());

    Ok(LiveSession::new(
        Box::new(source),
        resolver,
        Box::new(ArtworkFetcher::new(http_client)),
        Duration::from_secs(config.spotify.poll_interval_secs.max(1)),
    ))
}

/// JSON line or human-readable text
fn format_update(update: &SessionUpdate, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(update)
    } else {
        Ok(render(update))
    }
}

/// Terminal rendering of a session update
fn render(update: &SessionUpdate) -> String {
    match update {
        SessionUpdate::Starting => "Starting...".to_string(),
        SessionUpdate::Idle => "Nothing playing".to_string(),
        SessionUpdate::Searching(track) => {
            format!("♪ {} - {} (looking up tempo...)", track.artists_display(), track.title)
        }
        SessionUpdate::Playing(visuals) => render_visuals(visuals),
    }
}

fn render_visuals(visuals: &TrackVisuals) -> String {
    let mut lines = vec![format!(
        "♪ {} - {}{}",
        visuals.track.artists_display(),
        visuals.track.title,
        if visuals.track.is_playing { "" } else { " (paused)" }
    )];

    lines.push(match (visuals.tempo.bpm(), visuals.tempo.source()) {
        (Some(bpm), Some(source)) => format!("  Tempo:  {} BPM ({})", bpm, source),
        _ => "  Tempo:  unknown".to_string(),
    });

    let timing = &visuals.timing;
    lines.push(format!(
        "  Beat:   {}ms{}",
        timing.beat_period.as_millis(),
        if timing.is_synced { "" } else { " (unsynced)" }
    ));

    let swatches: Vec<String> = SwatchRole::ALL
        .iter()
        .map(|role| format!("{}={}", role.name(), visuals.palette.hex_or_default(*role)))
        .collect();
    lines.push(format!("  Colors: {}", swatches.join(" ")));

    lines.join("\n")
}
