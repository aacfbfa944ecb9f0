//! Spotify login (PKCE), callback and logout.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::ResultExt;
use crate::http;
use crate::spotify::{SessionStore, SpotifyError, StoredSession, authorize_url, pkce};

use super::{session_store, spotify_client};

/// Create a verifier, remember it, and print where to authorize
pub fn cmd_login(config: &Config) -> anyhow::Result<()> {
    let client_id = config
        .credentials
        .spotify_client_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(SpotifyError::MissingClientId)?;

    let store = session_store()?;
    let verifier = pkce::generate_code_verifier(pkce::MAX_VERIFIER_LEN);
    let challenge = pkce::code_challenge(&verifier);

    store
        .save(&pending_login(&store, verifier))
        .with_context("saving login state")?;

    println!("Open this URL in your browser and approve access:");
    println!();
    println!(
        "  {}",
        authorize_url(client_id, &config.spotify.redirect_uri, &challenge)
    );
    println!();
    println!("Then run: pulsegroove callback --code <code from the redirect URL>");
    Ok(())
}

/// Stored session with a fresh verifier; an unreadable file is replaced
fn pending_login(store: &SessionStore, verifier: String) -> StoredSession {
    let previous = match store.load() {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, path = ?store.path(), "Ignoring unreadable session file");
            StoredSession::default()
        }
    };
    StoredSession {
        code_verifier: Some(verifier),
        ..previous
    }
}

/// Exchange the authorization code and store the token
pub fn cmd_callback(rt: &Runtime, config: &Config, code: &str) -> anyhow::Result<()> {
    let store = session_store()?;
    let session = store.load().with_context("loading login state")?;
    let verifier = session.code_verifier.ok_or(SpotifyError::MissingVerifier)?;
    let code = extract_code(code);

    rt.block_on(async {
        let client = spotify_client(config, http::build_client(http::DEFAULT_TIMEOUT)?)?;
        let token = client.exchange_code(code, &verifier).await?;

        store
            .save(&StoredSession {
                code_verifier: None,
                access_token: Some(token.access_token),
                obtained_at: Some(chrono::Utc::now()),
                expires_in: token.expires_in,
            })
            .with_context("saving Spotify session")?;

        tracing::info!(expires_in = ?token.expires_in, "Spotify login complete");
        println!("✓ Logged in to Spotify");
        Ok(())
    })
}

/// Remove the stored session
pub fn cmd_logout() -> anyhow::Result<()> {
    let store = session_store()?;
    store.clear().with_context("clearing Spotify session")?;
    println!("Logged out");
    Ok(())
}

/// Accept either the bare code or the full redirect URL it came in
fn extract_code(input: &str) -> &str {
    let input = input.trim();
    let Some((_, query)) = input.split_once('?') else {
        return input;
    };
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("code="))
        .unwrap_or(input)
}
