//! CLI command definitions and dispatch.
//!
//! Each group of subcommands is implemented in its own submodule:
//! - `tempo`: one-off BPM lookup
//! - `auth`: Spotify PKCE login, callback and logout
//! - `playback`: currently playing track and the live session
//! - `palette`: artwork palette extraction

mod auth;
mod palette;
mod playback;
mod tempo;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::error::{Error, ResultExt};
use crate::spotify::{SessionStore, SpotifyClient, SpotifyError};

pub use auth::{cmd_callback, cmd_login, cmd_logout};
pub use palette::cmd_palette;
pub use playback::{cmd_live, cmd_now_playing};
pub use tempo::cmd_bpm;

/// PulseGroove CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Settings that override the config file
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// Config file to use instead of the standard location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// GetSongBPM API key
    #[arg(long, global = true, env = "GETSONGBPM_API_KEY", hide_env_values = true)]
    pub getsongbpm_api_key: Option<String>,

    /// TheAudioDB API key (public test key when unset)
    #[arg(long, global = true, env = "THEAUDIODB_API_KEY", hide_env_values = true)]
    pub theaudiodb_api_key: Option<String>,

    /// Spotify app client id
    #[arg(long, global = true, env = "SPOTIFY_CLIENT_ID")]
    pub spotify_client_id: Option<String>,

    /// Redirect URI registered for the Spotify app
    #[arg(long, global = true, env = "SPOTIFY_REDIRECT_URI")]
    pub spotify_redirect_uri: Option<String>,
}

impl Overrides {
    /// Overlay flags and environment onto a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(key) = &self.getsongbpm_api_key {
            config.credentials.getsongbpm_api_key = Some(key.clone());
        }
        if let Some(key) = &self.theaudiodb_api_key {
            config.credentials.theaudiodb_api_key = Some(key.clone());
        }
        if let Some(id) = &self.spotify_client_id {
            config.credentials.spotify_client_id = Some(id.clone());
        }
        if let Some(uri) = &self.spotify_redirect_uri {
            config.spotify.redirect_uri = uri.clone();
        }
    }
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Write the effective configuration (file plus overrides) to disk
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Look up the tempo of a track
    Bpm {
        /// Track title
        #[arg(short, long)]
        track: String,
        /// Artist name
        #[arg(short, long)]
        artist: String,
        /// Per-provider timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Start Spotify login and print the authorization URL
    Login,
    /// Finish Spotify login with the code from the redirect
    Callback {
        /// Authorization code, or the whole redirect URL
        #[arg(long)]
        code: String,
    },
    /// Forget the stored Spotify session
    Logout,
    /// Show the current track with its tempo, palette and timing
    NowPlaying {
        /// Print the update as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract the color palette of an image
    Palette {
        /// Image URL or local file path
        source: String,
    },
    /// Follow playback and print visual updates until Ctrl-C
    Live {
        /// Print one JSON object per update
        #[arg(long)]
        json: bool,
    },
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was specified.
pub fn run_command(cli: &Cli) -> anyhow::Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    let config = load_config(&cli.overrides);
    let rt = Runtime::new()?;

    match command {
        Commands::Init { force } => cmd_init(&config, cli.overrides.config.as_deref(), *force)?,
        Commands::Bpm {
            track,
            artist,
            timeout,
        } => cmd_bpm(&rt, &config, track, artist, *timeout)?,
        Commands::Login => cmd_login(&config)?,
        Commands::Callback { code } => cmd_callback(&rt, &config, code)?,
        Commands::Logout => cmd_logout()?,
        Commands::NowPlaying { json } => cmd_now_playing(&rt, &config, *json)?,
        Commands::Palette { source } => cmd_palette(&rt, source)?,
        Commands::Live { json } => cmd_live(&rt, &config, *json)?,
    }
    Ok(true)
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Save the effective config so later runs don't need flags
pub fn cmd_init(
    config: &Config,
    path: Option<&std::path::Path>,
    force: bool,
) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config::config_path().ok_or(config::ConfigError::NoConfigDir)?,
    };
    if path.exists() && !force {
        println!("Config already exists at {:?} (use --force to overwrite)", path);
        return Ok(());
    }
    config::save_to(config, &path).map_err(Error::from)?;
    println!("✓ Wrote {:?}", path);
    Ok(())
}

/// Config file plus flag and environment overrides
pub(crate) fn load_config(overrides: &Overrides) -> Config {
    let mut config = match &overrides.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    overrides.apply(&mut config);
    config
}

/// The session file in the standard location
pub(crate) fn session_store() -> crate::error::Result<SessionStore> {
    SessionStore::default_location()
        .ok_or_else(|| Error::config("could not determine config directory"))
}

/// Spotify client for the configured app
pub(crate) fn spotify_client(
    config: &Config,
    http_client: reqwest::Client,
) -> crate::error::Result<SpotifyClient> {
    let client_id = config
        .credentials
        .spotify_client_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(SpotifyError::MissingClientId)?;
    Ok(SpotifyClient::new(
        http_client,
        client_id,
        config.spotify.redirect_uri.clone(),
    ))
}

/// Stored access token, if still valid
pub(crate) fn access_token(store: &SessionStore) -> crate::error::Result<String> {
    let session = store.load().with_context("loading Spotify session")?;
    session
        .valid_token(chrono::Utc::now())
        .map(String::from)
        .ok_or(Error::Spotify(SpotifyError::NotLoggedIn))
}
