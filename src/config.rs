//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\pulsegroove\config.toml
//! - macOS: ~/Library/Application Support/pulsegroove/config.toml
//! - Linux: ~/.config/pulsegroove/config.toml
//!
//! The file is human-readable and editable. Environment variables and CLI
//! flags override whatever it contains (see `cli`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::tempo::ProviderId;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials (keep separate for potential future encryption)
    pub credentials: Credentials,

    /// Spotify login and polling
    pub spotify: SpotifyConfig,

    /// Tempo lookup
    pub tempo: TempoConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// GetSongBPM key; the provider is skipped without one
    pub getsongbpm_api_key: Option<String>,

    /// TheAudioDB key; the public test key is used when unset
    pub theaudiodb_api_key: Option<String>,

    /// Client id of the Spotify app used for PKCE login
    pub spotify_client_id: Option<String>,
}

/// Spotify settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotifyConfig {
    /// Must match a redirect URI registered for the Spotify app
    pub redirect_uri: String,

    /// Seconds between currently-playing polls
    pub poll_interval_secs: u64,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            redirect_uri: "http://127.0.0.1:8888/callback".to_string(),
            poll_interval_secs: 3,
        }
    }
}

/// Tempo lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TempoConfig {
    /// Upper bound for one provider attempt, in seconds
    pub request_timeout_secs: u64,

    /// Providers never consulted, e.g. `["getsongbpm"]`
    pub disabled_providers: Vec<ProviderId>,
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: crate::http::DEFAULT_TIMEOUT.as_secs(),
            disabled_providers: Vec::new(),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pulsegroove"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load from an explicit path, same fallbacks as [`load`]
pub fn load_from(path: &std::path::Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to `path`
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================
