//! Which providers may be queried, and with which credentials.
//!
//! Built once at startup from the application config and handed to
//! [`TempoResolver::from_config`](super::TempoResolver::from_config); nothing
//! in the tempo module reads the environment itself.

use std::time::Duration;

use super::domain::ProviderId;
use super::theaudiodb::PUBLIC_API_KEY;
use crate::config::Config;

/// Provider enablement and credentials
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub getsongbpm_api_key: Option<String>,
    pub theaudiodb_api_key: Option<String>,
    /// Providers switched off explicitly
    pub disabled: Vec<ProviderId>,
    /// Upper bound for one provider attempt
    pub attempt_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            getsongbpm_api_key: None,
            theaudiodb_api_key: None,
            disabled: Vec::new(),
            attempt_timeout: crate::http::DEFAULT_TIMEOUT,
        }
    }
}

impl ProviderConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            getsongbpm_api_key: non_empty(&config.credentials.getsongbpm_api_key),
            theaudiodb_api_key: non_empty(&config.credentials.theaudiodb_api_key),
            disabled: config.tempo.disabled_providers.clone(),
            attempt_timeout: Duration::from_secs(config.tempo.request_timeout_secs.max(1)),
        }
    }

    /// Whether the resolver should consult `provider` at all.
    pub fn is_enabled(&self, provider: ProviderId) -> bool {
        if self.disabled.contains(&provider) {
            return false;
        }
        match provider {
            ProviderId::Deezer => true,
            ProviderId::GetSongBpm => self.getsongbpm_api_key.is_some(),
            ProviderId::TheAudioDb => true,
        }
    }

    /// Enabled providers in priority order
    pub fn enabled_providers(&self) -> Vec<ProviderId> {
        ProviderId::PRIORITY
            .into_iter()
            .filter(|id| self.is_enabled(*id))
            .collect()
    }

    /// Key for TheAudioDB, falling back to the public test key
    pub fn theaudiodb_key(&self) -> &str {
        self.theaudiodb_api_key.as_deref().unwrap_or(PUBLIC_API_KEY)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
