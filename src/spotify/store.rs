//! Session file holding the pending PKCE verifier and the access token.
//!
//! Stored as TOML in the config directory. Plain text on purpose: the token
//! only grants read access to playback state.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::SpotifyError;

/// Contents of the session file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredSession {
    /// Verifier created by `login`, consumed by `callback`
    pub code_verifier: Option<String>,
    pub access_token: Option<String>,
    pub obtained_at: Option<DateTime<Utc>>,
    /// Lifetime in seconds as reported by the token endpoint
    pub expires_in: Option<u64>,
}

impl StoredSession {
    /// True once the token's reported lifetime has passed.
    ///
    /// A token without timing information is assumed valid; the API will
    /// answer 401 if it isn't.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let (Some(obtained), Some(secs)) = (self.obtained_at, self.expires_in) else {
            return false;
        };
        let Some(lifetime) = i64::try_from(secs).ok().and_then(Duration::try_seconds) else {
            return false;
        };
        obtained
            .checked_add_signed(lifetime)
            .is_some_and(|expiry| now >= expiry)
    }

    /// Access token if present and not expired
    pub fn valid_token(&self, now: DateTime<Utc>) -> Option<&str> {
        if self.is_expired(now) {
            return None;
        }
        self.access_token.as_deref()
    }
}

/// Reads and writes the session file
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the standard config directory
    pub fn default_location() -> Option<Self> {
        crate::config::config_dir().map(|dir| Self::new(dir.join("session.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session; a missing file is an empty session
    pub fn load(&self) -> Result<StoredSession, SpotifyError> {
        if !self.path.exists() {
            return Ok(StoredSession::default());
        }
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| SpotifyError::Store(format!("read {:?}: {}", self.path, e)))?;
        toml::from_str(&contents)
            .map_err(|e| SpotifyError::Store(format!("parse {:?}: {}", self.path, e)))
    }

    /// Write atomically (temp file, then rename)
    pub fn save(&self, session: &StoredSession) -> Result<(), SpotifyError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| SpotifyError::Store(format!("create {:?}: {}", dir, e)))?;
        }
        let contents = toml::to_string_pretty(session)
            .map_err(|e| SpotifyError::Store(format!("serialize: {}", e)))?;

        let temp_path = self.path.with_extension("toml.tmp");
        std::fs::write(&temp_path, contents)
            .map_err(|e| SpotifyError::Store(format!("write {:?}: {}", temp_path, e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| SpotifyError::Store(format!("rename {:?}: {}", temp_path, e)))?;

        tracing::debug!("Saved session to {:?}", self.path);
        Ok(())
    }

    /// Remove the session file if it exists
    pub fn clear(&self) -> Result<(), SpotifyError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SpotifyError::Store(format!("remove {:?}: {}", self.path, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.toml"));
        assert_eq!(store.load().unwrap(), StoredSession::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.toml"));
        let session = StoredSession {
            code_verifier: None,
            access_token: Some("tok".to_string()),
            obtained_at: Some(Utc::now()),
            expires_in: Some(3600),
        };

        store.save(&session).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.access_token.as_deref(), Some("tok"));
        assert_eq!(loaded.expires_in, Some(3600));
        assert!(!store.path().with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.toml"));
        store.save(&StoredSession::default()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_expiry() {
        let obtained = Utc::now();
        let session = StoredSession {
            access_token: Some("tok".to_string()),
            obtained_at: Some(obtained),
            expires_in: Some(60),
            ..Default::default()
        };
        assert_eq!(session.valid_token(obtained + Duration::seconds(59)), Some("tok"));
        assert!(session.is_expired(obtained + Duration::seconds(60)));
        assert_eq!(session.valid_token(obtained + Duration::seconds(61)), None);
    }

    #[test]
    fn test_token_without_timing_never_expires() {
        let session = StoredSession {
            access_token: Some("tok".to_string()),
            ..Default::default()
        };
        assert!(!session.is_expired(Utc::now()));
    }
}
