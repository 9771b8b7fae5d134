//! Client-side login session.
//!
//! Holds the bearer token and current user between CLI invocations, the way
//! a browser client keeps them in local storage.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ClientConfig;
use crate::models::UserData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub server_url: String,
    pub token: String,
    pub user: UserData,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `client.session_path`, else `<config dir>/catnip/session.toml`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        if let Some(path) = &config.session_path {
            return Ok(Self::new(PathBuf::from(path)));
        }

        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(Self::new(dir.join("catnip").join("session.toml")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session file: {}", self.path.display()))?;

        let session = toml::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {}", self.path.display()))?;

        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(session)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write session file: {}", self.path.display()))?;
        debug!("Session saved to: {}", self.path.display());
        Ok(())
    }

    /// Removes the stored session. Returns whether one existed.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove session file: {}", self.path.display()))?;
        Ok(true)
    }

    pub fn current_user(&self) -> Result<Option<UserData>> {
        Ok(self.load()?.map(|s| s.user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> SessionStore {
        SessionStore::new(
            std::env::temp_dir()
                .join(format!("catnip-session-test-{}", uuid::Uuid::new_v4()))
                .join("session.toml"),
        )
    }

    #[test]
    fn test_save_load_clear() {
        let store = temp_store();
        assert!(store.load().unwrap().is_none());
        assert!(store.current_user().unwrap().is_none());

        let session = Session {
            server_url: "http://localhost:3000/".to_string(),
            token: "deadbeef".to_string(),
            user: UserData {
                id: 2,
                username: "tariq".to_string(),
            },
        };
        store.save(&session).unwrap();

        assert_eq!(store.load().unwrap(), Some(session.clone()));
        assert_eq!(store.current_user().unwrap(), Some(session.user));

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
        assert!(store.load().unwrap().is_none());

        let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
    }

    #[test]
    fn test_from_config_prefers_explicit_path() {
        let config = ClientConfig {
            session_path: Some("/tmp/custom-session.toml".to_string()),
            ..ClientConfig::default()
        };
        let store = SessionStore::from_config(&config).unwrap();
        assert_eq!(store.path(), Path::new("/tmp/custom-session.toml"));
    }
}
