//! Stored user session.
//!
//! The backend has no credential check: "logging in" looks up a user id and
//! remembers it. The id is kept in ${RFX_HOME}/session.toml and read by
//! every command that acts on behalf of a user.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// The active user session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Backend user id.
    pub user_id: String,
    /// Display name, cached from the lookup at login time.
    pub name: String,
    /// Email, cached from the lookup at login time.
    pub email: String,
}

impl Session {
    /// Loads the session from the default path.
    ///
    /// # Errors
    /// Returns an error if no session is stored (not logged in) or the file
    /// cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::session_path())
    }

    /// Loads the session from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Not logged in. Run `rfx login <user-id>` first.");
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", path.display()))
    }

    /// Saves the session to the default path, creating RFX_HOME if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::session_path())
    }

    /// Saves the session to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize session")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write session to {}", path.display()))
    }

    /// Removes the stored session, if any.
    pub fn clear() -> Result<()> {
        let path = paths::session_path();
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let session = Session {
            user_id: "usr_42".to_string(),
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
        };
        session.save_to(&path).unwrap();

        let loaded = Session::load_from(&path).unwrap();
        assert_eq!(loaded.user_id, "usr_42");
        assert_eq!(loaded.name, "Dana");
    }

    #[test]
    fn missing_session_reports_login_hint() {
        let dir = tempfile::tempdir().unwrap();
        let err = Session::load_from(&dir.path().join("session.toml")).unwrap_err();
        assert!(err.to_string().contains("rfx login"));
    }
}
