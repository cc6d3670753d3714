use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::{IdentityError, IdentityProvider, UserProfile};

/// On-disk shape of the identity session.
///
/// Written by the platform's sign-in flow; this client reads it, checks
/// token freshness, and merges metadata back into it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    profile: UserProfile,
    access_token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    metadata: serde_json::Map<String, serde_json::Value>,
}

/// File-backed identity session.
///
/// A missing session file is not an error: the app still starts, the form
/// simply has nothing to prefill and submission aborts with the
/// token-unavailable alert.
pub struct SessionStore {
    path: PathBuf,
    session: RwLock<SessionFile>,
}

impl SessionStore {
    /// Loads the session from the XDG data directory
    /// (`~/.local/share/enroll/session.json`).
    pub fn load() -> Result<Self, IdentityError> {
        let data_dir = dirs::data_dir().ok_or(IdentityError::NoDataDir)?;
        let path = data_dir.join("enroll").join("session.json");
        Self::load_from(path)
    }

    /// Loads the session from an explicit path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, IdentityError> {
        let path = path.into();
        let session = read_session(&path)?;
        Ok(Self {
            path,
            session: RwLock::new(session),
        })
    }

    async fn persist(&self, session: &SessionFile) -> Result<(), IdentityError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }
}

fn read_session(path: &Path) -> Result<SessionFile, IdentityError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "no identity session file; starting signed out");
        return Ok(SessionFile::default());
    }
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

#[async_trait]
impl IdentityProvider for SessionStore {
    async fn profile(&self) -> UserProfile {
        self.session.read().await.profile.clone()
    }

    async fn access_token(&self) -> Option<String> {
        let session = self.session.read().await;
        let token = session.access_token.clone()?;
        if token.is_empty() {
            return None;
        }
        if let Some(expires_at) = session.expires_at
            && expires_at <= Utc::now()
        {
            tracing::debug!(%expires_at, "access token expired");
            return None;
        }
        Some(token)
    }

    async fn update_metadata(
        &self,
        entries: serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), IdentityError> {
        let mut session = self.session.write().await;
        for (key, value) in entries {
            session.metadata.insert(key, value);
        }
        self.persist(&session).await
    }

    async fn reload(&self) -> Result<(), IdentityError> {
        let fresh = read_session(&self.path)?;
        *self.session.write().await = fresh;
        Ok(())
    }
}
