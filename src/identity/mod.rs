//! Identity session: cached profile, access token, and user metadata.
//!
//! The sign-in flow itself belongs to the platform tooling; this crate
//! only consumes the session it leaves behind. [`IdentityProvider`] is the
//! seam the submission flow talks to, [`SessionStore`] the file-backed
//! implementation.

mod session;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use session::SessionStore;

/// Errors that can occur while reading or writing the identity session.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// An I/O error occurred while reading or writing the session file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session file contains invalid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,
}

/// Profile fields cached by the identity session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: Option<String>,
    pub given_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UserProfile {
    /// Best display name: full name when present, else given name.
    pub fn display_name(&self) -> Option<&str> {
        self.full_name.as_deref().or(self.given_name.as_deref())
    }
}

/// Contract with the identity session backing the signup flow.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Cached profile of the signed-in user.
    async fn profile(&self) -> UserProfile;

    /// Current access token, or `None` when the session holds no usable
    /// token (absent, expired, or unreadable).
    async fn access_token(&self) -> Option<String>;

    /// Merges the given entries into the user metadata bag and persists.
    async fn update_metadata(
        &self,
        entries: serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), IdentityError>;

    /// Re-reads the session from its backing store.
    async fn reload(&self) -> Result<(), IdentityError>;
}
