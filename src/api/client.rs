use serde::Deserialize;

use crate::model::SignupRequest;

use super::error::RegistrationError;

/// Message used when a failure response carries no `message` field.
const REJECTION_FALLBACK: &str = "Registration failed";

/// Response body of the signup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SignupResponse {
    /// Human-readable outcome message, present on most failure responses.
    #[serde(default)]
    pub message: Option<String>,
}

/// HTTP client for the registration backend.
#[derive(Debug, Clone)]
pub struct SignupClient {
    base_url: String,
    http: reqwest::Client,
}

impl SignupClient {
    /// Creates a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits the signup payload with bearer authentication.
    ///
    /// The response body is awaited and decoded as JSON regardless of the
    /// HTTP status, so a rejection's `message` can be surfaced to the user.
    pub async fn signup(
        &self,
        access_token: &str,
        request: &SignupRequest,
    ) -> Result<SignupResponse, RegistrationError> {
        let url = format!("{}/api/v1/auth/signup", self.base_url);
        tracing::debug!(%url, "sending signup request");

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {access_token}"))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body: SignupResponse = response.json().await?;

        if !status.is_success() {
            let message = body
                .message
                .unwrap_or_else(|| REJECTION_FALLBACK.to_string());
            tracing::warn!(status = %status, %message, "signup rejected");
            return Err(RegistrationError::Rejected(message));
        }
        Ok(body)
    }
}
