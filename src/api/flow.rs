use crate::identity::IdentityProvider;
use crate::model::SignupRequest;

use super::client::SignupClient;
use super::error::RegistrationError;

/// Runs one signup submission end to end.
///
/// Strictly sequential: token fetch, then the HTTP call, then the
/// best-effort metadata sync. The metadata sync runs only after a
/// successful response, and its failures are logged and swallowed —
/// registration is already committed server-side at that point.
pub async fn submit_registration(
    identity: &dyn IdentityProvider,
    client: &SignupClient,
    request: &SignupRequest,
) -> Result<(), RegistrationError> {
    let Some(token) = identity.access_token().await else {
        return Err(RegistrationError::TokenUnavailable);
    };

    client.signup(&token, request).await?;

    let mut entries = serde_json::Map::new();
    entries.insert("registered".to_string(), serde_json::Value::Bool(true));
    if let Err(e) = identity.update_metadata(entries).await {
        tracing::warn!(error = %e, "failed to update user metadata after signup");
    } else if let Err(e) = identity.reload().await {
        tracing::warn!(error = %e, "failed to reload identity session after signup");
    }
    Ok(())
}
