/// Errors surfaced by the signup flow.
///
/// The `Display` strings feed the failure alert directly.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// The identity session produced no usable access token.
    #[error("Authentication token not available")]
    TokenUnavailable,

    /// The server rejected the signup; carries the server-supplied message
    /// or the generic fallback when the response had none.
    #[error("{0}")]
    Rejected(String),

    /// The request could not be completed or the response body was not
    /// valid JSON.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
}
