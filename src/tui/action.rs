//! Actions returned by screen event handlers.

use crate::model::SignupRequest;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to navigate between screens and to start
/// the submission task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Start the signup submission for the given payload.
    Submit(SignupRequest),
    /// Quit the application.
    Quit,
}
