//! Signup backend: HTTP client and submission flow.

mod client;
mod error;
mod flow;

pub use client::{SignupClient, SignupResponse};
pub use error::RegistrationError;
pub use flow::submit_registration;
