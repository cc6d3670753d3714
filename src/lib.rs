#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal signup client for campus community accounts.
//!
//! Completes the signed-in user's profile: collects name, email, college,
//! and optional contact details, validates them, submits them to the
//! registration backend with a bearer token from the local identity
//! session, and marks the session as registered on success.

pub mod api;
pub mod config;
pub mod identity;
pub mod model;
pub mod tui;
