use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Validation errors for registration form fields.
///
/// The `Display` strings are shown verbatim as inline field errors, so
/// they are phrased for the user rather than for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("College name is required")]
    CollegeRequired,
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.\S+$").expect("valid hardcoded regex"));

/// Validates a name: must be non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::NameRequired)
    } else {
        Ok(())
    }
}

/// Validates an email address.
///
/// Must be non-empty after trimming and match local-part `@` domain `.`
/// tld, where the local part and domain contain no whitespace or `@`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        Err(ValidationError::EmailRequired)
    } else if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates a college name: must be non-empty after trimming.
pub fn validate_college_name(college: &str) -> Result<(), ValidationError> {
    if college.trim().is_empty() {
        Err(ValidationError::CollegeRequired)
    } else {
        Ok(())
    }
}
