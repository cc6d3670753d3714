mod signup;
mod validation;

pub use signup::SignupRequest;
pub use validation::{ValidationError, validate_college_name, validate_email, validate_name};
