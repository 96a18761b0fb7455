//! Row-level message texts.
//!
//! Import UIs key on these exact strings, so they are part of the public
//! contract and must not be reworded.

pub const ERROR_FIRST_NAME_REQUIRED: &str = "First name is required";
pub const ERROR_LAST_NAME_REQUIRED: &str = "Last name is required";
pub const ERROR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERROR_INVALID_EMAIL_FORMAT: &str = "Invalid email format";
pub const WARNING_INVALID_COUNTRY_CODE: &str = "Invalid country code (will be left empty)";
