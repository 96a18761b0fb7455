//! Lead data model shared by every stage of the intake pipeline.
//!
//! # Module Organization
//!
//! - [`field`]: The closed set of canonical lead attributes
//! - [`row`]: Raw header/cell rows produced by the tokenizer
//! - [`lead`]: Normalized and validated lead records
//! - [`status`]: Tri-state row classification
//! - [`messages`]: Error and warning texts consumed verbatim by UIs
//! - [`redact`]: Switch controlling whether lead values reach log output
//!
//! # Example
//!
//! ```
//! use lead_model::{NormalizedLead, ValidatedLead, ValidationStatus};
//!
//! let lead = NormalizedLead {
//!     first_name: "John".to_string(),
//!     last_name: "Doe".to_string(),
//!     email: "john@example.com".to_string(),
//!     row_index: 2,
//!     ..NormalizedLead::default()
//! };
//!
//! let validated = ValidatedLead::new(lead, Vec::new(), Vec::new());
//! assert_eq!(validated.status(), ValidationStatus::Valid);
//! ```

pub mod field;
pub mod lead;
pub mod messages;
pub mod redact;
pub mod row;
pub mod status;

pub use field::CanonicalField;
pub use lead::{NormalizedLead, ValidatedLead};
pub use messages::{
    ERROR_EMAIL_REQUIRED, ERROR_FIRST_NAME_REQUIRED, ERROR_INVALID_EMAIL_FORMAT,
    ERROR_LAST_NAME_REQUIRED, WARNING_INVALID_COUNTRY_CODE,
};
pub use row::RawRow;
pub use status::ValidationStatus;
