//! Lead validation and classification.
//!
//! Runs a fixed, ordered set of checks over a [`NormalizedLead`]:
//!
//! - **Required fields**: first name, last name and email must be present
//! - **Email shape**: `local@domain.tld`, no whitespace
//! - **Country code**: when present, a known ISO 3166-1 code (warning only)
//!
//! Errors block import; warnings do not. Validation itself never fails.
//!
//! # Example
//!
//! ```
//! use lead_model::{NormalizedLead, ValidationStatus};
//! use lead_standards::default_registry;
//! use lead_validate::validate;
//!
//! let lead = NormalizedLead {
//!     first_name: "Jane".to_string(),
//!     last_name: "Smith".to_string(),
//!     email: "invalid-email".to_string(),
//!     row_index: 3,
//!     ..NormalizedLead::default()
//! };
//!
//! let validated = validate(lead, default_registry());
//! assert_eq!(validated.status(), ValidationStatus::Invalid);
//! assert_eq!(validated.errors(), ["Invalid email format"]);
//! ```
//!
//! [`NormalizedLead`]: lead_model::NormalizedLead

mod checks;
mod issue;

use lead_model::{NormalizedLead, ValidatedLead};
use lead_standards::CountryLookup;

pub use checks::email::is_valid_email;
pub use issue::{Issue, Severity};

/// Collect every issue on a lead, in rule order.
pub fn check_lead<C>(lead: &NormalizedLead, countries: &C) -> Vec<Issue>
where
    C: CountryLookup + ?Sized,
{
    let mut issues = checks::required::check(lead);
    issues.extend(checks::email::check(lead));
    issues.extend(checks::country::check(lead, countries));
    issues
}

/// Validate and classify one lead.
pub fn validate<C>(lead: NormalizedLead, countries: &C) -> ValidatedLead
where
    C: CountryLookup + ?Sized,
{
    let (errors, warnings): (Vec<Issue>, Vec<Issue>) = check_lead(&lead, countries)
        .into_iter()
        .partition(|issue| issue.severity() == Severity::Error);

    if !errors.is_empty() {
        tracing::trace!(
            row = lead.row_index,
            errors = errors.len(),
            "Lead failed validation"
        );
    }

    ValidatedLead::new(lead, messages(&errors), messages(&warnings))
}

/// Validate leads in order.
pub fn validate_all<C>(leads: Vec<NormalizedLead>, countries: &C) -> Vec<ValidatedLead>
where
    C: CountryLookup + ?Sized,
{
    leads
        .into_iter()
        .map(|lead| validate(lead, countries))
        .collect()
}

fn messages(issues: &[Issue]) -> Vec<String> {
    issues
        .iter()
        .map(|issue| issue.message().to_string())
        .collect()
}
