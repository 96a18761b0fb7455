//! Required field checks.
//!
//! First name, last name and email must be non-empty after trimming.

use lead_model::{CanonicalField, NormalizedLead};

use crate::issue::Issue;

/// Check every required field is populated.
pub fn check(lead: &NormalizedLead) -> Vec<Issue> {
    CanonicalField::ALL
        .into_iter()
        .filter(|field| field.is_required())
        .filter(|field| lead.value(*field).is_none_or(|value| value.trim().is_empty()))
        .filter_map(Issue::required)
        .collect()
}
