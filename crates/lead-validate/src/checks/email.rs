//! Email shape check.

use std::sync::LazyLock;

use lead_model::NormalizedLead;
use regex::Regex;

use crate::issue::Issue;

/// One `@`, no whitespace, and at least one dot after the `@`.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Returns true if `email` has the shape `local@domain.tld`.
///
/// This is a shape check only; deliverability is out of scope.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check a present email is well formed. Absence is reported by the
/// required check.
pub fn check(lead: &NormalizedLead) -> Option<Issue> {
    let email = lead.email.trim();
    (!email.is_empty() && !is_valid_email(email)).then_some(Issue::InvalidEmailFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_shapes() {
        for email in ["john@example.com", "a.b+c@sub.example.co.uk", "x@y.z"] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_invalid_shapes() {
        for email in [
            "invalid-email",
            "john@example",
            "@example.com",
            "john@.com.",
            "john doe@example.com",
            "john@@example.com",
            "john@exa mple.com",
            "",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_empty_email_is_not_a_format_issue() {
        assert_eq!(check(&NormalizedLead::default()), None);
        let lead = NormalizedLead {
            email: "nope".into(),
            ..NormalizedLead::default()
        };
        assert_eq!(check(&lead), Some(Issue::InvalidEmailFormat));
    }
}
