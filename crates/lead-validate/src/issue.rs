//! Validation issue types.
//!
//! Each rule produces one `Issue` variant. The message text is part of the
//! import contract and must not change.

use std::fmt;

use lead_model::{
    CanonicalField, ERROR_EMAIL_REQUIRED, ERROR_FIRST_NAME_REQUIRED, ERROR_INVALID_EMAIL_FORMAT,
    ERROR_LAST_NAME_REQUIRED, WARNING_INVALID_COUNTRY_CODE,
};
use serde::{Deserialize, Serialize};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks import
    Error,
    /// Importable, but a value will be dropped
    Warning,
}

impl Severity {
    /// Parse severity from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// A single problem found on a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    FirstNameRequired,
    LastNameRequired,
    EmailRequired,
    InvalidEmailFormat,
    /// Country code present but unknown; carries the offending value.
    InvalidCountryCode { value: String },
}

impl Issue {
    /// The "required" issue for a required field.
    pub fn required(field: CanonicalField) -> Option<Self> {
        match field {
            CanonicalField::FirstName => Some(Self::FirstNameRequired),
            CanonicalField::LastName => Some(Self::LastNameRequired),
            CanonicalField::Email => Some(Self::EmailRequired),
            CanonicalField::JobTitle | CanonicalField::CountryCode | CanonicalField::CompanyName => {
                None
            }
        }
    }

    /// Field the issue is about.
    pub fn field(&self) -> CanonicalField {
        match self {
            Self::FirstNameRequired => CanonicalField::FirstName,
            Self::LastNameRequired => CanonicalField::LastName,
            Self::EmailRequired | Self::InvalidEmailFormat => CanonicalField::Email,
            Self::InvalidCountryCode { .. } => CanonicalField::CountryCode,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::InvalidCountryCode { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::FirstNameRequired => ERROR_FIRST_NAME_REQUIRED,
            Self::LastNameRequired => ERROR_LAST_NAME_REQUIRED,
            Self::EmailRequired => ERROR_EMAIL_REQUIRED,
            Self::InvalidEmailFormat => ERROR_INVALID_EMAIL_FORMAT,
            Self::InvalidCountryCode { .. } => WARNING_INVALID_COUNTRY_CODE,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse(" Warning "), Some(Severity::Warning));
        assert_eq!(Severity::parse("ERROR"), Some(Severity::Error));
        assert_eq!(Severity::parse("reject"), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(Issue::FirstNameRequired.message(), "First name is required");
        assert_eq!(Issue::LastNameRequired.message(), "Last name is required");
        assert_eq!(Issue::EmailRequired.message(), "Email is required");
        assert_eq!(Issue::InvalidEmailFormat.message(), "Invalid email format");
        let country = Issue::InvalidCountryCode {
            value: "ZZ".into(),
        };
        assert_eq!(
            country.to_string(),
            "Invalid country code (will be left empty)"
        );
        assert_eq!(country.severity(), Severity::Warning);
        assert_eq!(country.field(), CanonicalField::CountryCode);
    }

    #[test]
    fn test_required_only_for_required_fields() {
        for field in CanonicalField::ALL {
            assert_eq!(Issue::required(field).is_some(), field.is_required());
        }
    }
}
