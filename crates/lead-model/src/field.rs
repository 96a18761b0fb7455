//! Canonical lead attributes.
//!
//! Source files spell their headers in many ways (`firstName`,
//! `FIRST_NAME`, `First Name`). Every spelling collapses to one of these
//! variants or to nothing at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A recognized lead attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    FirstName,
    LastName,
    Email,
    JobTitle,
    CountryCode,
    CompanyName,
}

impl CanonicalField {
    /// Every canonical field, in record order.
    pub const ALL: [CanonicalField; 6] = [
        CanonicalField::FirstName,
        CanonicalField::LastName,
        CanonicalField::Email,
        CanonicalField::JobTitle,
        CanonicalField::CountryCode,
        CanonicalField::CompanyName,
    ];

    /// Lookup key: lowercase ASCII letters only.
    pub const fn key(&self) -> &'static str {
        match self {
            CanonicalField::FirstName => "firstname",
            CanonicalField::LastName => "lastname",
            CanonicalField::Email => "email",
            CanonicalField::JobTitle => "jobtitle",
            CanonicalField::CountryCode => "countrycode",
            CanonicalField::CompanyName => "companyname",
        }
    }

    /// Header spelling used when writing files and JSON.
    pub const fn header_name(&self) -> &'static str {
        match self {
            CanonicalField::FirstName => "firstName",
            CanonicalField::LastName => "lastName",
            CanonicalField::Email => "email",
            CanonicalField::JobTitle => "jobTitle",
            CanonicalField::CountryCode => "countryCode",
            CanonicalField::CompanyName => "companyName",
        }
    }

    /// Returns true for the fields every lead must carry.
    pub const fn is_required(&self) -> bool {
        matches!(
            self,
            CanonicalField::FirstName | CanonicalField::LastName | CanonicalField::Email
        )
    }

    /// Resolve an already-normalized key (see [`CanonicalField::key`]).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_name())
    }
}

impl FromStr for CanonicalField {
    type Err = String;

    /// Parse a field from its key or header spelling (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::from_key(&normalized).ok_or_else(|| format!("Unknown lead field: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_letters_only() {
        for field in CanonicalField::ALL {
            assert!(field.key().chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(
            CanonicalField::from_key("countrycode"),
            Some(CanonicalField::CountryCode)
        );
        assert_eq!(CanonicalField::from_key("countryCode"), None);
        assert_eq!(CanonicalField::from_key("phone"), None);
    }

    #[test]
    fn test_from_str_accepts_header_spelling() {
        assert_eq!(
            "jobTitle".parse::<CanonicalField>(),
            Ok(CanonicalField::JobTitle)
        );
        assert!("job_title".parse::<CanonicalField>().is_err());
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = CanonicalField::ALL
            .into_iter()
            .filter(CanonicalField::is_required)
            .collect();
        assert_eq!(
            required,
            vec![
                CanonicalField::FirstName,
                CanonicalField::LastName,
                CanonicalField::Email
            ]
        );
    }
}
