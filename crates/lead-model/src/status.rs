//! Tri-state row classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of validating one lead.
///
/// Always derived from the accumulated messages, never set by hand:
/// any error makes the row `Invalid`, otherwise any warning makes it
/// `Warning`, otherwise it is `Valid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// Safe to persist as-is.
    Valid,
    /// Safe to persist, some field will be dropped.
    Warning,
    /// Blocked until the user corrects the row.
    Invalid,
}

impl ValidationStatus {
    /// Derive the status from the error and warning lists.
    pub fn derive<E, W>(errors: &[E], warnings: &[W]) -> Self {
        if !errors.is_empty() {
            Self::Invalid
        } else if !warnings.is_empty() {
            Self::Warning
        } else {
            Self::Valid
        }
    }

    /// Wire value (`valid`, `warning`, `invalid`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Warning => "warning",
            Self::Invalid => "invalid",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Valid => "Valid",
            Self::Warning => "Warning",
            Self::Invalid => "Invalid",
        }
    }

    /// Rows that downstream importers may persist.
    pub const fn is_importable(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "valid" => Ok(Self::Valid),
            "warning" => Ok(Self::Warning),
            "invalid" => Ok(Self::Invalid),
            _ => Err(format!("Unknown validation status: {s}")),
        }
    }
}
