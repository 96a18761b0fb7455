//! Normalized and validated lead records.

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;
use crate::status::ValidationStatus;

/// A lead after header mapping and value normalization.
///
/// Required fields are empty strings when the source had no value;
/// emptiness is judged by the validator, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedLead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Alpha-2 when the source held a convertible numeric code,
    /// otherwise the source value unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// 1-based line number: emitted position plus 2.
    pub row_index: usize,
}

impl NormalizedLead {
    /// Value of a canonical field, `None` when absent.
    ///
    /// Required fields report `Some("")` when empty so callers can tell
    /// "present but blank" from "optional and missing".
    pub fn value(&self, field: CanonicalField) -> Option<&str> {
        match field {
            CanonicalField::FirstName => Some(&self.first_name),
            CanonicalField::LastName => Some(&self.last_name),
            CanonicalField::Email => Some(&self.email),
            CanonicalField::JobTitle => self.job_title.as_deref(),
            CanonicalField::CountryCode => self.country_code.as_deref(),
            CanonicalField::CompanyName => self.company_name.as_deref(),
        }
    }

    /// "First Last" with surrounding whitespace removed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A normalized lead plus its classification.
///
/// The status is computed from `errors` and `warnings` on construction and
/// on deserialization, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ValidatedLeadRecord")]
pub struct ValidatedLead {
    #[serde(flatten)]
    pub lead: NormalizedLead,
    validation_status: ValidationStatus,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidatedLead {
    pub fn new(lead: NormalizedLead, errors: Vec<String>, warnings: Vec<String>) -> Self {
        let validation_status = ValidationStatus::derive(&errors, &warnings);
        Self {
            lead,
            validation_status,
            errors,
            warnings,
        }
    }

    pub fn status(&self) -> ValidationStatus {
        self.validation_status
    }

    /// Blocking problems, in rule order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Non-blocking problems, in rule order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn row_index(&self) -> usize {
        self.lead.row_index
    }

    pub fn is_importable(&self) -> bool {
        self.validation_status.is_importable()
    }
}

/// Wire shape accepted when deserializing; the status field is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidatedLeadRecord {
    #[serde(flatten)]
    lead: NormalizedLead,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
}

impl From<ValidatedLeadRecord> for ValidatedLead {
    fn from(record: ValidatedLeadRecord) -> Self {
        Self::new(record.lead, record.errors, record.warnings)
    }
}
