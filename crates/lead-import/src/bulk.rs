//! Bulk import of leads into a store.

use std::collections::HashSet;

use lead_model::NormalizedLead;
use lead_model::redact::redact_value;
use lead_standards::{CountryLookup, CountryRegistry, default_registry};
use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result};
use crate::store::{LeadStore, NewLead};

/// A lead as submitted for import. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub country_code: Option<String>,
    pub company_name: Option<String>,
}

impl LeadInput {
    fn required(&self) -> Option<(&str, &str, &str)> {
        let first = trimmed(self.first_name.as_deref())?;
        let last = trimmed(self.last_name.as_deref())?;
        let email = trimmed(self.email.as_deref())?;
        Some((first, last, email))
    }
}

impl From<&NormalizedLead> for LeadInput {
    fn from(lead: &NormalizedLead) -> Self {
        Self {
            first_name: Some(lead.first_name.clone()),
            last_name: Some(lead.last_name.clone()),
            email: Some(lead.email.clone()),
            job_title: lead.job_title.clone(),
            country_code: lead.country_code.clone(),
            company_name: lead.company_name.clone(),
        }
    }
}

/// A lead the store refused to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedLead {
    pub lead: LeadInput,
    pub error: String,
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkImportReport {
    pub imported_count: usize,
    /// Leads matching an already stored first and last name.
    pub duplicates_skipped: usize,
    /// Leads missing a first name, last name or email.
    pub invalid_leads: usize,
    pub errors: Vec<FailedLead>,
}

/// Imports batches of leads into a [`LeadStore`].
pub struct BulkImporter<'a, S, C: ?Sized = CountryRegistry> {
    store: &'a S,
    countries: &'a C,
}

impl<'a, S: LeadStore> BulkImporter<'a, S> {
    /// Importer using the embedded country table.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            countries: default_registry(),
        }
    }
}

impl<'a, S, C> BulkImporter<'a, S, C>
where
    S: LeadStore,
    C: CountryLookup + ?Sized,
{
    pub fn with_countries(store: &'a S, countries: &'a C) -> Self {
        Self { store, countries }
    }

    /// Import `leads`, skipping incomplete leads and known names.
    ///
    /// Creation failures are recorded per lead and do not stop the batch.
    ///
    /// # Errors
    ///
    /// - [`ImportError::EmptyBatch`] when `leads` is empty
    /// - [`ImportError::NoValidLeads`] when no lead has all required fields
    /// - [`ImportError::Store`] when the duplicate lookup fails
    pub async fn import(&self, leads: &[LeadInput]) -> Result<BulkImportReport> {
        if leads.is_empty() {
            return Err(ImportError::EmptyBatch);
        }

        let complete: Vec<(&LeadInput, (&str, &str, &str))> = leads
            .iter()
            .filter_map(|lead| lead.required().map(|required| (lead, required)))
            .collect();
        if complete.is_empty() {
            return Err(ImportError::NoValidLeads);
        }

        let names: Vec<(String, String)> = complete
            .iter()
            .map(|(_, (first, last, _))| ((*first).to_string(), (*last).to_string()))
            .collect();
        let existing: HashSet<String> = self
            .store
            .find_existing(&names)
            .await?
            .iter()
            .map(|lead| name_key(&lead.first_name, &lead.last_name))
            .collect();

        let unique: Vec<_> = complete
            .iter()
            .filter(|(_, (first, last, _))| !existing.contains(&name_key(first, last)))
            .collect();

        let mut report = BulkImportReport {
            duplicates_skipped: complete.len() - unique.len(),
            invalid_leads: leads.len() - complete.len(),
            ..BulkImportReport::default()
        };

        for (input, (first, last, email)) in unique {
            let new_lead = NewLead {
                first_name: (*first).to_string(),
                last_name: (*last).to_string(),
                email: (*email).to_string(),
                job_title: trimmed(input.job_title.as_deref()).map(str::to_string),
                country_code: trimmed(input.country_code.as_deref())
                    .and_then(|code| to_alpha2_or_none(code, self.countries)),
                company_name: trimmed(input.company_name.as_deref()).map(str::to_string),
            };
            match self.store.create(new_lead).await {
                Ok(_) => report.imported_count += 1,
                Err(err) => {
                    tracing::warn!(
                        lead = redact_value(&format!("{first} {last}")),
                        error = %err,
                        "Failed to create lead"
                    );
                    report.errors.push(FailedLead {
                        lead: (*input).clone(),
                        error: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            imported = report.imported_count,
            duplicates = report.duplicates_skipped,
            invalid = report.invalid_leads,
            failed = report.errors.len(),
            "Bulk import finished"
        );

        Ok(report)
    }
}

/// Converts a country code to alpha-2 for storage.
///
/// Numeric codes go through the numeric table and three-character codes
/// through the alpha-3 table; anything else is uppercased. The result is
/// kept only if it is a valid code, so unknown codes become `None`.
pub fn to_alpha2_or_none<C>(code: &str, countries: &C) -> Option<String>
where
    C: CountryLookup + ?Sized,
{
    let code = code.trim();
    let converted = if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
        let number: u32 = code.parse().ok()?;
        countries.numeric_to_alpha2(&format!("{number:03}"))?
    } else if code.chars().count() == 3 {
        countries.alpha3_to_alpha2(code)?
    } else {
        code.to_ascii_uppercase()
    };
    countries.is_valid_code(&converted).then_some(converted)
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn name_key(first: &str, last: &str) -> String {
    format!("{}_{}", first.trim().to_lowercase(), last.trim().to_lowercase())
}
