//! End-to-end CSV to classified leads.

use lead_ingest::{ParseOptions, parse_document};
use lead_model::{ValidatedLead, ValidationStatus};
use lead_normalize::{ColumnMapping, normalize_rows};
use lead_standards::{CountryLookup, default_registry};
use lead_validate::validate_all;
use serde::{Deserialize, Serialize};

/// Options for [`parse_csv`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub parse: ParseOptions,
}

impl PipelineOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.parse = self.parse.with_delimiter(delimiter);
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.parse = self.parse.with_quote(quote);
        self
    }
}

/// Parse, normalize and validate a lead CSV.
///
/// Returns one [`ValidatedLead`] per non-blank data row, in file order.
///
/// # Errors
///
/// Structural problems with the document; see [`lead_ingest::IngestError`].
pub fn parse_csv<C>(
    text: &str,
    options: &PipelineOptions,
    countries: &C,
) -> lead_ingest::Result<Vec<ValidatedLead>>
where
    C: CountryLookup + ?Sized,
{
    let _span = tracing::debug_span!("parse_csv", bytes = text.len()).entered();

    let document = parse_document(text, &options.parse)?;

    let mapping = ColumnMapping::from_headers(&document.headers.columns);
    let unmapped: Vec<&str> = mapping.unmapped().collect();
    if !unmapped.is_empty() {
        tracing::debug!(columns = ?unmapped, "Ignoring unrecognized columns");
    }
    let missing = mapping.missing_required();
    if !missing.is_empty() {
        let missing: Vec<&str> = missing.iter().map(|field| field.header_name()).collect();
        tracing::info!(fields = ?missing, "Required columns not present in header");
    }

    let leads = validate_all(normalize_rows(&document.rows, countries), countries);

    let summary = ImportSummary::from_leads(&leads);
    tracing::info!(
        total = summary.total,
        valid = summary.valid,
        warning = summary.warning,
        invalid = summary.invalid,
        "Classified leads"
    );

    Ok(leads)
}

/// [`parse_csv`] with the default dialect and the embedded country table.
pub fn parse_csv_default(text: &str) -> lead_ingest::Result<Vec<ValidatedLead>> {
    parse_csv(text, &PipelineOptions::default(), default_registry())
}

/// Counts of leads by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub total: usize,
    pub valid: usize,
    pub warning: usize,
    pub invalid: usize,
}

impl ImportSummary {
    pub fn from_leads(leads: &[ValidatedLead]) -> Self {
        leads.iter().fold(Self::default(), |mut summary, lead| {
            summary.total += 1;
            match lead.status() {
                ValidationStatus::Valid => summary.valid += 1,
                ValidationStatus::Warning => summary.warning += 1,
                ValidationStatus::Invalid => summary.invalid += 1,
            }
            summary
        })
    }

    /// Leads that may be imported (valid or warning).
    pub fn importable(&self) -> usize {
        self.valid + self.warning
    }

    pub fn has_invalid(&self) -> bool {
        self.invalid > 0
    }
}
