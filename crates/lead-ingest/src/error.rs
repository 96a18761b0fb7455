//! Error types for lead CSV ingestion.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors that abort parsing of a whole document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// Input was empty or whitespace only.
    #[error("CSV content cannot be empty")]
    EmptyInput,

    /// Parsing succeeded but no data rows survived.
    #[error("CSV file appears to be empty or contains no valid data")]
    NoData,

    /// A record violated the CSV structure.
    #[error("CSV parsing failed: {issue}")]
    MalformedCsv { line: usize, issue: CsvIssue },

    /// The dialect cannot be tokenized unambiguously.
    #[error("invalid CSV options: {reason}")]
    InvalidOptions { reason: String },
}

impl IngestError {
    /// Structural reason for a malformed document, if any.
    pub fn issue(&self) -> Option<&CsvIssue> {
        match self {
            Self::MalformedCsv { issue, .. } => Some(issue),
            _ => None,
        }
    }
}

/// Structural problem found in a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CsvIssue {
    /// Record has fewer fields than the header.
    TooFewFields { expected: usize, parsed: usize },
    /// Record has more fields than the header.
    TooManyFields { expected: usize, parsed: usize },
    /// Input ended inside a quoted field.
    UnterminatedQuote,
    /// Something other than a delimiter or line end follows a closing quote.
    MalformedTrailingQuote,
    /// Quote character inside an unquoted field.
    StrayQuote,
    /// The header row never uses the configured delimiter.
    UndetectableDelimiter { delimiter: char },
}

impl fmt::Display for CsvIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFields { expected, parsed } => write!(
                f,
                "Too few fields: expected {expected} fields but parsed {parsed}"
            ),
            Self::TooManyFields { expected, parsed } => write!(
                f,
                "Too many fields: expected {expected} fields but parsed {parsed}"
            ),
            Self::UnterminatedQuote => f.write_str("Quoted field unterminated"),
            Self::MalformedTrailingQuote => {
                f.write_str("Trailing quote on quoted field is malformed")
            }
            Self::StrayQuote => f.write_str("Stray quote character in unquoted field"),
            Self::UndetectableDelimiter { delimiter } => write!(
                f,
                "Unable to detect delimiting character; expected '{delimiter}'"
            ),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
