//! Error types for reference data loading.

use thiserror::Error;

/// Errors that can occur when loading country reference data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Failed to read or parse a CSV record.
    #[error("failed to parse CSV {file}: {message}")]
    CsvParse { file: String, message: String },

    /// A code column holds a value of the wrong shape.
    #[error("invalid {field} value '{value}' in {file} (line {line})")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: String,
        line: u64,
    },

    /// The same code appears on two rows.
    #[error("duplicate {field} code '{code}' in {file}")]
    DuplicateCode {
        field: &'static str,
        code: String,
        file: String,
    },

    /// The table parsed but held no countries.
    #[error("no countries found in {file}")]
    Empty { file: String },
}

/// Result type for reference data operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
