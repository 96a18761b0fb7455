//! Lead CSV ingestion.
//!
//! Turns raw CSV text into ordered [`RawRow`]s, enforcing structural
//! well-formedness. Any structural problem fails the whole document;
//! nothing is returned for the rows that did parse.
//!
//! # Features
//!
//! - **Quoted fields**: delimiter, line breaks and doubled quotes inside quotes
//! - **Configurable dialect**: delimiter and quote character via [`ParseOptions`]
//! - **Blank row skipping**: blank lines and all-empty rows are dropped
//! - **Strict structure**: field counts and quoting are checked per record
//!
//! # Example
//!
//! ```
//! use lead_ingest::parse;
//!
//! let rows = parse("firstName,lastName\nJohn,Doe\n,\nJane,Smith")?;
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[1].get("firstname"), Some("Jane"));
//! # Ok::<(), lead_ingest::IngestError>(())
//! ```
//!
//! [`RawRow`]: lead_model::RawRow

mod csv;
mod error;

// === Error Types ===
pub use error::{CsvIssue, IngestError, Result};

// === CSV Reading ===
pub use csv::{CsvDocument, CsvHeaders, ParseOptions, parse, parse_document, parse_with_options};
