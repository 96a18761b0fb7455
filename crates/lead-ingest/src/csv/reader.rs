//! Document-level CSV reading.

use lead_model::RawRow;

use super::header::CsvHeaders;
use super::options::ParseOptions;
use super::tokenizer::{Record, TokenizeError, Tokenizer};
use crate::error::{CsvIssue, IngestError, Result};

const BOM: char = '\u{feff}';

/// A parsed lead CSV.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    pub headers: CsvHeaders,
    /// Data rows in file order, blank rows removed.
    pub rows: Vec<RawRow>,
    /// Blank lines and all-empty records that were dropped.
    pub skipped_rows: usize,
}

/// Parse CSV text with the default dialect.
pub fn parse(text: &str) -> Result<Vec<RawRow>> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse CSV text with a custom dialect.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Vec<RawRow>> {
    parse_document(text, options).map(|document| document.rows)
}

/// Parse CSV text, keeping the header row and skip statistics.
///
/// # Errors
///
/// - [`IngestError::EmptyInput`] for empty or whitespace-only text
/// - [`IngestError::MalformedCsv`] for the first structural problem found
/// - [`IngestError::NoData`] when no data row survives
pub fn parse_document(text: &str, options: &ParseOptions) -> Result<CsvDocument> {
    options.validate()?;

    let text = text.strip_prefix(BOM).unwrap_or(text);
    if text.trim().is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let mut records = Tokenizer::new(text, *options);

    let headers = loop {
        match records.next() {
            Some(record) => {
                let record = record.map_err(malformed)?;
                if !record.blank_line {
                    break read_headers(record, options.delimiter)?;
                }
            }
            None => return Err(IngestError::NoData),
        }
    };

    let mut rows = Vec::new();
    let mut skipped_rows = 0usize;

    for record in records {
        let record = record.map_err(malformed)?;
        if record.blank_line {
            skipped_rows += 1;
            continue;
        }
        if record.fields.iter().all(String::is_empty) {
            tracing::trace!(line = record.line, "Skipping empty record");
            skipped_rows += 1;
            continue;
        }
        check_field_count(&record, headers.len())?;
        let cells = headers
            .columns
            .iter()
            .cloned()
            .zip(record.fields)
            .collect();
        rows.push(RawRow::new(record.line, cells));
    }

    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        skipped = skipped_rows,
        "Parsed lead CSV"
    );

    if rows.is_empty() {
        return Err(IngestError::NoData);
    }

    Ok(CsvDocument {
        headers,
        rows,
        skipped_rows,
    })
}

fn read_headers(record: Record, delimiter: char) -> Result<CsvHeaders> {
    if record.fields.len() < 2 {
        return Err(IngestError::MalformedCsv {
            line: record.line,
            issue: CsvIssue::UndetectableDelimiter { delimiter },
        });
    }
    Ok(CsvHeaders::from_fields(record.fields, record.line))
}

fn check_field_count(record: &Record, expected: usize) -> Result<()> {
    let parsed = record.fields.len();
    let issue = if parsed < expected {
        CsvIssue::TooFewFields { expected, parsed }
    } else if parsed > expected {
        CsvIssue::TooManyFields { expected, parsed }
    } else {
        return Ok(());
    };
    Err(IngestError::MalformedCsv {
        line: record.line,
        issue,
    })
}

fn malformed(error: TokenizeError) -> IngestError {
    IngestError::MalformedCsv {
        line: error.line,
        issue: error.issue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_stripped_from_header() {
        let rows = parse("\u{feff}Email,Name\na@x.io,A").unwrap();
        assert_eq!(rows[0].get("email"), Some("a@x.io"));
    }

    #[test]
    fn test_skip_counts() {
        let document = parse_document("a,b\n\n1,2\n,\n  \n3,4\n", &ParseOptions::default()).unwrap();
        assert_eq!(document.rows.len(), 2);
        assert_eq!(document.skipped_rows, 3);
        assert_eq!(document.headers.line, 1);
    }

    #[test]
    fn test_empty_record_skipped_before_field_count() {
        let document = parse_document("a,b,c\n1,2,3\n,\n4,5,6", &ParseOptions::default()).unwrap();
        assert_eq!(document.rows.len(), 2);
        assert_eq!(document.skipped_rows, 1);
    }

    #[test]
    fn test_leading_blank_lines_before_header() {
        let document = parse_document("\n\nA,B\n1,2", &ParseOptions::default()).unwrap();
        assert_eq!(document.headers.line, 3);
        assert_eq!(document.rows[0].line, 4);
    }

    #[test]
    fn test_single_column_header_rejected() {
        let err = parse("email\na@x.io").unwrap_err();
        assert!(matches!(
            err.issue(),
            Some(CsvIssue::UndetectableDelimiter { delimiter: ',' })
        ));
    }

    #[test]
    fn test_invalid_options_rejected_first() {
        let options = ParseOptions::default().with_quote(',');
        assert!(matches!(
            parse_with_options("", &options),
            Err(IngestError::InvalidOptions { .. })
        ));
    }
}
