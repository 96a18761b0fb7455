//! CSV header row handling.

/// Header row of a lead CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Column names, trimmed and lowercased, in file order.
    pub columns: Vec<String>,
    /// 1-based physical line the header was read from.
    pub line: usize,
}

impl CsvHeaders {
    /// Builds headers from raw header cells.
    pub fn from_fields(fields: Vec<String>, line: usize) -> Self {
        Self {
            columns: fields.into_iter().map(|field| normalize_header(&field)).collect(),
            line,
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Normalizes a header value by trimming whitespace and lowercasing.
pub fn normalize_header(value: &str) -> String {
    value.trim().to_lowercase()
}
