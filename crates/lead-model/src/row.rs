//! Raw tokenizer output.

use serde::{Deserialize, Serialize};

/// One CSV data record as header/cell pairs.
///
/// Pairs keep file column order so that repeated headers survive until the
/// mapper decides which one wins. Headers are already lowercased and
/// trimmed, cells are trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based physical line the record starts on.
    pub line: usize,
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(line: usize, cells: Vec<(String, String)>) -> Self {
        Self { line, cells }
    }

    /// Builds a row from borrowed pairs, mostly useful in tests.
    pub fn from_pairs<I, H, V>(line: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (H, V)>,
        H: Into<String>,
        V: Into<String>,
    {
        Self {
            line,
            cells: pairs
                .into_iter()
                .map(|(header, value)| (header.into(), value.into()))
                .collect(),
        }
    }

    /// Iterates over `(header, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(header, value)| (header.as_str(), value.as_str()))
    }

    /// Value of the last column carrying `header`.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .rev()
            .find(|(h, _)| h == header)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every cell is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, value)| value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_prefers_last_duplicate() {
        let row = RawRow::from_pairs(2, [("email", "a@x.io"), ("email", "b@x.io")]);
        assert_eq!(row.get("email"), Some("b@x.io"));
        assert_eq!(row.get("phone"), None);
    }

    #[test]
    fn test_is_blank() {
        assert!(RawRow::from_pairs(3, [("a", ""), ("b", "  ")]).is_blank());
        assert!(!RawRow::from_pairs(3, [("a", ""), ("b", "x")]).is_blank());
    }

    #[test]
    fn test_iter_keeps_column_order() {
        let row = RawRow::from_pairs(2, [("b", "2"), ("a", "1")]);
        let headers: Vec<_> = row.iter().map(|(h, _)| h).collect();
        assert_eq!(headers, vec!["b", "a"]);
        assert_eq!(row.len(), 2);
    }
}
