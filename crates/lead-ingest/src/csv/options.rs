//! CSV dialect options.

use crate::error::{IngestError, Result};

/// Delimiter and quote character used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Field separator (default `,`).
    pub delimiter: char,
    /// Quote character (default `"`). Doubled inside a quoted field to
    /// escape itself.
    pub quote: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Rejects dialects the tokenizer cannot read unambiguously.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == self.quote {
            return Err(IngestError::InvalidOptions {
                reason: format!(
                    "delimiter and quote must differ (both '{}')",
                    self.delimiter
                ),
            });
        }
        for (name, c) in [("delimiter", self.delimiter), ("quote", self.quote)] {
            if c == '\n' || c == '\r' {
                return Err(IngestError::InvalidOptions {
                    reason: format!("{name} cannot be a line break"),
                });
            }
        }
        Ok(())
    }
}
