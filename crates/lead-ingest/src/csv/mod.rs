//! CSV reading.

mod header;
mod options;
mod reader;
mod tokenizer;

pub use header::CsvHeaders;
pub use options::ParseOptions;
pub use reader::{CsvDocument, parse, parse_document, parse_with_options};
