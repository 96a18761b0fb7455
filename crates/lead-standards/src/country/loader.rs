//! Country table loading.
//!
//! Loads the ISO 3166-1 table from embedded CSV data.

use std::io::Cursor;

use serde::Deserialize;

use super::types::{Country, CountryRegistry};
use crate::embedded;
use crate::error::{Result, StandardsError};

/// Load the embedded ISO 3166-1 table.
pub fn load() -> Result<CountryRegistry> {
    load_from_str(embedded::ISO_3166_1_COUNTRIES, embedded::ISO_3166_1_SOURCE)
}

/// Load a country table from CSV string content.
///
/// # CSV Structure
///
/// Header row `alpha2,alpha3,numeric,name`, one country per row. Codes are
/// uppercased; numeric codes must already be zero-padded to three digits.
pub fn load_from_str(content: &str, filename: &str) -> Result<CountryRegistry> {
    let cursor = Cursor::new(content.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(cursor);

    let mut registry = CountryRegistry::new();

    let headers = reader.headers().map_err(|e| csv_error(&e, filename))?.clone();

    for result in reader.records() {
        let record = result.map_err(|e| csv_error(&e, filename))?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: CountryCsvRow = record
            .deserialize(Some(&headers))
            .map_err(|e| csv_error(&e, filename))?;
        let country = row.into_country(filename, line)?;

        if registry.contains_alpha2(&country.alpha2) {
            return Err(duplicate("alpha2", &country.alpha2, filename));
        }
        if registry.contains_alpha3(&country.alpha3) {
            return Err(duplicate("alpha3", &country.alpha3, filename));
        }
        if registry.contains_numeric(&country.numeric) {
            return Err(duplicate("numeric", &country.numeric, filename));
        }
        registry.insert(country);
    }

    if registry.is_empty() {
        return Err(StandardsError::Empty {
            file: filename.to_string(),
        });
    }

    tracing::debug!(
        file = filename,
        countries = registry.len(),
        "Loaded country table"
    );

    Ok(registry)
}

#[derive(Debug, Deserialize)]
struct CountryCsvRow {
    alpha2: String,
    alpha3: String,
    numeric: String,
    name: String,
}

impl CountryCsvRow {
    fn into_country(self, filename: &str, line: u64) -> Result<Country> {
        let alpha2 = self.alpha2.to_ascii_uppercase();
        let alpha3 = self.alpha3.to_ascii_uppercase();

        check_shape("alpha2", &alpha2, 2, u8::is_ascii_uppercase, filename, line)?;
        check_shape("alpha3", &alpha3, 3, u8::is_ascii_uppercase, filename, line)?;
        check_shape("numeric", &self.numeric, 3, u8::is_ascii_digit, filename, line)?;

        Ok(Country {
            alpha2,
            alpha3,
            numeric: self.numeric,
            name: self.name,
        })
    }
}

fn check_shape(
    field: &'static str,
    value: &str,
    len: usize,
    allowed: fn(&u8) -> bool,
    filename: &str,
    line: u64,
) -> Result<()> {
    if value.len() == len && value.as_bytes().iter().all(allowed) {
        Ok(())
    } else {
        Err(StandardsError::InvalidValue {
            field,
            value: value.to_string(),
            file: filename.to_string(),
            line,
        })
    }
}

fn csv_error(error: &csv::Error, filename: &str) -> StandardsError {
    StandardsError::CsvParse {
        file: filename.to_string(),
        message: error.to_string(),
    }
}

fn duplicate(field: &'static str, code: &str, filename: &str) -> StandardsError {
    StandardsError::DuplicateCode {
        field,
        code: code.to_string(),
        file: filename.to_string(),
    }
}
