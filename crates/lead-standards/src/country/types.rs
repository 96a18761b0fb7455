//! Country types and the registry index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::lookup::CountryLookup;

/// One ISO 3166-1 entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Two-letter code, uppercase (e.g. "US").
    pub alpha2: String,
    /// Three-letter code, uppercase (e.g. "USA").
    pub alpha3: String,
    /// Three-digit numeric code, zero-padded (e.g. "004").
    pub numeric: String,
    /// Short English name.
    pub name: String,
}

/// Indexed country table.
///
/// All three code forms resolve to the same entry. Letter codes are
/// stored uppercase and looked up case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    countries: Vec<Country>,
    by_alpha2: HashMap<String, usize>,
    by_alpha3: HashMap<String, usize>,
    by_numeric: HashMap<String, usize>,
}

impl CountryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a country, replacing nothing. Callers check for duplicates first.
    pub(crate) fn insert(&mut self, country: Country) {
        let idx = self.countries.len();
        self.by_alpha2.insert(country.alpha2.clone(), idx);
        self.by_alpha3.insert(country.alpha3.clone(), idx);
        self.by_numeric.insert(country.numeric.clone(), idx);
        self.countries.push(country);
    }

    pub(crate) fn contains_alpha2(&self, code: &str) -> bool {
        self.by_alpha2.contains_key(code)
    }

    pub(crate) fn contains_alpha3(&self, code: &str) -> bool {
        self.by_alpha3.contains_key(code)
    }

    pub(crate) fn contains_numeric(&self, code: &str) -> bool {
        self.by_numeric.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// All countries in table order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Finds a country by any of its codes.
    pub fn find(&self, code: &str) -> Option<&Country> {
        let upper = code.trim().to_ascii_uppercase();
        let idx = match upper.len() {
            2 => self.by_alpha2.get(&upper),
            3 if upper.bytes().all(|b| b.is_ascii_digit()) => self.by_numeric.get(&upper),
            3 => self.by_alpha3.get(&upper),
            _ => None,
        }?;
        self.countries.get(*idx)
    }

    /// Countries whose name or codes contain `needle` (case-insensitive).
    pub fn search(&self, needle: &str) -> Vec<&Country> {
        let needle = needle.trim().to_lowercase();
        self.countries
            .iter()
            .filter(|country| {
                needle.is_empty()
                    || country.name.to_lowercase().contains(&needle)
                    || country.alpha2.eq_ignore_ascii_case(&needle)
                    || country.alpha3.eq_ignore_ascii_case(&needle)
                    || country.numeric == needle
            })
            .collect()
    }
}

impl CountryLookup for CountryRegistry {
    fn is_valid_code(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    fn numeric_to_alpha2(&self, numeric: &str) -> Option<String> {
        let idx = self.by_numeric.get(numeric)?;
        self.countries.get(*idx).map(|c| c.alpha2.clone())
    }

    fn alpha3_to_alpha2(&self, alpha3: &str) -> Option<String> {
        let idx = self.by_alpha3.get(&alpha3.to_ascii_uppercase())?;
        self.countries.get(*idx).map(|c| c.alpha2.clone())
    }
}
