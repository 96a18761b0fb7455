//! Embedded reference data.
//!
//! Tables are embedded at compile time using `include_str!()` so the
//! pipeline never touches the filesystem.

/// ISO 3166-1 country codes (alpha-2, alpha-3, numeric, short name).
pub const ISO_3166_1_COUNTRIES: &str = include_str!("../data/iso3166/countries.csv");

/// File name reported in load errors for the embedded table.
pub const ISO_3166_1_SOURCE: &str = "iso3166/countries.csv";
