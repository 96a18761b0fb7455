//! Lead field mapping and normalization.
//!
//! Resolves free-form CSV headers to [`CanonicalField`]s and turns a
//! [`RawRow`] into a [`NormalizedLead`]. Unrecognized columns are dropped,
//! values are trimmed and numeric country codes become alpha-2 where the
//! lookup knows them.
//!
//! Normalization never fails; judging the result is the validator's job.
//!
//! # Example
//!
//! ```
//! use lead_model::RawRow;
//! use lead_normalize::normalize;
//! use lead_standards::default_registry;
//!
//! let row = RawRow::from_pairs(2, [("first_name", " Ada "), ("country code", "840")]);
//! let lead = normalize(&row, 0, default_registry());
//! assert_eq!(lead.first_name, "Ada");
//! assert_eq!(lead.country_code.as_deref(), Some("US"));
//! assert_eq!(lead.row_index, 2);
//! ```
//!
//! [`CanonicalField`]: lead_model::CanonicalField
//! [`RawRow`]: lead_model::RawRow
//! [`NormalizedLead`]: lead_model::NormalizedLead

mod country;
mod lead;
mod mapping;

pub use country::coerce_country_code;
pub use lead::{ROW_INDEX_OFFSET, normalize, normalize_rows};
pub use mapping::{ColumnMapping, normalize_header_key, resolve_header};
