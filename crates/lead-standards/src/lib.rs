//! Country reference data for lead intake.
//!
//! This crate provides:
//!
//! - **Embedded ISO 3166-1 table** compiled into the binary (no runtime I/O)
//! - **[`CountryLookup`]**: the read-only lookup interface the pipeline
//!   depends on, so tests can swap in a stub
//! - **[`CountryRegistry`]**: the default implementation backed by the
//!   embedded table
//!
//! # Example
//!
//! ```
//! use lead_standards::{CountryLookup, default_registry};
//!
//! let registry = default_registry();
//! assert!(registry.is_valid_code("US"));
//! assert!(registry.is_valid_code("usa"));
//! assert_eq!(registry.numeric_to_alpha2("840").as_deref(), Some("US"));
//! ```

pub mod country;
pub mod embedded;
pub mod error;
pub mod lookup;

pub use country::{Country, CountryRegistry, default_registry, load, load_from_str};
pub use error::{Result, StandardsError};
pub use lookup::CountryLookup;
