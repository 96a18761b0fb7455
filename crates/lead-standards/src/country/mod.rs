//! ISO 3166-1 country table.

mod loader;
mod types;

use std::sync::LazyLock;

pub use loader::{load, load_from_str};
pub use types::{Country, CountryRegistry};

static DEFAULT_REGISTRY: LazyLock<CountryRegistry> =
    LazyLock::new(|| load().expect("embedded ISO 3166-1 table is well formed"));

/// Process-wide registry built from the embedded table on first use.
pub fn default_registry() -> &'static CountryRegistry {
    &DEFAULT_REGISTRY
}
