//! Country lookup interface.

/// Read-only ISO 3166-1 lookups used by normalization, validation and the
/// bulk importer.
///
/// Implementations must be pure: the same input always yields the same
/// answer, and lookups never mutate shared state.
pub trait CountryLookup {
    /// True when `code` is a known alpha-2, alpha-3 or numeric code.
    /// Letter codes match case-insensitively.
    fn is_valid_code(&self, code: &str) -> bool;

    /// Alpha-2 code for a three-digit numeric code such as `"840"`.
    fn numeric_to_alpha2(&self, numeric: &str) -> Option<String>;

    /// Alpha-2 code for an alpha-3 code such as `"USA"`.
    fn alpha3_to_alpha2(&self, alpha3: &str) -> Option<String>;
}

impl<T: CountryLookup + ?Sized> CountryLookup for &T {
    fn is_valid_code(&self, code: &str) -> bool {
        (**self).is_valid_code(code)
    }

    fn numeric_to_alpha2(&self, numeric: &str) -> Option<String> {
        (**self).numeric_to_alpha2(numeric)
    }

    fn alpha3_to_alpha2(&self, alpha3: &str) -> Option<String> {
        (**self).alpha3_to_alpha2(alpha3)
    }
}

impl<T: CountryLookup + ?Sized> CountryLookup for std::sync::Arc<T> {
    fn is_valid_code(&self, code: &str) -> bool {
        (**self).is_valid_code(code)
    }

    fn numeric_to_alpha2(&self, numeric: &str) -> Option<String> {
        (**self).numeric_to_alpha2(numeric)
    }

    fn alpha3_to_alpha2(&self, alpha3: &str) -> Option<String> {
        (**self).alpha3_to_alpha2(alpha3)
    }
}
