//! Country code coercion.

use lead_model::redact::redact_value;
use lead_standards::CountryLookup;

/// Converts a numeric country code to alpha-2 where possible.
///
/// A value made only of ASCII digits is zero-padded to three digits and
/// looked up as an ISO 3166-1 numeric code. Anything else, including
/// numbers with no matching country, is returned trimmed but otherwise
/// unchanged. Alpha-3 codes are not converted here.
pub fn coerce_country_code<C>(value: &str, countries: &C) -> String
where
    C: CountryLookup + ?Sized,
{
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return trimmed.to_string();
    }

    let Ok(number) = trimmed.parse::<u32>() else {
        return trimmed.to_string();
    };
    let padded = format!("{number:03}");

    match countries.numeric_to_alpha2(&padded) {
        Some(alpha2) => {
            tracing::trace!(
                from = redact_value(trimmed),
                to = redact_value(&alpha2),
                "Coerced numeric country code"
            );
            alpha2
        }
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lead_standards::default_registry;

    #[test]
    fn test_numeric_codes_convert() {
        let countries = default_registry();
        assert_eq!(coerce_country_code("840", countries), "US");
        assert_eq!(coerce_country_code("4", countries), "AF");
        assert_eq!(coerce_country_code("04", countries), "AF");
        assert_eq!(coerce_country_code("0840", countries), "US");
        assert_eq!(coerce_country_code(" 826 ", countries), "GB");
    }

    #[test]
    fn test_non_numeric_passes_through() {
        let countries = default_registry();
        assert_eq!(coerce_country_code("US", countries), "US");
        assert_eq!(coerce_country_code("usa", countries), "usa");
        assert_eq!(coerce_country_code("INVALID", countries), "INVALID");
        assert_eq!(coerce_country_code("840abc", countries), "840abc");
        assert_eq!(coerce_country_code("+840", countries), "+840");
        assert_eq!(coerce_country_code("", countries), "");
    }

    #[test]
    fn test_unknown_numeric_unchanged() {
        let countries = default_registry();
        assert_eq!(coerce_country_code("999", countries), "999");
        assert_eq!(coerce_country_code("99999999999999999999", countries), "99999999999999999999");
    }
}
