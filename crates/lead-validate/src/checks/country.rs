//! Country code check.

use lead_model::NormalizedLead;
use lead_standards::CountryLookup;

use crate::issue::Issue;

/// Warn when a present country code is not a known ISO 3166-1 code.
pub fn check<C>(lead: &NormalizedLead, countries: &C) -> Option<Issue>
where
    C: CountryLookup + ?Sized,
{
    let code = lead.country_code.as_deref()?;
    (!countries.is_valid_code(code)).then(|| Issue::InvalidCountryCode {
        value: code.to_string(),
    })
}
