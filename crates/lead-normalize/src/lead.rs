//! Row to lead normalization.

use lead_model::{CanonicalField, NormalizedLead, RawRow};
use lead_standards::CountryLookup;

use crate::country::coerce_country_code;
use crate::mapping::resolve_header;

/// Added to a row's emitted position to get its `row_index`: one for the
/// header line, one for 1-based counting.
pub const ROW_INDEX_OFFSET: usize = 2;

/// Normalize one raw row.
///
/// `position` is the 0-based index of the row among emitted rows. When
/// several columns resolve to the same field, the last one wins.
pub fn normalize<C>(row: &RawRow, position: usize, countries: &C) -> NormalizedLead
where
    C: CountryLookup + ?Sized,
{
    let mut lead = NormalizedLead {
        row_index: position + ROW_INDEX_OFFSET,
        ..NormalizedLead::default()
    };

    for (header, value) in row.iter() {
        let Some(field) = resolve_header(header) else {
            continue;
        };
        let value = value.trim();
        match field {
            CanonicalField::FirstName => lead.first_name = value.to_string(),
            CanonicalField::LastName => lead.last_name = value.to_string(),
            CanonicalField::Email => lead.email = value.to_string(),
            CanonicalField::JobTitle => lead.job_title = non_empty(value),
            CanonicalField::CompanyName => lead.company_name = non_empty(value),
            CanonicalField::CountryCode => {
                lead.country_code =
                    non_empty(value).map(|code| coerce_country_code(&code, countries));
            }
        }
    }

    lead
}

/// Normalize rows in order, assigning consecutive positions.
pub fn normalize_rows<C>(rows: &[RawRow], countries: &C) -> Vec<NormalizedLead>
where
    C: CountryLookup + ?Sized,
{
    rows.iter()
        .enumerate()
        .map(|(position, row)| normalize(row, position, countries))
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
