//! Header to canonical field resolution.

use lead_model::CanonicalField;

/// Reduces a header to its lookup key: lowercase ASCII letters only.
///
/// `First Name`, `first_name` and `FIRSTNAME` all become `firstname`.
pub fn normalize_header_key(header: &str) -> String {
    header
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Resolves a header to the field it names, if any.
pub fn resolve_header(header: &str) -> Option<CanonicalField> {
    CanonicalField::from_key(&normalize_header_key(header))
}

/// How each column of a document maps onto canonical fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    columns: Vec<(String, Option<CanonicalField>)>,
}

impl ColumnMapping {
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: headers
                .into_iter()
                .map(|header| {
                    let header = header.as_ref();
                    (header.to_string(), resolve_header(header))
                })
                .collect(),
        }
    }

    /// Column header paired with its resolved field, in file order.
    pub fn columns(&self) -> &[(String, Option<CanonicalField>)] {
        &self.columns
    }

    /// Headers that resolve to no field and are ignored.
    pub fn unmapped(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|(_, field)| field.is_none())
            .map(|(header, _)| header.as_str())
    }

    /// Required fields no column provides.
    pub fn missing_required(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|field| field.is_required() && !self.provides(*field))
            .collect()
    }

    /// Returns true if some column resolves to `field`.
    pub fn provides(&self, field: CanonicalField) -> bool {
        self.columns.iter().any(|(_, f)| *f == Some(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_key() {
        assert_eq!(normalize_header_key("First Name"), "firstname");
        assert_eq!(normalize_header_key("first_name"), "firstname");
        assert_eq!(normalize_header_key("E-Mail"), "email");
        assert_eq!(normalize_header_key("Country Code 2"), "countrycode");
        assert_eq!(normalize_header_key("Prénom"), "prnom");
    }

    #[test]
    fn test_resolve_header_variants() {
        for header in ["firstname", "FirstName", "FIRST_NAME", " first name "] {
            assert_eq!(resolve_header(header), Some(CanonicalField::FirstName), "{header}");
        }
        assert_eq!(resolve_header("Company Name"), Some(CanonicalField::CompanyName));
        assert_eq!(resolve_header("job-title"), Some(CanonicalField::JobTitle));
        assert_eq!(resolve_header("phone"), None);
        assert_eq!(resolve_header(""), None);
    }

    #[test]
    fn test_column_mapping() {
        let mapping = ColumnMapping::from_headers(["first name", "email", "phone"]);
        assert_eq!(mapping.unmapped().collect::<Vec<_>>(), vec!["phone"]);
        assert_eq!(mapping.missing_required(), vec![CanonicalField::LastName]);
        assert!(mapping.provides(CanonicalField::Email));
        assert_eq!(mapping.columns().len(), 3);
    }
}
