//! End-to-end pipeline scenarios.

use lead_import::{PipelineOptions, parse_csv, parse_csv_default};
use lead_ingest::{CsvIssue, IngestError};
use lead_model::ValidationStatus;
use lead_standards::default_registry;
use proptest::prelude::*;

#[test]
fn test_two_row_scenario() {
    let csv = "firstName,lastName,email,jobTitle,countryCode,companyName\n\
               John,Doe,john@example.com,CEO,US,Acme\n\
               ,Smith,invalid-email,CTO,INVALID,Beta\n";
    let leads = parse_csv_default(csv).unwrap();
    assert_eq!(leads.len(), 2);

    assert_eq!(leads[0].status(), ValidationStatus::Valid);
    assert_eq!(leads[0].row_index(), 2);
    assert!(leads[0].errors().is_empty());

    assert_eq!(leads[1].status(), ValidationStatus::Invalid);
    assert_eq!(leads[1].row_index(), 3);
    assert_eq!(
        leads[1].errors(),
        ["First name is required", "Invalid email format"]
    );
    assert_eq!(
        leads[1].warnings(),
        ["Invalid country code (will be left empty)"]
    );
}

#[test]
fn test_blank_row_does_not_consume_an_index() {
    let csv = "firstName,lastName,email\nJohn,Doe,j@x.io\n,,\nJane,Smith,s@x.io\n";
    let leads = parse_csv_default(csv).unwrap();
    let indexes: Vec<_> = leads.iter().map(|lead| lead.row_index()).collect();
    assert_eq!(indexes, vec![2, 3]);
    assert_eq!(leads[1].lead.first_name, "Jane");
}

#[test]
fn test_header_case_and_punctuation_are_ignored() {
    let csv = "FIRST NAME,last_name,E-Mail,Country-Code\nAda,Lovelace,ada@example.com,gb\n";
    let leads = parse_csv_default(csv).unwrap();
    assert_eq!(leads[0].lead.first_name, "Ada");
    assert_eq!(leads[0].lead.email, "ada@example.com");
    assert_eq!(leads[0].status(), ValidationStatus::Valid);
}

#[test]
fn test_numeric_country_is_coerced() {
    let csv = "firstName,lastName,email,countryCode\nJohn,Doe,john@example.com,840\n";
    let leads = parse_csv_default(csv).unwrap();
    assert_eq!(leads[0].lead.country_code.as_deref(), Some("US"));
    assert_eq!(leads[0].status(), ValidationStatus::Valid);
}

#[test]
fn test_alpha3_country_is_valid_but_kept() {
    let csv = "firstName,lastName,email,countryCode\nJohn,Doe,john@example.com,GBR\n";
    let leads = parse_csv_default(csv).unwrap();
    assert_eq!(leads[0].lead.country_code.as_deref(), Some("GBR"));
    assert_eq!(leads[0].status(), ValidationStatus::Valid);
}

#[test]
fn test_fatal_errors() {
    assert_eq!(parse_csv_default(""), Err(IngestError::EmptyInput));
    assert_eq!(parse_csv_default("   "), Err(IngestError::EmptyInput));
    assert_eq!(
        parse_csv_default("firstName,lastName,email\n"),
        Err(IngestError::NoData)
    );
    let err = parse_csv_default("firstName,lastName,email\nJohn,Doe\n").unwrap_err();
    assert!(matches!(
        err,
        IngestError::MalformedCsv {
            line: 2,
            issue: CsvIssue::TooFewFields { .. }
        }
    ));
    assert_eq!(
        err.to_string(),
        "CSV parsing failed: Too few fields: expected 3 fields but parsed 2"
    );
}

#[test]
fn test_unknown_columns_are_dropped() {
    let csv = "firstName,lastName,email,phone\nJohn,Doe,john@example.com,555\n";
    let leads = parse_csv_default(csv).unwrap();
    let value = serde_json::to_value(&leads[0]).unwrap();
    assert!(value.get("phone").is_none());
}

#[test]
fn test_custom_dialect() {
    let options = PipelineOptions::default()
        .with_delimiter(';')
        .with_quote('\'');
    let csv = "firstName;lastName;email;companyName\nJohn;Doe;john@example.com;'Acme; Inc.'\n";
    let leads = parse_csv(csv, &options, default_registry()).unwrap();
    assert_eq!(leads[0].lead.company_name.as_deref(), Some("Acme; Inc."));
}

/// Data rows (`true`) mixed with blank shapes, each with its line ending.
fn document_lines() -> impl Strategy<Value = Vec<(bool, &'static str, &'static str)>> {
    let blank = prop_oneof![Just(""), Just("   "), Just(",,"), Just("\"\",\"\",\"\""), Just("\"\"")];
    let ending = prop_oneof![Just("\n"), Just("\r\n")];
    let line = prop_oneof![
        ending.clone().prop_map(|ending| (true, "", ending)),
        (blank, ending).prop_map(|(text, ending)| (false, text, ending)),
    ];
    proptest::collection::vec(line, 0..24)
}

proptest! {
    #[test]
    fn test_row_index_is_gapless(lines in document_lines()) {
        let mut csv = String::from("firstName,lastName,email\n");
        let mut data_rows = 0usize;
        let mut push_row = |csv: &mut String| {
            data_rows += 1;
            csv.push_str(&format!("Lead{data_rows},Row,lead{data_rows}@example.com"));
        };
        for (is_data, text, ending) in &lines {
            if *is_data {
                push_row(&mut csv);
            } else {
                csv.push_str(text);
            }
            csv.push_str(ending);
        }
        push_row(&mut csv);

        let leads = parse_csv_default(&csv).unwrap();
        let indexes: Vec<usize> = leads.iter().map(|lead| lead.row_index()).collect();
        prop_assert_eq!(indexes, (2..=data_rows + 1).collect::<Vec<_>>());
        for (position, lead) in leads.iter().enumerate() {
            prop_assert_eq!(&lead.lead.first_name, &format!("Lead{}", position + 1));
        }
    }
}
