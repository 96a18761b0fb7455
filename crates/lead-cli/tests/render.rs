//! Rendering of classified leads for terminals and downstream tools.

use lead_cli::render::{
    country_table, import_report_table, lead_table, leads_to_csv, leads_to_json, summary_table,
};
use lead_import::{BulkImportReport, FailedLead, ImportSummary, LeadInput, parse_csv_default};
use lead_model::ValidatedLead;
use lead_standards::default_registry;

const TWO_ROWS: &str = "firstName,lastName,email,countryCode\n\
                        John,Doe,john@example.com,840\n\
                        ,Smith,invalid-email,INVALID\n";

fn leads() -> Vec<ValidatedLead> {
    parse_csv_default(TWO_ROWS).unwrap()
}

#[test]
fn test_csv_output() {
    let csv = leads_to_csv(&leads()).unwrap();
    insta::assert_snapshot!(csv, @r"
    rowIndex,firstName,lastName,email,jobTitle,countryCode,companyName,validationStatus,errors,warnings
    2,John,Doe,john@example.com,,US,,valid,,
    3,,Smith,invalid-email,,INVALID,,invalid,First name is required; Invalid email format,Invalid country code (will be left empty)
    ");
}

#[test]
fn test_csv_output_quotes_embedded_delimiters() {
    let csv = "firstName,lastName,email,companyName\nAda,Lovelace,ada@example.com,\"Engines, Ltd\"\n";
    let output = leads_to_csv(&parse_csv_default(csv).unwrap()).unwrap();
    assert!(output.contains("\"Engines, Ltd\""));
}

#[test]
fn test_json_output() {
    let json = leads_to_json(&leads()).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "summary": {
        "total": 2,
        "valid": 1,
        "warning": 0,
        "invalid": 1
      },
      "leads": [
        {
          "firstName": "John",
          "lastName": "Doe",
          "email": "john@example.com",
          "countryCode": "US",
          "rowIndex": 2,
          "validationStatus": "valid",
          "errors": [],
          "warnings": []
        },
        {
          "firstName": "",
          "lastName": "Smith",
          "email": "invalid-email",
          "countryCode": "INVALID",
          "rowIndex": 3,
          "validationStatus": "invalid",
          "errors": [
            "First name is required",
            "Invalid email format"
          ],
          "warnings": [
            "Invalid country code (will be left empty)"
          ]
        }
      ]
    }
    "#);
}

#[test]
fn test_json_output_round_trips_leads() {
    let json = leads_to_json(&leads()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let parsed: Vec<ValidatedLead> = serde_json::from_value(value["leads"].clone()).unwrap();
    assert_eq!(parsed, leads());
}

#[test]
fn test_lead_table_lists_messages() {
    let mut table = lead_table(&leads());
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("John Doe"));
    assert!(rendered.contains("Smith"));
    assert!(rendered.contains("error: First name is required"));
    assert!(rendered.contains("warning: Invalid country code"));
    assert!(!rendered.contains('\u{1b}'));
}

#[test]
fn test_summary_table_has_total() {
    let mut table = summary_table(&ImportSummary::from_leads(&leads()));
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("TOTAL"));
    assert!(rendered.contains("Invalid"));
}

#[test]
fn test_country_table_rows() {
    let countries = default_registry().search("france");
    let mut table = country_table(&countries);
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("FR"));
    assert!(rendered.contains("FRA"));
    assert!(rendered.contains("250"));
}

#[test]
fn test_import_report_lists_failures() {
    let report = BulkImportReport {
        imported_count: 2,
        duplicates_skipped: 1,
        invalid_leads: 0,
        errors: vec![FailedLead {
            lead: LeadInput {
                first_name: Some("Ada".into()),
                last_name: Some("Lovelace".into()),
                ..LeadInput::default()
            },
            error: "store offline".into(),
        }],
    };
    let mut table = import_report_table(&report);
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("Duplicates skipped"));
    assert!(rendered.contains("-> Ada Lovelace"));
    assert!(rendered.contains("store offline"));
}
