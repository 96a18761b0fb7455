//! Bulk import, verification and message generation against stores.

use lead_import::{
    BulkImporter, EmailVerifier, ImportError, InMemoryLeadStore, LeadId, LeadInput, LeadStore,
    LeadUpdate, NewLead, ShapeVerifier, StoreError, StoreResult, StoredLead, VerifyError,
    generate_messages, parse_csv_default, verify_emails,
};

fn input(first: &str, last: &str, email: &str) -> LeadInput {
    LeadInput {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(email.to_string()),
        ..LeadInput::default()
    }
}

/// Store whose creates always fail.
#[derive(Default)]
struct ReadOnlyStore;

impl LeadStore for ReadOnlyStore {
    async fn find_existing(&self, _names: &[(String, String)]) -> StoreResult<Vec<StoredLead>> {
        Ok(Vec::new())
    }

    async fn create(&self, _lead: NewLead) -> StoreResult<StoredLead> {
        Err(StoreError::new("read-only"))
    }

    async fn find_by_ids(&self, _ids: &[LeadId]) -> StoreResult<Vec<StoredLead>> {
        Ok(Vec::new())
    }

    async fn update(&self, _id: LeadId, _update: LeadUpdate) -> StoreResult<StoredLead> {
        Err(StoreError::new("read-only"))
    }
}

/// Verifier that fails for one domain.
struct FlakyVerifier;

impl EmailVerifier for FlakyVerifier {
    async fn verify(&self, email: &str) -> Result<bool, VerifyError> {
        if email.ends_with("@down.example") {
            Err(VerifyError::new("verification service unavailable"))
        } else {
            Ok(true)
        }
    }
}

#[tokio::test]
async fn test_bulk_import_counts() {
    let store = InMemoryLeadStore::new();
    store
        .create(NewLead {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            ..NewLead::default()
        })
        .await
        .unwrap();

    let mut with_country = input(" Grace ", "Hopper", "grace@example.com ");
    with_country.country_code = Some("USA".into());
    with_country.job_title = Some("  ".into());
    let mut bad_country = input("Alan", "Turing", "alan@example.com");
    bad_country.country_code = Some("XYZ".into());

    let leads = vec![
        with_country,
        input("ada", "LOVELACE", "ada2@example.com"),
        input("", "Nobody", "n@example.com"),
        bad_country,
    ];

    let report = BulkImporter::new(&store).import(&leads).await.unwrap();
    assert_eq!(report.imported_count, 2);
    assert_eq!(report.duplicates_skipped, 1);
    assert_eq!(report.invalid_leads, 1);
    assert!(report.errors.is_empty());

    let stored = store.leads().unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[1].first_name, "Grace");
    assert_eq!(stored[1].email, "grace@example.com");
    assert_eq!(stored[1].country_code.as_deref(), Some("US"));
    assert_eq!(stored[1].job_title, None);
    assert_eq!(stored[2].country_code, None);
}

#[tokio::test]
async fn test_bulk_import_rejects_bad_batches() {
    let store = InMemoryLeadStore::new();
    let importer = BulkImporter::new(&store);
    assert_eq!(importer.import(&[]).await, Err(ImportError::EmptyBatch));
    assert_eq!(
        importer.import(&[input("", "", "")]).await,
        Err(ImportError::NoValidLeads)
    );
}

#[tokio::test]
async fn test_bulk_import_collects_create_failures() {
    let store = ReadOnlyStore;
    let report = BulkImporter::new(&store)
        .import(&[input("Ada", "Lovelace", "ada@example.com")])
        .await
        .unwrap();
    assert_eq!(report.imported_count, 0);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].error, "read-only");
}

#[tokio::test]
async fn test_pipeline_output_feeds_bulk_import() {
    let csv = "firstName,lastName,email,countryCode\n\
               John,Doe,john@example.com,840\n\
               ,Smith,invalid-email,INVALID\n";
    let leads = parse_csv_default(csv).unwrap();
    let inputs: Vec<LeadInput> = leads
        .iter()
        .filter(|lead| lead.is_importable())
        .map(|lead| LeadInput::from(&lead.lead))
        .collect();

    let store = InMemoryLeadStore::new();
    let report = BulkImporter::new(&store).import(&inputs).await.unwrap();
    assert_eq!(report.imported_count, 1);
    assert_eq!(store.leads().unwrap()[0].country_code.as_deref(), Some("US"));
}

#[tokio::test]
async fn test_verify_emails_records_results_and_failures() {
    let store = InMemoryLeadStore::new();
    let ok = store
        .create(NewLead {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            ..NewLead::default()
        })
        .await
        .unwrap();
    let down = store
        .create(NewLead {
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            email: "alan@down.example".into(),
            ..NewLead::default()
        })
        .await
        .unwrap();

    let report = verify_emails(&store, &FlakyVerifier, &[ok.id, down.id, 99])
        .await
        .unwrap();
    assert_eq!(report.verified_count, 1);
    assert_eq!(report.results[0].lead_id, ok.id);
    assert!(report.results[0].email_verified);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].lead_name, "Alan Turing");
    assert_eq!(report.errors[0].error, "verification service unavailable");

    let stored = store.find_by_ids(&[ok.id, down.id]).await.unwrap();
    assert_eq!(stored[0].email_verified, Some(true));
    assert_eq!(stored[1].email_verified, None);
}

#[tokio::test]
async fn test_verify_emails_request_errors() {
    let store = InMemoryLeadStore::new();
    assert_eq!(
        verify_emails(&store, &ShapeVerifier, &[]).await,
        Err(ImportError::EmptyLeadIds)
    );
    assert_eq!(
        verify_emails(&store, &ShapeVerifier, &[1]).await,
        Err(ImportError::LeadsNotFound)
    );
}

#[tokio::test]
async fn test_shape_verifier_flags_bad_addresses() {
    let store = InMemoryLeadStore::new();
    let lead = store
        .create(NewLead {
            first_name: "Bad".into(),
            last_name: "Address".into(),
            email: "not-an-email".into(),
            ..NewLead::default()
        })
        .await
        .unwrap();
    let report = verify_emails(&store, &ShapeVerifier, &[lead.id]).await.unwrap();
    assert!(!report.results[0].email_verified);
}

#[tokio::test]
async fn test_generate_messages_renders_and_stores() {
    let store = InMemoryLeadStore::new();
    let lead = store
        .create(NewLead {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            company_name: Some("Analytical Engines".into()),
            ..NewLead::default()
        })
        .await
        .unwrap();

    let report = generate_messages(&store, &[lead.id], "Hello {{firstName}} at {{companyName}}")
        .await
        .unwrap();
    assert_eq!(report.generated_count, 1);
    assert!(report.errors.is_empty());
    assert_eq!(
        store.leads().unwrap()[0].message.as_deref(),
        Some("Hello Ada at Analytical Engines")
    );

    assert_eq!(
        generate_messages(&store, &[lead.id], "  ").await,
        Err(ImportError::EmptyTemplate)
    );
    assert_eq!(
        generate_messages(&store, &[], "Hi").await,
        Err(ImportError::EmptyLeadIds)
    );
}
