//! Lead intake pipeline and import collaborators.
//!
//! - [`parse_csv`]: CSV text to classified leads (tokenize, normalize, validate)
//! - [`BulkImporter`]: persist leads, skipping incomplete ones and known names
//! - [`verify_emails`]: run an [`EmailVerifier`] over stored leads
//! - [`generate_messages`]: render a template for stored leads
//!
//! Persistence goes through the [`LeadStore`] trait; [`InMemoryLeadStore`]
//! is a ready-made implementation for tests and dry runs.
//!
//! # Example
//!
//! ```
//! use lead_import::{ImportSummary, parse_csv_default};
//!
//! let csv = "firstName,lastName,email,countryCode\n\
//!            John,Doe,john@example.com,840\n\
//!            ,Smith,invalid-email,INVALID\n";
//! let leads = parse_csv_default(csv)?;
//!
//! assert_eq!(leads[0].lead.country_code.as_deref(), Some("US"));
//! let summary = ImportSummary::from_leads(&leads);
//! assert_eq!((summary.valid, summary.invalid), (1, 1));
//! # Ok::<(), lead_ingest::IngestError>(())
//! ```

mod bulk;
mod error;
mod message;
mod pipeline;
mod store;
mod verify;

// === Error Types ===
pub use error::{ImportError, Result, StoreError, StoreResult, VerifyError};

// === Pipeline ===
pub use pipeline::{ImportSummary, PipelineOptions, parse_csv, parse_csv_default};

// === Persistence ===
pub use store::{InMemoryLeadStore, LeadId, LeadStore, LeadUpdate, NewLead, StoredLead};

// === Collaborators ===
pub use bulk::{BulkImportReport, BulkImporter, FailedLead, LeadInput, to_alpha2_or_none};
pub use message::{MessageReport, generate_messages, render_template};
pub use verify::{
    EmailVerifier, LeadFailure, ShapeVerifier, VerificationReport, VerificationResult,
    verify_emails,
};
