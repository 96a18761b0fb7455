//! Email verification of stored leads.

use std::future::Future;

use lead_model::redact::redact_value;
use lead_validate::is_valid_email;
use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result, VerifyError};
use crate::store::{LeadId, LeadStore, LeadUpdate};

/// Decides whether an email address is deliverable.
pub trait EmailVerifier: Send + Sync {
    fn verify(
        &self,
        email: &str,
    ) -> impl Future<Output = std::result::Result<bool, VerifyError>> + Send;
}

/// Verifier that only checks the address shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeVerifier;

impl EmailVerifier for ShapeVerifier {
    async fn verify(&self, email: &str) -> std::result::Result<bool, VerifyError> {
        Ok(is_valid_email(email.trim()))
    }
}

/// Verification outcome for one lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub lead_id: LeadId,
    pub email_verified: bool,
}

/// A per-lead failure in a batch operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFailure {
    pub lead_id: LeadId,
    pub lead_name: String,
    pub error: String,
}

/// Outcome of [`verify_emails`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    /// Leads whose verification completed and was stored.
    pub verified_count: usize,
    pub results: Vec<VerificationResult>,
    pub errors: Vec<LeadFailure>,
}

/// Verify the email of every stored lead in `lead_ids` and persist the
/// outcome.
///
/// # Errors
///
/// - [`ImportError::EmptyLeadIds`] when `lead_ids` is empty
/// - [`ImportError::LeadsNotFound`] when none of the ids exist
/// - [`ImportError::Store`] when the leads cannot be loaded
pub async fn verify_emails<S, V>(
    store: &S,
    verifier: &V,
    lead_ids: &[LeadId],
) -> Result<VerificationReport>
where
    S: LeadStore,
    V: EmailVerifier,
{
    if lead_ids.is_empty() {
        return Err(ImportError::EmptyLeadIds);
    }

    let leads = store.find_by_ids(lead_ids).await?;
    if leads.is_empty() {
        return Err(ImportError::LeadsNotFound);
    }

    let mut report = VerificationReport::default();
    for lead in leads {
        let outcome = match verifier.verify(&lead.email).await {
            Ok(verified) => store
                .update(lead.id, LeadUpdate::email_verified(verified))
                .await
                .map(|_| verified)
                .map_err(|err| err.to_string()),
            Err(err) => Err(err.to_string()),
        };

        match outcome {
            Ok(email_verified) => {
                report.verified_count += 1;
                report.results.push(VerificationResult {
                    lead_id: lead.id,
                    email_verified,
                });
            }
            Err(error) => {
                tracing::warn!(
                    lead_id = lead.id,
                    email = redact_value(&lead.email),
                    %error,
                    "Email verification failed"
                );
                report.errors.push(LeadFailure {
                    lead_id: lead.id,
                    lead_name: lead.display_name(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        verified = report.verified_count,
        failed = report.errors.len(),
        "Email verification finished"
    );

    Ok(report)
}
