//! Outreach message generation from templates.
//!
//! Templates reference lead fields with `{{fieldName}}` placeholders using
//! the camelCase field names (`{{firstName}}`, `{{companyName}}`, ...).

use lead_model::CanonicalField;
use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result};
use crate::store::{LeadId, LeadStore, LeadUpdate, StoredLead};
use crate::verify::LeadFailure;

/// Outcome of [`generate_messages`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReport {
    pub generated_count: usize,
    pub errors: Vec<LeadFailure>,
}

/// Render `template` for one lead.
///
/// Whitespace inside the braces is ignored. Unknown placeholders are kept
/// verbatim and missing optional values render as empty text.
pub fn render_template(template: &str, lead: &StoredLead) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after_open[..end].trim();
        match placeholder_value(name, lead) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}

fn placeholder_value<'a>(name: &str, lead: &'a StoredLead) -> Option<&'a str> {
    let field = CanonicalField::ALL
        .into_iter()
        .find(|field| field.header_name() == name)?;
    Some(match field {
        CanonicalField::FirstName => lead.first_name.as_str(),
        CanonicalField::LastName => lead.last_name.as_str(),
        CanonicalField::Email => lead.email.as_str(),
        CanonicalField::JobTitle => lead.job_title.as_deref().unwrap_or_default(),
        CanonicalField::CountryCode => lead.country_code.as_deref().unwrap_or_default(),
        CanonicalField::CompanyName => lead.company_name.as_deref().unwrap_or_default(),
    })
}

/// Render and store a message for every lead in `lead_ids`.
///
/// # Errors
///
/// - [`ImportError::EmptyLeadIds`] when `lead_ids` is empty
/// - [`ImportError::EmptyTemplate`] when `template` is blank
/// - [`ImportError::LeadsNotFound`] when none of the ids exist
/// - [`ImportError::Store`] when the leads cannot be loaded
pub async fn generate_messages<S>(
    store: &S,
    lead_ids: &[LeadId],
    template: &str,
) -> Result<MessageReport>
where
    S: LeadStore,
{
    if lead_ids.is_empty() {
        return Err(ImportError::EmptyLeadIds);
    }
    if template.trim().is_empty() {
        return Err(ImportError::EmptyTemplate);
    }

    let leads = store.find_by_ids(lead_ids).await?;
    if leads.is_empty() {
        return Err(ImportError::LeadsNotFound);
    }

    let mut report = MessageReport::default();
    for lead in leads {
        let message = render_template(template, &lead);
        match store.update(lead.id, LeadUpdate::message(message)).await {
            Ok(_) => report.generated_count += 1,
            Err(err) => {
                tracing::warn!(lead_id = lead.id, error = %err, "Failed to store message");
                report.errors.push(LeadFailure {
                    lead_id: lead.id,
                    lead_name: lead.display_name(),
                    error: err.to_string(),
                });
            }
        }
    }

    tracing::info!(
        generated = report.generated_count,
        failed = report.errors.len(),
        "Message generation finished"
    );

    Ok(report)
}
