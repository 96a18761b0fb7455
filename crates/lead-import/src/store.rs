//! Lead persistence interface.
//!
//! The importer only needs four operations from a database. Implementations
//! are async; the in-memory store backs tests and dry runs.

use std::future::Future;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Identifier assigned by the store.
pub type LeadId = u64;

/// A persisted lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLead {
    pub id: LeadId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: Option<String>,
    /// Alpha-2, or `None` when the source code was unknown.
    pub country_code: Option<String>,
    pub company_name: Option<String>,
    /// `None` until a verification has run.
    pub email_verified: Option<bool>,
    /// Last generated outreach message.
    pub message: Option<String>,
}

impl StoredLead {
    /// "First Last" with surrounding whitespace removed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Values for a lead about to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub country_code: Option<String>,
    pub company_name: Option<String>,
}

/// Partial update; `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadUpdate {
    pub email_verified: Option<bool>,
    pub message: Option<String>,
}

impl LeadUpdate {
    pub fn email_verified(verified: bool) -> Self {
        Self {
            email_verified: Some(verified),
            ..Self::default()
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Persistence operations used by the import collaborators.
pub trait LeadStore: Send + Sync {
    /// Leads whose first and last name match any of `names`.
    fn find_existing(
        &self,
        names: &[(String, String)],
    ) -> impl Future<Output = StoreResult<Vec<StoredLead>>> + Send;

    /// Persist a new lead and return it with its id.
    fn create(&self, lead: NewLead) -> impl Future<Output = StoreResult<StoredLead>> + Send;

    /// Leads with the given ids; unknown ids are ignored.
    fn find_by_ids(&self, ids: &[LeadId])
    -> impl Future<Output = StoreResult<Vec<StoredLead>>> + Send;

    /// Apply `update` to one lead.
    fn update(
        &self,
        id: LeadId,
        update: LeadUpdate,
    ) -> impl Future<Output = StoreResult<StoredLead>> + Send;
}

/// Vector-backed [`LeadStore`].
///
/// Name matching in [`LeadStore::find_existing`] is case-insensitive.
#[derive(Debug, Default)]
pub struct InMemoryLeadStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    leads: Vec<StoredLead>,
    next_id: LeadId,
}

impl InMemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored lead in insertion order.
    pub fn leads(&self) -> StoreResult<Vec<StoredLead>> {
        Ok(self.lock()?.leads.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().map_or(0, |inner| inner.leads.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::new("lead store lock poisoned"))
    }
}

impl LeadStore for InMemoryLeadStore {
    async fn find_existing(&self, names: &[(String, String)]) -> StoreResult<Vec<StoredLead>> {
        let inner = self.lock()?;
        Ok(inner
            .leads
            .iter()
            .filter(|lead| {
                names.iter().any(|(first, last)| {
                    lead.first_name.eq_ignore_ascii_case(first)
                        && lead.last_name.eq_ignore_ascii_case(last)
                })
            })
            .cloned()
            .collect())
    }

    async fn create(&self, lead: NewLead) -> StoreResult<StoredLead> {
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let stored = StoredLead {
            id: inner.next_id,
            first_name: lead.first_name,
            last_name: lead.last_name,
            email: lead.email,
            job_title: lead.job_title,
            country_code: lead.country_code,
            company_name: lead.company_name,
            email_verified: None,
            message: None,
        };
        inner.leads.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_ids(&self, ids: &[LeadId]) -> StoreResult<Vec<StoredLead>> {
        let inner = self.lock()?;
        Ok(inner
            .leads
            .iter()
            .filter(|lead| ids.contains(&lead.id))
            .cloned()
            .collect())
    }

    async fn update(&self, id: LeadId, update: LeadUpdate) -> StoreResult<StoredLead> {
        let mut inner = self.lock()?;
        let lead = inner
            .leads
            .iter_mut()
            .find(|lead| lead.id == id)
            .ok_or_else(|| StoreError::new(format!("lead {id} not found")))?;
        if let Some(verified) = update.email_verified {
            lead.email_verified = Some(verified);
        }
        if let Some(message) = update.message {
            lead.message = Some(message);
        }
        Ok(lead.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_lead(first: &str, last: &str) -> NewLead {
        NewLead {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            ..NewLead::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = InMemoryLeadStore::new();
        let a = store.create(new_lead("Ada", "Lovelace")).await.unwrap();
        let b = store.create(new_lead("Alan", "Turing")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_find_existing_ignores_case() {
        let store = InMemoryLeadStore::new();
        store.create(new_lead("Ada", "Lovelace")).await.unwrap();
        let found = store
            .find_existing(&[("ada".to_string(), "LOVELACE".to_string())])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_missing_id() {
        let store = InMemoryLeadStore::new();
        let lead = store.create(new_lead("Ada", "Lovelace")).await.unwrap();
        let updated = store
            .update(lead.id, LeadUpdate::email_verified(true))
            .await
            .unwrap();
        assert_eq!(updated.email_verified, Some(true));
        assert_eq!(updated.message, None);
        assert!(store.update(99, LeadUpdate::message("hi")).await.is_err());
    }
}
