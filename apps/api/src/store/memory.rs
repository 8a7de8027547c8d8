//! In-memory [`SubmissionStore`] used by the test suite.
//!
//! Vectors behind async `RwLock`s, ordered by the same rules as the Postgres
//! queries. `MemorySubmissionStore::failing()` builds a store whose every
//! operation errors, which lets handler tests drive the storage-failure path
//! without a database.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{ContactSubmission, ResumeDownloadEvent, StatusCheck};

use super::{StoreError, SubmissionStore};

#[derive(Default, Clone)]
pub struct MemorySubmissionStore {
    status_checks: Arc<RwLock<Vec<StatusCheck>>>,
    contacts: Arc<RwLock<Vec<ContactSubmission>>>,
    downloads: Arc<RwLock<Vec<ResumeDownloadEvent>>>,
    fail: bool,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation reports an outage.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check_available(&self, operation: &'static str) -> Result<(), StoreError> {
        if self.fail {
            Err(StoreError::unavailable(operation, "simulated outage"))
        } else {
            Ok(())
        }
    }
}

fn clamp(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), StoreError> {
        self.check_available("insert_status_check")?;
        self.status_checks.write().await.push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError> {
        self.check_available("list_status_checks")?;
        let checks = self.status_checks.read().await;
        Ok(checks.iter().take(clamp(limit)).cloned().collect())
    }

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        self.check_available("insert_contact")?;
        self.contacts.write().await.push(submission.clone());
        Ok(())
    }

    async fn list_contacts(&self, limit: i64) -> Result<Vec<ContactSubmission>, StoreError> {
        self.check_available("list_contacts")?;
        let mut contacts: Vec<ContactSubmission> = self.contacts.read().await.clone();
        contacts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        contacts.truncate(clamp(limit));
        Ok(contacts)
    }

    async fn insert_download_event(&self, event: &ResumeDownloadEvent) -> Result<(), StoreError> {
        self.check_available("insert_download_event")?;
        self.downloads.write().await.push(event.clone());
        Ok(())
    }

    async fn count_download_events(&self) -> Result<i64, StoreError> {
        self.check_available("count_download_events")?;
        Ok(self.downloads.read().await.len() as i64)
    }

    async fn recent_download_events(
        &self,
        limit: i64,
    ) -> Result<Vec<ResumeDownloadEvent>, StoreError> {
        self.check_available("recent_download_events")?;
        let mut events: Vec<ResumeDownloadEvent> = self.downloads.read().await.clone();
        events.sort_by(|a, b| b.download_date.cmp(&a.download_date));
        events.truncate(clamp(limit));
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use crate::models::{ContactSubmissionCreate, SubmissionStatus};

    use super::*;

    fn contact_at(offset_secs: i64, name: &str) -> ContactSubmission {
        let mut submission = ContactSubmission::new(ContactSubmissionCreate {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            company: None,
            message: "Hello there, this is a long enough message.".to_string(),
        });
        submission.timestamp = Utc::now() + Duration::seconds(offset_secs);
        submission
    }

    #[tokio::test]
    async fn test_contacts_listed_newest_first() {
        let store = MemorySubmissionStore::new();
        store.insert_contact(&contact_at(0, "first")).await.unwrap();
        store.insert_contact(&contact_at(20, "third")).await.unwrap();
        store.insert_contact(&contact_at(10, "second")).await.unwrap();

        let listed = store.list_contacts(100).await.unwrap();
        let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
        assert!(listed.iter().all(|c| c.status == SubmissionStatus::New));
    }

    #[tokio::test]
    async fn test_contact_list_respects_limit() {
        let store = MemorySubmissionStore::new();
        for i in 0..5 {
            store.insert_contact(&contact_at(i, "bulk")).await.unwrap();
        }
        assert_eq!(store.list_contacts(3).await.unwrap().len(), 3);
        assert_eq!(store.list_contacts(0).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_download_stats_track_inserts() {
        let store = MemorySubmissionStore::new();
        assert_eq!(store.count_download_events().await.unwrap(), 0);

        for i in 0..12 {
            let mut event = ResumeDownloadEvent::new(Some(format!("agent-{i}")));
            event.download_date = Utc::now() + Duration::seconds(i);
            store.insert_download_event(&event).await.unwrap();
        }

        assert_eq!(store.count_download_events().await.unwrap(), 12);
        let recent = store.recent_download_events(10).await.unwrap();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].user_agent.as_deref(), Some("agent-11"));
        assert_eq!(recent[9].user_agent.as_deref(), Some("agent-2"));
    }

    #[tokio::test]
    async fn test_failing_store_reports_unavailable() {
        let store = MemorySubmissionStore::failing();
        let err = store
            .insert_status_check(&StatusCheck::new(crate::models::StatusCheckCreate {
                client_name: "probe".to_string(),
            }))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));
        assert!(err.to_string().contains("insert_status_check"));
        assert!(store.list_status_checks(10).await.is_err());
        assert!(store.count_download_events().await.is_err());
    }
}
