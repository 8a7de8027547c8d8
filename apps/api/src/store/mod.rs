//! Durable persistence for the three record kinds.
//!
//! The store is append-only by construction: the trait exposes insert, list
//! and count operations and nothing else. No update or delete exists anywhere
//! in the system. Every operation touches a single record, so the store
//! handle is safe for concurrent use by independent requests without any
//! cross-request coordination.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ContactSubmission, ResumeDownloadEvent, StatusCheck};

pub use memory::MemorySubmissionStore;
pub use postgres::PgSubmissionStore;

/// Failures surfaced by store operations.
///
/// Every variant names the store method that failed. The API layer maps all
/// of them to an opaque 500; operation and detail stay in the server log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database rejected or failed the operation.
    #[error("{operation} failed: {source}")]
    Database {
        operation: &'static str,
        source: sqlx::Error,
    },

    /// The store could not be reached at all.
    #[error("{operation} failed: store unavailable: {reason}")]
    Unavailable {
        operation: &'static str,
        reason: String,
    },

    /// A persisted record no longer matches the expected shape.
    #[error("{operation} returned a corrupt record: {detail}")]
    Decode {
        operation: &'static str,
        detail: String,
    },
}

impl StoreError {
    pub(crate) fn database(operation: &'static str, source: sqlx::Error) -> Self {
        StoreError::Database { operation, source }
    }

    pub(crate) fn unavailable(operation: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Unavailable {
            operation,
            reason: reason.into(),
        }
    }
}

/// Persistence operations over the three independent collections.
///
/// Listing methods that take a `limit` return at most that many records;
/// `list_contacts` and `recent_download_events` order by their timestamp
/// field descending (newest first). `list_status_checks` makes no ordering
/// guarantee. An empty result is a valid, non-error outcome everywhere.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), StoreError>;

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError>;

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError>;

    async fn list_contacts(&self, limit: i64) -> Result<Vec<ContactSubmission>, StoreError>;

    async fn insert_download_event(&self, event: &ResumeDownloadEvent) -> Result<(), StoreError>;

    async fn count_download_events(&self) -> Result<i64, StoreError>;

    async fn recent_download_events(
        &self,
        limit: i64,
    ) -> Result<Vec<ResumeDownloadEvent>, StoreError>;
}
