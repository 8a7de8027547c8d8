//! Postgres-backed [`SubmissionStore`].
//!
//! Queries are runtime-checked (`sqlx::query_as` with positional binds), so
//! the crate builds without a live database. Contact rows persist the status
//! as plain text and convert back through a private row struct; the other two
//! collections map directly onto their model types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    ContactSubmission, ResumeDownloadEvent, StatusCheck, SubmissionStatus,
};

use super::{StoreError, SubmissionStore};

pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: Uuid,
    name: String,
    email: String,
    company: Option<String>,
    message: String,
    timestamp: DateTime<Utc>,
    status: String,
}

impl ContactRow {
    fn decode(self) -> Result<ContactSubmission, String> {
        let status = SubmissionStatus::from_str(&self.status)
            .ok_or_else(|| format!("contact {} has unknown status {:?}", self.id, self.status))?;
        Ok(ContactSubmission {
            id: self.id,
            name: self.name,
            email: self.email,
            company: self.company,
            message: self.message,
            timestamp: self.timestamp,
            status,
        })
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO status_checks (id, client_name, timestamp) VALUES ($1, $2, $3)",
        )
        .bind(check.id)
        .bind(&check.client_name)
        .bind(check.timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database("insert_status_check", e))?;
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, StoreError> {
        let checks = sqlx::query_as::<_, StatusCheck>(
            "SELECT id, client_name, timestamp FROM status_checks LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::database("list_status_checks", e))?;
        Ok(checks)
    }

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO contact_submissions (id, name, email, company, message, timestamp, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(submission.id)
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.company)
        .bind(&submission.message)
        .bind(submission.timestamp)
        .bind(submission.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database("insert_contact", e))?;
        Ok(())
    }

    async fn list_contacts(&self, limit: i64) -> Result<Vec<ContactSubmission>, StoreError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, email, company, message, timestamp, status \
             FROM contact_submissions ORDER BY timestamp DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::database("list_contacts", e))?;
        rows.into_iter()
            .map(|row| {
                row.decode().map_err(|detail| StoreError::Decode {
                    operation: "list_contacts",
                    detail,
                })
            })
            .collect()
    }

    async fn insert_download_event(&self, event: &ResumeDownloadEvent) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO resume_downloads (id, download_date, user_agent) VALUES ($1, $2, $3)",
        )
        .bind(event.id)
        .bind(event.download_date)
        .bind(&event.user_agent)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database("insert_download_event", e))?;
        Ok(())
    }

    async fn count_download_events(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM resume_downloads")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::database("count_download_events", e))?;
        Ok(count)
    }

    async fn recent_download_events(
        &self,
        limit: i64,
    ) -> Result<Vec<ResumeDownloadEvent>, StoreError> {
        let events = sqlx::query_as::<_, ResumeDownloadEvent>(
            "SELECT id, download_date, user_agent FROM resume_downloads \
             ORDER BY download_date DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::database("recent_download_events", e))?;
        Ok(events)
    }
}
