use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow state of a contact submission.
///
/// Assign-only: every record is created as `New` and nothing in the system
/// advances it. The field exists so an eventual triage workflow has a slot
/// to write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    New,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "new" => Some(SubmissionStatus::New),
            _ => None,
        }
    }
}

/// A contact-form message from a site visitor. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub status: SubmissionStatus,
}

/// Validated payload for a new contact submission.
///
/// Produced by `validation::parse_contact`, never deserialized straight from
/// the request body. The explicit validation step owns field-level errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmissionCreate {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(input: ContactSubmissionCreate) -> Self {
        ContactSubmission {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            company: input.company,
            message: input.message,
            timestamp: Utc::now(),
            status: SubmissionStatus::New,
        }
    }
}

/// Success envelope returned by POST /api/contact.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_create() -> ContactSubmissionCreate {
        ContactSubmissionCreate {
            name: "Priya Nair".to_string(),
            email: "priya.nair@example.com".to_string(),
            company: Some("Lakeview Labs".to_string()),
            message: "Interested in discussing a security role.".to_string(),
        }
    }

    #[test]
    fn test_new_defaults_status_to_new() {
        let submission = ContactSubmission::new(sample_create());
        assert_eq!(submission.status, SubmissionStatus::New);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let submission = ContactSubmission::new(sample_create());
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["status"], "new");
    }

    #[test]
    fn test_company_none_serializes_as_null() {
        let mut input = sample_create();
        input.company = None;
        let value = serde_json::to_value(ContactSubmission::new(input)).unwrap();
        assert!(value["company"].is_null());
    }

    #[test]
    fn test_status_round_trips_through_db_string() {
        let status = SubmissionStatus::New;
        assert_eq!(SubmissionStatus::from_str(status.as_str()), Some(status));
        assert_eq!(SubmissionStatus::from_str("archived"), None);
    }
}
