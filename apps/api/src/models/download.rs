use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One recorded resume download attempt. Immutable after insert.
///
/// The event is recorded whether or not the asset file was actually served,
/// so the counter reflects attempts rather than completed transfers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeDownloadEvent {
    pub id: Uuid,
    pub download_date: DateTime<Utc>,
    pub user_agent: Option<String>,
}

impl ResumeDownloadEvent {
    pub fn new(user_agent: Option<String>) -> Self {
        ResumeDownloadEvent {
            id: Uuid::new_v4(),
            download_date: Utc::now(),
            user_agent,
        }
    }
}

/// Response body for GET /api/resume/stats.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeDownloadStats {
    pub total_downloads: i64,
    pub recent_downloads: Vec<ResumeDownloadEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_keeps_user_agent() {
        let event = ResumeDownloadEvent::new(Some("curl/8.5.0".to_string()));
        assert_eq!(event.user_agent.as_deref(), Some("curl/8.5.0"));
    }

    #[test]
    fn test_event_wire_fields() {
        let event = ResumeDownloadEvent::new(None);
        let value = serde_json::to_value(&event).unwrap();
        assert!(value["id"].is_string());
        assert!(value["download_date"].is_string());
        assert!(value["user_agent"].is_null());
    }
}
