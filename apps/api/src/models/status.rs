use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A liveness ping recorded by a client. Written once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

impl StatusCheck {
    /// Builds a new record with a fresh id and the current time.
    pub fn new(input: StatusCheckCreate) -> Self {
        StatusCheck {
            id: Uuid::new_v4(),
            client_name: input.client_name,
            timestamp: Utc::now(),
        }
    }
}
