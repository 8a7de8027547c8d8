use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::{ContactResponse, ContactSubmission};
use crate::state::AppState;
use crate::validation;

/// Acknowledgment sent back for every accepted submission.
const CONTACT_ACK: &str = "Thank you for your message! I will get back to you within 24 hours.";

/// Most submissions a single listing returns, newest first.
const CONTACT_LIST_LIMIT: i64 = 100;

/// POST /api/contact
///
/// The body is taken as raw JSON so field problems can be reported all at
/// once instead of failing on the first deserialization error.
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ContactResponse>, AppError> {
    let form = validation::parse_contact(&payload).map_err(AppError::Validation)?;
    let submission = ContactSubmission::new(form);
    state.store.insert_contact(&submission).await?;
    info!(
        name = %submission.name,
        email = %submission.email,
        "contact form submitted"
    );
    Ok(Json(ContactResponse {
        success: true,
        message: CONTACT_ACK.to_string(),
        id: submission.id,
    }))
}

/// GET /api/contact
pub async fn handle_list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmission>>, AppError> {
    let submissions = state.store.list_contacts(CONTACT_LIST_LIMIT).await?;
    Ok(Json(submissions))
}
