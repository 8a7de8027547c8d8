use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{ResumeDownloadEvent, ResumeDownloadStats};
use crate::state::AppState;

/// Filename offered to the browser, independent of where the asset lives.
const DOWNLOAD_FILENAME: &str = "Rohan_Verma_Cybersecurity_Resume.pdf";

/// Recent events included in the stats payload, newest first.
const RECENT_DOWNLOADS_LIMIT: i64 = 10;

/// GET /api/resume/download
///
/// The download event is recorded before the asset is probed, so attempts
/// that end up served the placeholder still count towards the stats.
pub async fn handle_download(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let event = ResumeDownloadEvent::new(user_agent);
    state.store.insert_download_event(&event).await?;

    match tokio::fs::read(&state.resume_asset_path).await {
        Ok(bytes) => {
            info!(
                user_agent = event.user_agent.as_deref().unwrap_or("unknown"),
                "resume downloaded"
            );
            let disposition = format!("attachment; filename=\"{DOWNLOAD_FILENAME}\"");
            Ok((
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response())
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            if let Some(parent) = state.resume_asset_path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
            warn!(
                path = %state.resume_asset_path.display(),
                "resume asset missing, serving placeholder"
            );
            Ok(Json(json!({
                "success": true,
                "message": "Resume download will begin shortly. Please check back later for the PDF file.",
                "note": "Resume file is being prepared"
            }))
            .into_response())
        }
        Err(error) => Err(AppError::Io(error)),
    }
}

/// GET /api/resume/stats
pub async fn handle_stats(
    State(state): State<AppState>,
) -> Result<Json<ResumeDownloadStats>, AppError> {
    let total_downloads = state.store.count_download_events().await?;
    let recent_downloads = state
        .store
        .recent_download_events(RECENT_DOWNLOADS_LIMIT)
        .await?;
    Ok(Json(ResumeDownloadStats {
        total_downloads,
        recent_downloads,
    }))
}
