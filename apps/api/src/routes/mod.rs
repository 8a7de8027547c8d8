pub mod contact;
pub mod resume;
pub mod root;
pub mod status;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/", get(root::handle_root))
        .route(
            "/api/status",
            post(status::handle_create_status).get(status::handle_list_status),
        )
        .route(
            "/api/contact",
            post(contact::handle_submit_contact).get(contact::handle_list_contacts),
        )
        .route("/api/resume/download", get(resume::handle_download))
        .route("/api/resume/stats", get(resume::handle_stats))
        .with_state(state)
}

/// CORS policy from the configured origin list.
///
/// `*` admits any origin; otherwise the comma-separated entries become the
/// allow-list. Entries that are not valid header values are skipped with a
/// warning. All methods and headers are allowed either way.
pub fn cors_layer(origins: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.trim() == "*" {
        return layer.allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .filter_map(|origin| {
            let trimmed = origin.trim();
            match trimmed.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {trimmed:?}");
                    None
                }
            }
        })
        .collect();
    layer.allow_origin(allowed)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::Router;

    use crate::state::AppState;
    use crate::store::MemorySubmissionStore;

    /// Router backed by a fresh in-memory store, serving the given asset
    /// path. The store handle is returned so tests can seed or inspect it.
    pub fn test_router_at(asset_path: PathBuf) -> (Router, MemorySubmissionStore) {
        let store = MemorySubmissionStore::new();
        let state = AppState::new(Arc::new(store.clone()), asset_path);
        (super::build_router(state), store)
    }

    /// Router whose asset path points nowhere, for tests that never touch
    /// the download route or want the placeholder.
    pub fn test_router() -> (Router, MemorySubmissionStore) {
        test_router_at(std::env::temp_dir().join("portfolio-api-test-missing.pdf"))
    }

    /// Router whose every store operation fails.
    pub fn failing_router() -> Router {
        let state = AppState::new(
            Arc::new(MemorySubmissionStore::failing()),
            std::env::temp_dir().join("portfolio-api-test-missing.pdf"),
        );
        super::build_router(state)
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::testing::test_router;
    use super::*;

    async fn get_with_origin(app: Router, origin: &str) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .uri("/api/")
                .header(header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_wildcard_cors_allows_any_origin() {
        let (app, _store) = test_router();
        let app = app.layer(cors_layer("*"));

        let response = get_with_origin(app, "http://anywhere.example").await;
        assert_eq!(response.status(), StatusCode::OK);
        let allowed = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap();
        assert_eq!(allowed, "*");
    }

    #[tokio::test]
    async fn test_allow_list_echoes_known_origin() {
        let (app, _store) = test_router();
        let app = app.layer(cors_layer("http://localhost:3000, https://rohanverma.dev"));

        let response = get_with_origin(app, "http://localhost:3000").await;
        let allowed = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap();
        assert_eq!(allowed, "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_allow_list_rejects_unknown_origin() {
        let (app, _store) = test_router();
        let app = app.layer(cors_layer("https://rohanverma.dev"));

        let response = get_with_origin(app, "http://evil.example").await;
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
