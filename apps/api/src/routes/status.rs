use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::state::AppState;

/// Most probes a single listing returns.
const STATUS_LIST_LIMIT: i64 = 1000;

/// POST /api/status
pub async fn handle_create_status(
    State(state): State<AppState>,
    Json(req): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, AppError> {
    let check = StatusCheck::new(req);
    state.store.insert_status_check(&check).await?;
    Ok(Json(check))
}

/// GET /api/status
pub async fn handle_list_status(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let checks = state.store.list_status_checks(STATUS_LIST_LIMIT).await?;
    Ok(Json(checks))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::routes::testing::{failing_router, test_router};
    use crate::store::SubmissionStore;

    fn post_status(payload: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/status")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_status_echoes_the_check() {
        let (app, _store) = test_router();

        let response = app
            .oneshot(post_status(&json!({ "client_name": "web-probe" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["client_name"], "web-probe");
        let id = Uuid::parse_str(value["id"].as_str().unwrap()).unwrap();
        assert_ne!(id, Uuid::nil(), "each check gets a fresh id");
        assert!(value["timestamp"].is_string(), "timestamp should be serialized");
    }

    #[tokio::test]
    async fn test_created_status_appears_in_listing() {
        let (app, _store) = test_router();

        let response = app
            .clone()
            .oneshot(post_status(&json!({ "client_name": "uptime-bot" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let checks: Vec<Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0]["client_name"], "uptime-bot");
    }

    #[tokio::test]
    async fn test_create_status_without_client_name_is_rejected() {
        let (app, store) = test_router();

        let response = app.oneshot(post_status(&json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(
            store.list_status_checks(10).await.unwrap().is_empty(),
            "rejected probe must not be recorded"
        );
    }

    #[tokio::test]
    async fn test_store_outage_surfaces_as_internal_error() {
        let app = failing_router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "STORAGE_ERROR");
        assert_eq!(
            value["error"]["message"], "Internal server error",
            "store details must not leak to clients"
        );
    }
}
