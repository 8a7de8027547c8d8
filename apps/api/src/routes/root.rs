use axum::Json;
use serde_json::{json, Value};

/// Fixed greeting served at the API root.
const ROOT_MESSAGE: &str = "Rohan Verma Portfolio API - Ready to serve!";

/// GET /api/
pub async fn handle_root() -> Json<Value> {
    Json(json!({ "message": ROOT_MESSAGE }))
}
