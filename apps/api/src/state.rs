use std::path::PathBuf;
use std::sync::Arc;

use crate::store::SubmissionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable persistence backend. Production wires `PgSubmissionStore`;
    /// tests inject `MemorySubmissionStore`.
    pub store: Arc<dyn SubmissionStore>,
    /// Location of the pre-rendered resume PDF.
    pub resume_asset_path: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<dyn SubmissionStore>, resume_asset_path: PathBuf) -> Self {
        Self {
            store,
            resume_asset_path,
        }
    }
}
