//! Static resume document generation.
//!
//! The renderer never runs per request: the download route serves whatever
//! file the last render left on disk, and this module is driven by the
//! `render-resume` binary (or a test). The fixed content is paginated into
//! drawing operations, assembled into PDF bytes, and written atomically.

pub mod content;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod style;

use std::io::Write as _;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

use content::ResumeContent;

pub const DOCUMENT_TITLE: &str = "Rohan Verma - Resume";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf assembly failed: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// What a render produced, for logging and CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub pages: usize,
    pub sections: usize,
    pub bytes_written: u64,
}

/// Renders the standard document with today's date in the footer.
pub fn generate_resume_pdf(path: &Path) -> Result<RenderSummary, RenderError> {
    render_with_date(path, Utc::now().date_naive())
}

/// Renders with a pinned footer date.
///
/// The write is atomic: bytes go to a temp file in the destination directory
/// and are renamed over `path`, so a concurrent reader never sees a partial
/// document. Missing parent directories are created.
pub fn render_with_date(path: &Path, footer_date: NaiveDate) -> Result<RenderSummary, RenderError> {
    let content = ResumeContent::standard();
    let paginated = layout::paginate(&content, footer_date);
    let bytes = pdf::write_document(&paginated, DOCUMENT_TITLE)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.persist(path).map_err(|e| RenderError::Io(e.error))?;

    let summary = RenderSummary {
        pages: paginated.pages.len(),
        sections: paginated.sections,
        bytes_written: bytes.len() as u64,
    };
    info!(
        path = %path.display(),
        pages = summary.pages,
        bytes = summary.bytes_written,
        "resume PDF written"
    );
    Ok(summary)
}
