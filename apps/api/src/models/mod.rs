pub mod contact;
pub mod download;
pub mod status;

pub use contact::{ContactResponse, ContactSubmission, ContactSubmissionCreate, SubmissionStatus};
pub use download::{ResumeDownloadEvent, ResumeDownloadStats};
pub use status::{StatusCheck, StatusCheckCreate};
