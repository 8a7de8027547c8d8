use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default path of the rendered resume PDF. The service config and the
/// `render-resume` binary both fall back to this path when
/// `RESUME_ASSET_PATH` is unset.
pub const DEFAULT_RESUME_ASSET_PATH: &str = "assets/Rohan_Verma_Resume.pdf";

/// Application configuration loaded from environment variables.
/// Only `DATABASE_URL` is required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Comma-separated allow-list for CORS, `*` for any origin.
    pub cors_origins: String,
    /// Location of the pre-rendered resume PDF served by the download route.
    pub resume_asset_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            cors_origins: std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            resume_asset_path: std::env::var("RESUME_ASSET_PATH")
                .unwrap_or_else(|_| DEFAULT_RESUME_ASSET_PATH.to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
