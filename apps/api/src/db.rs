use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// One statement per entry; executed in order at startup. Idempotent, so a
/// restart against an already-initialized database is a no-op.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS status_checks (
        id UUID PRIMARY KEY,
        client_name TEXT NOT NULL,
        timestamp TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS contact_submissions (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        company TEXT,
        message TEXT NOT NULL,
        timestamp TIMESTAMPTZ NOT NULL,
        status TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_contact_submissions_timestamp
        ON contact_submissions (timestamp DESC)",
    "CREATE TABLE IF NOT EXISTS resume_downloads (
        id UUID PRIMARY KEY,
        download_date TIMESTAMPTZ NOT NULL,
        user_agent TEXT
    )",
    "CREATE INDEX IF NOT EXISTS idx_resume_downloads_download_date
        ON resume_downloads (download_date DESC)",
];

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Applies the schema statements against the pool.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema initialized");
    Ok(())
}
