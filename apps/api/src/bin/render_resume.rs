use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use portfolio_api::config::DEFAULT_RESUME_ASSET_PATH;
use portfolio_api::render;

/// Renders the resume PDF that the download endpoint serves.
#[derive(Parser)]
#[command(name = "render-resume", version)]
struct Args {
    /// Where to write the PDF. Defaults to the path the service serves from.
    #[arg(long, env = "RESUME_ASSET_PATH", default_value = DEFAULT_RESUME_ASSET_PATH)]
    out: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match render::generate_resume_pdf(&args.out) {
        Ok(summary) => {
            println!(
                "Wrote {} ({} pages, {} sections, {} bytes)",
                args.out.display(),
                summary.pages,
                summary.sections,
                summary.bytes_written
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Failed to render resume: {error}");
            ExitCode::FAILURE
        }
    }
}
