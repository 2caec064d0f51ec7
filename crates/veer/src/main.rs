//! Veer CLI binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use veer::cli::Cli;

/// Main entry point for the veer CLI.
///
/// Uses tokio's current_thread runtime; the only async work is reading
/// graph and config files.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=veer=trace veer search --graph tree -s A -G Q
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("veer=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting veer CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Veer CLI completed successfully");
    Ok(())
}
