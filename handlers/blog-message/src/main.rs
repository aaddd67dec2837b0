//! Process entry point: serves the blog message handler over framed stdin/stdout.

use anyhow::{Context, Result};
use function_url_sdk::{ipc, telemetry, RuntimeConfig};

mod handler;

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    telemetry::init(&config).context("Failed to initialize tracing")?;

    tracing::info!(
        max_payload_bytes = config.max_payload_bytes,
        "Starting blog-message handler"
    );

    let answered = ipc::serve_stdio(&handler::handle, &config)
        .context("Invocation loop failed")?;

    tracing::info!(answered, "Handler exiting");
    Ok(())
}
