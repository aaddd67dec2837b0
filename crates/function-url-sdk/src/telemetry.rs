//! Tracing setup for handler processes
//!
//! stdout carries IPC frames, so every log line goes to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::RuntimeConfig;
use crate::error::HandlerError;

/// Build the filter: `RUST_LOG` wins, then the configured fallback.
pub fn env_filter(config: &RuntimeConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}

/// Install the global subscriber
pub fn init(config: &RuntimeConfig) -> Result<(), HandlerError> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| HandlerError::Telemetry(e.to_string()))
}
