//! Runtime configuration

use std::env;

/// Default tracing filter when neither `RUST_LOG` nor `FUNCTION_URL_LOG_FILTER` is set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Largest invocation frame accepted by default (6 MiB)
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 6 * 1024 * 1024;

/// Runtime loop configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Fallback `tracing` filter directive
    pub log_filter: String,

    /// Maximum size of one invocation payload in bytes
    pub max_payload_bytes: usize,
}

impl RuntimeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup. Unset or unparseable values
    /// fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("FUNCTION_URL_LOG_FILTER")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),

            max_payload_bytes: lookup("FUNCTION_URL_MAX_PAYLOAD_BYTES")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_PAYLOAD_BYTES),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
