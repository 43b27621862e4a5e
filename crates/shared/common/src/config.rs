//! Shared configuration structures.

use serde::{Deserialize, Serialize};

use domain::{DEFAULT_SESSION_SWEEP_INTERVAL_SECS, DEFAULT_SESSION_TTL_SECS};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Session store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Seconds between sweeps of expired sessions
    pub sweep_interval_seconds: u64,
    /// Lifetime of a session when the caller does not give one
    pub default_ttl_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sweep_interval_seconds: DEFAULT_SESSION_SWEEP_INTERVAL_SECS,
            default_ttl_seconds: DEFAULT_SESSION_TTL_SECS,
        }
    }
}
