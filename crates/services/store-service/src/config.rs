//! Store service configuration.

use std::env;
use std::time::Duration;

use common::{ServiceConfig, SessionConfig};

/// Store service configuration.
#[derive(Debug, Clone)]
pub struct StoreServiceConfig {
    pub service: ServiceConfig,
    pub session: SessionConfig,
}

impl StoreServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Zero or unparsable durations fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: defaults.service.service_name,
                log_level: env::var("STORE_SERVICE_LOG_LEVEL")
                    .or_else(|_| env::var("LOG_LEVEL"))
                    .unwrap_or(defaults.service.log_level),
            },
            session: SessionConfig {
                sweep_interval_seconds: positive_secs(
                    env::var("STORE_SERVICE_SESSION_SWEEP_INTERVAL_SECS").ok(),
                )
                .unwrap_or(defaults.session.sweep_interval_seconds),
                default_ttl_seconds: positive_secs(
                    env::var("STORE_SERVICE_SESSION_TTL_SECS").ok(),
                )
                .unwrap_or(defaults.session.default_ttl_seconds),
            },
        }
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session.sweep_interval_seconds)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session.default_ttl_seconds)
    }
}

impl Default for StoreServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "store-service".to_string(),
                ..ServiceConfig::default()
            },
            session: SessionConfig::default(),
        }
    }
}

fn positive_secs(raw: Option<String>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse().ok()).filter(|secs| *secs > 0)
}
