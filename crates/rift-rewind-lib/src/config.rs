//! Runtime configuration for the Riot API client.
//!
//! # Environment Variables
//!
//! - `RIFT_REWIND_RIOT_API_BASE`: base URL template containing `{host}`
//!   (default `https://{host}.api.riotgames.com`). Local stubs can point it at
//!   e.g. `http://127.0.0.1:8080/{host}` so the routing host becomes the first
//!   path segment.
//! - `RIFT_REWIND_HTTP_TIMEOUT_SECS`: per-request timeout in seconds (default 10).

use std::env;
use std::time::Duration;

use tracing::warn;

/// Environment variable overriding the upstream base URL template.
pub const API_BASE_ENV: &str = "RIFT_REWIND_RIOT_API_BASE";

/// Environment variable overriding the HTTP request timeout.
pub const HTTP_TIMEOUT_ENV: &str = "RIFT_REWIND_HTTP_TIMEOUT_SECS";

/// Production Riot API base URL template.
pub const DEFAULT_API_BASE: &str = "https://{host}.api.riotgames.com";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`crate::RiotClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Base URL template; `{host}` is replaced by a cluster or region code.
    pub api_base: String,
    /// Timeout applied to each upstream request.
    pub request_timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LookupConfig {
    /// Create configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let api_base = env::var(API_BASE_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let request_timeout = match env::var(HTTP_TIMEOUT_ENV) {
            Ok(raw) => parse_timeout(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "ignoring invalid {}", HTTP_TIMEOUT_ENV);
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }),
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Self {
            api_base,
            request_timeout,
        }
    }

    /// Use a different API base template.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
