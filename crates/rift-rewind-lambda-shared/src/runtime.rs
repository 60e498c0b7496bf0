//! Lambda runtime state built once at cold start.
//!
//! The HTTP client and the SSM client are created before the first invocation
//! and shared read-only by every invocation the execution environment serves.
//! Nothing request-specific (including the API key) is kept here.

use std::sync::OnceLock;
use std::time::Instant;

use tracing::info;

use rift_rewind_lib::{LookupConfig, RiotClient, SecretStore, SsmSecretStore, SummonerLookup};

/// Lazily-initialized Lambda runtime state.
static RUNTIME: OnceLock<LambdaRuntime> = OnceLock::new();

/// Error during runtime initialization.
#[derive(Debug, Clone)]
pub struct InitError {
    pub message: String,
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lambda initialization failed: {}", self.message)
    }
}

impl std::error::Error for InitError {}

impl From<rift_rewind_lib::Error> for InitError {
    fn from(err: rift_rewind_lib::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Shared clients used by every invocation.
pub struct LambdaRuntime {
    riot: RiotClient,
    secrets: Box<dyn SecretStore>,
}

impl LambdaRuntime {
    pub fn new(riot: RiotClient, secrets: Box<dyn SecretStore>) -> Self {
        Self { riot, secrets }
    }

    /// Build the production runtime from environment configuration.
    pub async fn from_env() -> Result<Self, InitError> {
        let start = Instant::now();
        let config = LookupConfig::from_env();

        let riot = RiotClient::new(&config)?;
        let secrets = SsmSecretStore::from_env().await;

        info!(
            api_base = %config.api_base,
            timeout_secs = config.request_timeout.as_secs(),
            init_ms = start.elapsed().as_millis() as u64,
            "Lambda runtime initialization complete"
        );

        Ok(Self::new(riot, Box::new(secrets)))
    }

    /// Lookup orchestrator bound to this runtime's clients.
    pub fn lookup(&self) -> SummonerLookup<'_> {
        SummonerLookup::new(&self.riot, self.secrets.as_ref())
    }
}

/// Store `runtime` as the process-wide runtime.
///
/// Only the first call installs a runtime; later calls drop their argument and
/// return the existing one.
pub fn install_runtime(runtime: LambdaRuntime) -> &'static LambdaRuntime {
    RUNTIME.get_or_init(|| runtime)
}

/// Get the installed runtime.
pub fn get_runtime() -> Result<&'static LambdaRuntime, InitError> {
    RUNTIME.get().ok_or_else(|| InitError {
        message: "Lambda runtime not initialized. Call install_runtime() first.".to_string(),
    })
}
