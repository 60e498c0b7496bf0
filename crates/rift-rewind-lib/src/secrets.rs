//! Secret store seam for the Riot API key.
//!
//! Production reads the key from AWS SSM Parameter Store; the CLI and tests
//! can supply it directly through [`StaticSecretStore`].

use std::sync::Arc;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use tracing::debug;

use crate::error::{Error, Result};

/// SSM parameter holding the (encrypted) Riot API key.
pub const API_KEY_PARAMETER: &str = "/rift-rewind/riot-api-key";

/// Read-only access to named secrets.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the decrypted value of the secret called `name`.
    async fn fetch_secret(&self, name: &str) -> Result<String>;
}

#[async_trait]
impl<T: SecretStore + ?Sized> SecretStore for Arc<T> {
    async fn fetch_secret(&self, name: &str) -> Result<String> {
        (**self).fetch_secret(name).await
    }
}

/// [`SecretStore`] backed by AWS Systems Manager Parameter Store.
#[derive(Debug, Clone)]
pub struct SsmSecretStore {
    client: aws_sdk_ssm::Client,
}

impl SsmSecretStore {
    /// Build a store from the default AWS configuration chain (Lambda role, env, profile).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(aws_sdk_ssm::Client::new(&config))
    }

    pub fn new(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretStore for SsmSecretStore {
    async fn fetch_secret(&self, name: &str) -> Result<String> {
        debug!(parameter = name, "fetching parameter from SSM");
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|err| Error::SecretUnavailable {
                name: name.to_string(),
                message: aws_sdk_ssm::error::DisplayErrorContext(&err).to_string(),
            })?;

        output
            .parameter
            .and_then(|parameter| parameter.value)
            .ok_or_else(|| Error::SecretUnavailable {
                name: name.to_string(),
                message: "parameter has no value".to_string(),
            })
    }
}

/// [`SecretStore`] that returns the same value for every name.
#[derive(Clone)]
pub struct StaticSecretStore {
    value: String,
}

impl StaticSecretStore {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl std::fmt::Debug for StaticSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticSecretStore")
            .field("value", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl SecretStore for StaticSecretStore {
    async fn fetch_secret(&self, _name: &str) -> Result<String> {
        Ok(self.value.clone())
    }
}
