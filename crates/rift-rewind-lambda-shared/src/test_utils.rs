//! Test utilities for Lambda handler testing.
//!
//! This module provides shared test infrastructure for all Lambda crates:
//! upstream response fixtures, a stubbed Riot API built on `wiremock`, a
//! counting secret store, and mock request ids.
//!
//! # Usage
//!
//! These utilities are only available in test builds or with the
//! `test-utils` feature:
//!
//! ```ignore
//! use rift_rewind_lambda_shared::test_utils::{mock_request_id, RiotStub};
//!
//! #[tokio::test]
//! async fn test_handler() {
//!     let stub = RiotStub::start().await;
//!     stub.account("asia", "Faker", "KR1", 200, fixtures::account()).await;
//!     let runtime = stub.runtime();
//!     // ... invoke the handler with `runtime`
//! }
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rift_rewind_lib::{Error as LibError, LookupConfig, RiotClient, SecretStore};

use crate::LambdaRuntime;

/// API key handed out by [`CountingSecretStore`].
pub const TEST_API_KEY: &str = "RGAPI-00000000-test";

/// Create a mock request ID for testing.
///
/// Since `lambda_runtime::Context` is non-exhaustive and cannot be directly
/// constructed, tests should use the request ID directly for assertions.
pub fn mock_request_id(suffix: &str) -> String {
    format!("test-request-{}", suffix)
}

/// Upstream payloads for the `Faker#KR1` test player.
pub mod fixtures {
    use serde_json::{json, Value};

    /// PUUID returned by [`account`].
    pub const PUUID: &str = "P1";

    pub fn account() -> Value {
        json!({ "puuid": PUUID, "gameName": "Faker", "tagLine": "KR1" })
    }

    pub fn summoner() -> Value {
        json!({
            "puuid": PUUID,
            "profileIconId": 7,
            "revisionDate": 1_700_000_000_000_i64,
            "summonerLevel": 500
        })
    }

    pub fn masteries() -> Value {
        json!([
            { "puuid": PUUID, "championId": 7, "championLevel": 52, "championPoints": 1_205_221 },
            { "puuid": PUUID, "championId": 4, "championLevel": 31, "championPoints": 640_100 },
            { "puuid": PUUID, "championId": 112, "championLevel": 20, "championPoints": 401_333 }
        ])
    }
}

/// Secret store that counts reads and can be told to fail.
#[derive(Debug, Default)]
pub struct CountingSecretStore {
    reads: AtomicUsize,
    fail: bool,
}

impl CountingSecretStore {
    pub fn failing() -> Self {
        Self {
            reads: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretStore for CountingSecretStore {
    async fn fetch_secret(&self, name: &str) -> rift_rewind_lib::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LibError::SecretUnavailable {
                name: name.to_string(),
                message: "ParameterNotFound".to_string(),
            });
        }
        Ok(TEST_API_KEY.to_string())
    }
}

/// Stubbed Riot API where the routing host is the first path segment.
pub struct RiotStub {
    pub server: MockServer,
    pub secrets: Arc<CountingSecretStore>,
}

impl RiotStub {
    pub async fn start() -> Self {
        Self::with_secrets(CountingSecretStore::default()).await
    }

    pub async fn with_secrets(secrets: CountingSecretStore) -> Self {
        Self {
            server: MockServer::start().await,
            secrets: Arc::new(secrets),
        }
    }

    /// Riot client pointed at the stub.
    pub fn client(&self) -> RiotClient {
        let config =
            LookupConfig::default().with_api_base(format!("{}/{{host}}", self.server.uri()));
        RiotClient::new(&config).expect("stub client builds")
    }

    /// Lambda runtime pointed at the stub, sharing this stub's secret store.
    pub fn runtime(&self) -> LambdaRuntime {
        LambdaRuntime::new(self.client(), Box::new(Arc::clone(&self.secrets)))
    }

    /// Number of HTTP requests the stub has received.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }

    pub async fn account(
        &self,
        cluster: &str,
        game_name: &str,
        tag_line: &str,
        status: u16,
        body: Value,
    ) {
        Mock::given(method("GET"))
            .and(path(format!(
                "/{cluster}/riot/account/v1/accounts/by-riot-id/{game_name}/{tag_line}"
            )))
            .and(header("X-Riot-Token", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn summoner(&self, region: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!(
                "/{region}/lol/summoner/v4/summoners/by-puuid/{}",
                fixtures::PUUID
            )))
            .and(header("X-Riot-Token", TEST_API_KEY))
            .respond_with(response)
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn masteries(&self, region: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!(
                "/{region}/lol/champion-mastery/v4/champion-masteries/by-puuid/{}/top",
                fixtures::PUUID
            )))
            .and(query_param("count", "3"))
            .and(header("X-Riot-Token", TEST_API_KEY))
            .respond_with(response)
            .expect(1)
            .mount(&self.server)
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_request_id_formats_correctly() {
        let id = mock_request_id("123");
        assert_eq!(id, "test-request-123");
    }

    #[tokio::test]
    async fn counting_store_counts_reads() {
        let store = CountingSecretStore::default();
        assert_eq!(store.fetch_secret("x").await.unwrap(), TEST_API_KEY);
        assert_eq!(store.fetch_secret("x").await.unwrap(), TEST_API_KEY);
        assert_eq!(store.reads(), 2);
    }

    #[tokio::test]
    async fn failing_store_reports_secret_unavailable() {
        let store = CountingSecretStore::failing();
        let err = store.fetch_secret("/rift-rewind/riot-api-key").await.unwrap_err();
        assert!(matches!(err, LibError::SecretUnavailable { .. }));
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn stub_runtime_shares_secret_store() {
        let stub = RiotStub::start().await;
        let runtime = stub.runtime();
        let _ = runtime.lookup();
        assert_eq!(stub.secrets.reads(), 0);
        assert_eq!(stub.request_count().await, 0);
    }
}
