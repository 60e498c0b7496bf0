#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rift_rewind_lib::{Error, LookupConfig, Result, RiotClient, SecretStore};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "RGAPI-test-key";

/// Riot client whose routing host becomes the first path segment on `server`.
pub fn client_for(server: &MockServer) -> RiotClient {
    let config = LookupConfig::default().with_api_base(format!("{}/{{host}}", server.uri()));
    RiotClient::new(&config).expect("client builds")
}

pub fn account_path(cluster: &str, game_name: &str, tag_line: &str) -> String {
    format!("/{cluster}/riot/account/v1/accounts/by-riot-id/{game_name}/{tag_line}")
}

pub fn summoner_path(region: &str, puuid: &str) -> String {
    format!("/{region}/lol/summoner/v4/summoners/by-puuid/{puuid}")
}

pub fn mastery_path(region: &str, puuid: &str) -> String {
    format!("/{region}/lol/champion-mastery/v4/champion-masteries/by-puuid/{puuid}/top")
}

pub fn account_json() -> Value {
    json!({ "puuid": "P1", "gameName": "Faker", "tagLine": "KR1" })
}

pub fn summoner_json() -> Value {
    json!({
        "puuid": "P1",
        "profileIconId": 7,
        "revisionDate": 1700000000000_i64,
        "summonerLevel": 500
    })
}

pub fn mastery_json() -> Value {
    json!([
        { "puuid": "P1", "championId": 7, "championLevel": 52, "championPoints": 1_205_221 },
        { "puuid": "P1", "championId": 4, "championLevel": 31, "championPoints": 640_100 },
        { "puuid": "P1", "championId": 112, "championLevel": 20, "championPoints": 401_333 }
    ])
}

/// Secret store that counts reads, optionally failing them.
#[derive(Default)]
pub struct CountingSecretStore {
    pub reads: AtomicUsize,
    pub fail: bool,
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
    async fn fetch_secret(&self, name: &str) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::SecretUnavailable {
                name: name.to_string(),
                message: "AccessDeniedException".to_string(),
            });
        }
        Ok(API_KEY.to_string())
    }
}
