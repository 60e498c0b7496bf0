//! Summoner lookup orchestration.
//!
//! A lookup is a linear pipeline: resolve the routing cluster for the region,
//! read the API key, resolve the Riot ID to an account, then fetch the summoner
//! record and the top champion masteries for the account's PUUID. The last two
//! calls only depend on the PUUID and are issued together; a failed mastery
//! call degrades to an empty list instead of failing the lookup.

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::{LookupResult, MasteryEntry};
use crate::region::resolve_cluster;
use crate::riot::{RiotClient, MASTERY_COUNT};
use crate::secrets::{SecretStore, API_KEY_PARAMETER};

/// Tag line used when the caller does not supply one.
pub const DEFAULT_TAG_LINE: &str = "NA1";

/// Platform region used when the caller does not supply one.
pub const DEFAULT_REGION: &str = "na1";

/// Validated lookup input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    game_name: String,
    tag_line: String,
    region: String,
}

impl LookupRequest {
    /// Build a request, applying defaults and trimming the name and tag line.
    ///
    /// Fails with [`Error::MissingSummonerName`] when the name is empty after
    /// trimming. The region is kept verbatim; whether it is supported is only
    /// decided when the lookup runs.
    pub fn new(game_name: &str, tag_line: Option<&str>, region: Option<&str>) -> Result<Self> {
        let game_name = game_name.trim();
        if game_name.is_empty() {
            return Err(Error::MissingSummonerName);
        }

        Ok(Self {
            game_name: game_name.to_string(),
            tag_line: tag_line.unwrap_or(DEFAULT_TAG_LINE).trim().to_string(),
            region: region.unwrap_or(DEFAULT_REGION).to_string(),
        })
    }

    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    pub fn tag_line(&self) -> &str {
        &self.tag_line
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

/// Runs lookups against the Riot API with a key taken from a [`SecretStore`].
pub struct SummonerLookup<'a> {
    riot: &'a RiotClient,
    secrets: &'a dyn SecretStore,
}

impl<'a> SummonerLookup<'a> {
    pub fn new(riot: &'a RiotClient, secrets: &'a dyn SecretStore) -> Self {
        Self { riot, secrets }
    }

    /// Resolve `request` into a [`LookupResult`].
    ///
    /// Errors from region resolution, the secret store, the account call and
    /// the summoner call are returned as-is. Mastery failures other than a
    /// malformed 200 body yield an empty `top_champions`.
    pub async fn run(&self, request: &LookupRequest) -> Result<LookupResult> {
        let region = request.region();
        let cluster = resolve_cluster(region)?;

        let api_key = self.secrets.fetch_secret(API_KEY_PARAMETER).await?;

        let account = self
            .riot
            .account_by_riot_id(cluster, request.game_name(), request.tag_line(), &api_key)
            .await?;
        debug!(
            region = %region,
            cluster = %cluster,
            game_name = %account.game_name,
            "account resolved"
        );

        let (summoner, masteries) = tokio::join!(
            self.riot.summoner_by_puuid(region, &account.puuid, &api_key),
            self.riot
                .top_masteries(region, &account.puuid, MASTERY_COUNT, &api_key),
        );
        let summoner = summoner?;
        let masteries = tolerate_mastery_failure(masteries)?;

        info!(
            region = %region,
            level = summoner.summoner_level,
            champions = masteries.len(),
            "summoner lookup complete"
        );

        Ok(LookupResult::assemble(account, summoner, masteries))
    }
}

fn tolerate_mastery_failure(result: Result<Vec<MasteryEntry>>) -> Result<Vec<MasteryEntry>> {
    match result {
        Ok(entries) => Ok(entries),
        Err(err @ Error::Decode { .. }) => Err(err),
        Err(err) => {
            warn!(error = %err, "champion mastery unavailable; returning empty list");
            Ok(Vec::new())
        }
    }
}
