//! Upstream records and the condensed lookup result.

use serde::{Deserialize, Serialize};

/// Champion mastery entry, passed through exactly as the upstream returned it.
pub type MasteryEntry = serde_json::Value;

/// Subset of the `account-v1` response used by the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    /// Globally unique player identifier; joins the later lookups.
    pub puuid: String,
    /// Display name as stored by Riot (canonical casing).
    pub game_name: String,
}

/// Subset of the `summoner-v4` response used by the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerRecord {
    pub summoner_level: i64,
    #[serde(default)]
    pub profile_icon_id: Option<i64>,
}

/// Summoner section of [`LookupResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerSummary {
    pub name: String,
    pub level: i64,
    /// Serialized as `null` when the upstream omitted it.
    pub profile_icon_id: Option<i64>,
    pub puuid: String,
}

/// Condensed profile returned to the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub summoner: SummonerSummary,
    /// Most-played champions, highest mastery first, as ordered upstream.
    pub top_champions: Vec<MasteryEntry>,
}

impl LookupResult {
    /// Merge the upstream records into the response shape.
    pub fn assemble(
        account: AccountRecord,
        summoner: SummonerRecord,
        top_champions: Vec<MasteryEntry>,
    ) -> Self {
        Self {
            summoner: SummonerSummary {
                name: account.game_name,
                level: summoner.summoner_level,
                profile_icon_id: summoner.profile_icon_id,
                puuid: account.puuid,
            },
            top_champions,
        }
    }
}
