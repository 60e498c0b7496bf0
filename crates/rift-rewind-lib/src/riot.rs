//! Async client for the three Riot API endpoints used by the lookup.

use reqwest::header::ACCEPT;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::LookupConfig;
use crate::error::{Error, Result, UpstreamCall};
use crate::models::{AccountRecord, MasteryEntry, SummonerRecord};
use crate::region::Cluster;

/// Header carrying the Riot API key.
const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

/// Number of top champion masteries requested per lookup.
pub const MASTERY_COUNT: usize = 3;

/// Thin wrapper around a shared `reqwest::Client` for Riot API calls.
///
/// The client holds no credential; the API key is passed per call because it
/// is fetched per invocation.
#[derive(Debug, Clone)]
pub struct RiotClient {
    http: Client,
    api_base: String,
}

impl RiotClient {
    /// Build a client with the configured timeout and user agent.
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(user_agent())
            .build()
            .map_err(Error::Http)?;
        Ok(Self::with_http_client(http, config.api_base.clone()))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_http_client(http: Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
        }
    }

    /// `GET /riot/account/v1/accounts/by-riot-id/{gameName}/{tagLine}` on the cluster host.
    ///
    /// A 404 becomes [`Error::AccountNotFound`]; any other non-200 status is
    /// reported as [`Error::Upstream`].
    pub async fn account_by_riot_id(
        &self,
        cluster: Cluster,
        game_name: &str,
        tag_line: &str,
        api_key: &str,
    ) -> Result<AccountRecord> {
        // No Riot ID has a dot-only part, and such a part cannot be put in a URL.
        if is_dot_segment(game_name) || is_dot_segment(tag_line) {
            debug!(game_name, tag_line, "dot-only Riot ID part; skipping account call");
            return Err(Error::AccountNotFound {
                game_name: game_name.to_string(),
                tag_line: tag_line.to_string(),
            });
        }

        let url = self.endpoint(
            cluster.as_str(),
            &[
                "riot",
                "account",
                "v1",
                "accounts",
                "by-riot-id",
                game_name,
                tag_line,
            ],
        )?;
        let response = self.get(url, api_key).await?;

        match response.status() {
            StatusCode::OK => decode(response, UpstreamCall::Account).await,
            StatusCode::NOT_FOUND => Err(Error::AccountNotFound {
                game_name: game_name.to_string(),
                tag_line: tag_line.to_string(),
            }),
            status => Err(Error::Upstream {
                call: UpstreamCall::Account,
                status: status.as_u16(),
            }),
        }
    }

    /// `GET /lol/summoner/v4/summoners/by-puuid/{puuid}` on the platform region host.
    pub async fn summoner_by_puuid(
        &self,
        region: &str,
        puuid: &str,
        api_key: &str,
    ) -> Result<SummonerRecord> {
        let url = self.endpoint(
            region,
            &["lol", "summoner", "v4", "summoners", "by-puuid", puuid],
        )?;
        let response = self.get(url, api_key).await?;

        match response.status() {
            StatusCode::OK => decode(response, UpstreamCall::Summoner).await,
            status => Err(Error::Upstream {
                call: UpstreamCall::Summoner,
                status: status.as_u16(),
            }),
        }
    }

    /// `GET /lol/champion-mastery/v4/champion-masteries/by-puuid/{puuid}/top?count=N`.
    ///
    /// Returns at most `count` entries in upstream order. Non-200 statuses are
    /// reported as [`Error::Upstream`] so the caller can decide to tolerate them.
    pub async fn top_masteries(
        &self,
        region: &str,
        puuid: &str,
        count: usize,
        api_key: &str,
    ) -> Result<Vec<MasteryEntry>> {
        let mut url = self.endpoint(
            region,
            &[
                "lol",
                "champion-mastery",
                "v4",
                "champion-masteries",
                "by-puuid",
                puuid,
                "top",
            ],
        )?;
        url.query_pairs_mut().append_pair("count", &count.to_string());
        let response = self.get(url, api_key).await?;

        match response.status() {
            StatusCode::OK => {
                let mut entries: Vec<MasteryEntry> =
                    decode(response, UpstreamCall::Mastery).await?;
                if entries.len() > count {
                    warn!(
                        returned = entries.len(),
                        requested = count,
                        "mastery list longer than requested; truncating"
                    );
                    entries.truncate(count);
                }
                Ok(entries)
            }
            status => Err(Error::Upstream {
                call: UpstreamCall::Mastery,
                status: status.as_u16(),
            }),
        }
    }

    /// Build the URL for `host` with the given (unencoded) path segments.
    ///
    /// `.` and `..` are rejected: URL parsing drops them even when percent-encoded.
    fn endpoint(&self, host: &str, segments: &[&str]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|segment| is_dot_segment(segment)) {
            return Err(Error::DotPathSegment {
                segment: segment.to_string(),
            });
        }

        let base = self.api_base.replace("{host}", host);
        let mut url = Url::parse(&base).map_err(|_| Error::InvalidApiBase {
            url: self.api_base.clone(),
        })?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidApiBase {
                url: self.api_base.clone(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url, api_key: &str) -> Result<Response> {
        debug!(host = url.host_str().unwrap_or_default(), path = url.path(), "GET");
        let response = self
            .http
            .get(url)
            .header(RIOT_TOKEN_HEADER, api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        debug!(status = response.status().as_u16(), "upstream responded");
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, call: UpstreamCall) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| Error::Decode { call, source })
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

fn user_agent() -> String {
    format!(
        "rift-rewind-lib/{version}",
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_base: &str) -> RiotClient {
        RiotClient::with_http_client(Client::new(), api_base)
    }

    #[test]
    fn endpoint_substitutes_host() {
        let url = client("https://{host}.api.riotgames.com")
            .endpoint("americas", &["riot", "account", "v1"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://americas.api.riotgames.com/riot/account/v1"
        );
    }

    #[test]
    fn endpoint_supports_path_style_host() {
        let url = client("http://127.0.0.1:8080/{host}")
            .endpoint("euw1", &["lol", "summoner"])
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/euw1/lol/summoner");
    }

    #[test]
    fn endpoint_percent_encodes_segments() {
        let url = client("https://{host}.api.riotgames.com")
            .endpoint("kr", &["by-riot-id", "Hide on bush", "KR/1"])
            .unwrap();
        assert_eq!(url.path(), "/by-riot-id/Hide%20on%20bush/KR%2F1");

        let url = client("https://{host}.api.riotgames.com")
            .endpoint("kr", &["by-riot-id", "...", ".a"])
            .unwrap();
        assert_eq!(url.path(), "/by-riot-id/.../.a");
    }

    #[test]
    fn endpoint_rejects_dot_segments() {
        for segment in [".", ".."] {
            let err = client("https://{host}.api.riotgames.com")
                .endpoint("kr", &["by-riot-id", "Faker", segment])
                .unwrap_err();
            assert!(
                matches!(&err, Error::DotPathSegment { segment: s } if s == segment),
                "segment {segment:?}"
            );
        }
    }

    #[test]
    fn endpoint_rejects_invalid_base() {
        let err = client("not a url {host}")
            .endpoint("na1", &["lol"])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidApiBase { .. }));
    }

    #[test]
    fn user_agent_includes_version() {
        assert!(user_agent().starts_with("rift-rewind-lib/"));
    }
}
