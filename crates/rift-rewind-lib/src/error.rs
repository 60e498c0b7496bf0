use std::fmt;

use thiserror::Error;

/// Convenient result alias for the Rift Rewind library.
pub type Result<T> = std::result::Result<T, Error>;

/// Upstream Riot API call that produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCall {
    /// `account-v1` lookup by Riot ID.
    Account,
    /// `summoner-v4` lookup by PUUID.
    Summoner,
    /// `champion-mastery-v4` top masteries by PUUID.
    Mastery,
}

impl fmt::Display for UpstreamCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamCall::Account => write!(f, "account lookup"),
            UpstreamCall::Summoner => write!(f, "summoner lookup"),
            UpstreamCall::Mastery => write!(f, "champion mastery lookup"),
        }
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The summoner name was empty after trimming.
    #[error("summoner name is required")]
    MissingSummonerName,

    /// The region code has no routing cluster in the region table.
    #[error("unsupported region code: {region}")]
    UnknownRegion { region: String },

    /// The API key could not be read from the secret store.
    #[error("failed to read secret {name}: {message}")]
    SecretUnavailable { name: String, message: String },

    /// The account lookup returned 404 for the requested Riot ID.
    #[error("no account found for {game_name}#{tag_line}")]
    AccountNotFound { game_name: String, tag_line: String },

    /// An upstream call answered with a non-success status.
    #[error("{call} returned HTTP {status}")]
    Upstream { call: UpstreamCall, status: u16 },

    /// An upstream call answered 200 with a body that did not match the expected shape.
    #[error("failed to decode {call} response: {source}")]
    Decode {
        call: UpstreamCall,
        #[source]
        source: serde_json::Error,
    },

    /// The configured API base could not be turned into a request URL.
    #[error("invalid Riot API base URL: {url}")]
    InvalidApiBase { url: String },

    /// A path segment of `.` or `..` would be removed by URL normalization.
    #[error("path segment {segment:?} cannot be sent to the Riot API")]
    DotPathSegment { segment: String },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Upstream HTTP status carried by this error, if any.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Error::Upstream { status, .. } => Some(*status),
            Error::AccountNotFound { .. } => Some(404),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_names_the_call() {
        let err = Error::Upstream {
            call: UpstreamCall::Summoner,
            status: 503,
        };
        assert_eq!(err.to_string(), "summoner lookup returned HTTP 503");
        assert_eq!(err.upstream_status(), Some(503));
    }

    #[test]
    fn account_not_found_formats_riot_id() {
        let err = Error::AccountNotFound {
            game_name: "Faker".to_string(),
            tag_line: "KR1".to_string(),
        };
        assert!(err.to_string().contains("Faker#KR1"));
    }

    #[test]
    fn local_errors_have_no_upstream_status() {
        let err = Error::UnknownRegion {
            region: "pbe1".to_string(),
        };
        assert_eq!(err.upstream_status(), None);
    }
}
