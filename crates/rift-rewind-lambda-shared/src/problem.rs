//! Error payloads returned to the web front end.
//!
//! The front end only reads a single `error` string, so the body is kept to
//! `{"error": "..."}`. The HTTP status travels in the proxy response envelope,
//! not in the body.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use rift_rewind_lib::{Error as LibError, UpstreamCall};

/// Message for a missing or blank `summonerName`.
pub const PROBLEM_NAME_REQUIRED: &str = "Summoner name is required";

/// Message for a Riot ID that does not exist.
pub const PROBLEM_SUMMONER_NOT_FOUND: &str = "Summoner not found";

/// Message for a failed account lookup.
pub const PROBLEM_ACCOUNT_FAILED: &str = "Failed to fetch summoner data";

/// Message for a failed summoner lookup.
pub const PROBLEM_SUMMONER_FAILED: &str = "Failed to fetch summoner details";

/// Message for every internal failure. Never carries detail.
pub const PROBLEM_INTERNAL_ERROR: &str = "Internal server error";

/// Error response: a status for the envelope plus the `{"error": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// HTTP status for the response envelope.
    #[serde(skip)]
    pub status: u16,

    /// Caller-facing message.
    pub error: String,
}

impl ProblemDetails {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: error.into(),
        }
    }

    /// 400 for a missing summoner name.
    pub fn name_required() -> Self {
        Self::new(StatusCode::BAD_REQUEST, PROBLEM_NAME_REQUIRED)
    }

    /// 404 for an unknown Riot ID.
    pub fn summoner_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, PROBLEM_SUMMONER_NOT_FOUND)
    }

    /// Upstream failure; `status` is forwarded verbatim.
    ///
    /// A status outside the valid HTTP range is reported as 502.
    pub fn upstream(status: u16, error: impl Into<String>) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
        Self::new(status, error)
    }

    /// Generic 500.
    pub fn internal_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, PROBLEM_INTERNAL_ERROR)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.error)
    }
}

impl std::error::Error for ProblemDetails {}

/// Convert library errors to ProblemDetails.
///
/// Internal detail is logged against `request_id` and replaced by the generic
/// message in the returned problem.
pub fn from_lib_error(err: &LibError, request_id: &str) -> ProblemDetails {
    match err {
        LibError::MissingSummonerName => ProblemDetails::name_required(),
        LibError::AccountNotFound { .. } => {
            warn!(request_id = %request_id, error = %err, "account not found");
            ProblemDetails::summoner_not_found()
        }
        LibError::Upstream {
            call: UpstreamCall::Account,
            status,
        } => {
            warn!(request_id = %request_id, status, error = %err, "account lookup rejected");
            ProblemDetails::upstream(*status, PROBLEM_ACCOUNT_FAILED)
        }
        LibError::Upstream {
            call: UpstreamCall::Summoner,
            status,
        } => {
            warn!(request_id = %request_id, status, error = %err, "summoner lookup rejected");
            ProblemDetails::upstream(*status, PROBLEM_SUMMONER_FAILED)
        }
        _ => {
            error!(request_id = %request_id, error = %err, "lookup failed");
            ProblemDetails::internal_error()
        }
    }
}
