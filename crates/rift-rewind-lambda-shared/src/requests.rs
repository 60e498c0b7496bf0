//! Request types, event unwrapping, and validation for Lambda endpoints.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use rift_rewind_lib::LookupRequest;

use crate::problem::{from_lib_error, ProblemDetails};

/// Validation trait for Lambda request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Input type handed to the core once validation passes.
    type Validated;

    /// Validate the request, returning the validated input or an error.
    ///
    /// The `request_id` is only used for logging.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<Self::Validated, Box<ProblemDetails>>;
}

/// Failure to turn an invocation event into a request.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("event is not a JSON object")]
    NotAnObject,

    #[error("event body is null")]
    NullBody,

    #[error("event body is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("event body is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("event body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Body of a summoner lookup request, as sent by the web front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerLookupRequest {
    /// Riot ID game name. Required; blank is rejected.
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub summoner_name: Option<String>,

    /// Riot ID tag line. Defaults to `NA1`.
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub tag_line: Option<String>,

    /// Platform region code. Defaults to `na1`.
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,
}

impl SummonerLookupRequest {
    pub fn new(summoner_name: impl Into<String>) -> Self {
        Self {
            summoner_name: Some(summoner_name.into()),
            ..Self::default()
        }
    }

    pub fn with_tag_line(mut self, tag_line: impl Into<String>) -> Self {
        self.tag_line = Some(tag_line.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Parse the request out of an invocation payload.
    ///
    /// Accepts Function URL / API Gateway proxy events (`body` as a JSON
    /// string, optionally base64 encoded, or as an object) and direct
    /// invocations whose payload is the body itself.
    pub fn from_event(payload: Value) -> Result<Self, EventError> {
        let body = extract_body(payload)?;
        Ok(serde_json::from_value(body)?)
    }

    /// Apply defaults and trimming, producing the library request.
    pub fn to_lookup_request(&self) -> rift_rewind_lib::Result<LookupRequest> {
        LookupRequest::new(
            self.summoner_name.as_deref().unwrap_or_default(),
            self.tag_line.as_deref(),
            self.region.as_deref(),
        )
    }
}

impl Validate for SummonerLookupRequest {
    type Validated = LookupRequest;

    fn validate(&self, request_id: &str) -> Result<LookupRequest, Box<ProblemDetails>> {
        self.to_lookup_request()
            .map_err(|err| Box::new(from_lib_error(&err, request_id)))
    }
}

/// Absent fields fall back to `#[serde(default)]`; a present field must be a
/// string, so an explicit `null` is a type error rather than a default.
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

fn extract_body(payload: Value) -> Result<Value, EventError> {
    let Value::Object(mut event) = payload else {
        return Err(EventError::NotAnObject);
    };

    let base64_encoded = event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    match event.remove("body") {
        None => Ok(Value::Object(event)),
        Some(Value::Null) => Err(EventError::NullBody),
        Some(Value::String(raw)) if base64_encoded => {
            let decoded = String::from_utf8(BASE64.decode(raw.as_bytes())?)?;
            Ok(serde_json::from_str(&decoded)?)
        }
        Some(Value::String(raw)) => Ok(serde_json::from_str(&raw)?),
        Some(body) => Ok(body),
    }
}
