//! Proxy-style response envelope for Lambda Function URLs and API Gateway.

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::problem::{ProblemDetails, PROBLEM_INTERNAL_ERROR};

/// Lambda response with the JSON payload encoded into `body`.
///
/// # Example
///
/// ```
/// use rift_rewind_lambda_shared::LambdaResponse;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     level: i64,
/// }
///
/// let response = LambdaResponse::ok(&Summary { level: 30 });
/// assert_eq!(response.status_code, 200);
/// assert_eq!(response.body, r#"{"level":30}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    pub status_code: u16,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    /// JSON-encoded payload.
    pub body: String,
}

impl LambdaResponse {
    /// Serialize `data` as the body of a response with `status`.
    ///
    /// If `data` cannot be serialized the response degrades to the generic 500.
    pub fn json<T: Serialize>(status: StatusCode, data: &T) -> Self {
        match serde_json::to_string(data) {
            Ok(body) => Self::with_body(status.as_u16(), body),
            Err(e) => {
                error!(error = %e, "failed to serialize response body");
                Self::from(ProblemDetails::internal_error())
            }
        }
    }

    /// 200 response with `data` as the body.
    pub fn ok<T: Serialize>(data: &T) -> Self {
        Self::json(StatusCode::OK, data)
    }

    fn with_body(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code,
            headers,
            body,
        }
    }
}

impl From<ProblemDetails> for LambdaResponse {
    fn from(problem: ProblemDetails) -> Self {
        let body = serde_json::to_string(&problem).unwrap_or_else(|_| {
            serde_json::json!({ "error": PROBLEM_INTERNAL_ERROR }).to_string()
        });
        Self::with_body(problem.status, body)
    }
}
