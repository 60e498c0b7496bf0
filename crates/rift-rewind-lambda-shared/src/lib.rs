//! Shared infrastructure for Rift Rewind AWS Lambda functions.
//!
//! This crate provides common functionality used across Lambda handlers:
//!
//! - [`LambdaRuntime`]: HTTP and SSM clients built once per execution environment
//! - [`init_tracing`]: JSON-formatted tracing for CloudWatch Logs
//! - [`ProblemDetails`]: `{"error": ...}` payloads with their HTTP status
//! - [`LambdaResponse`]: proxy response envelope (`statusCode`, `headers`, `body`)
//! - [`SummonerLookupRequest`]: event unwrapping and request validation
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides a stubbed Riot API, fixtures, and a
//! counting secret store for handler tests. Enable the `test-utils` feature to
//! access it from dependent crates.

#![deny(warnings)]

mod problem;
mod requests;
mod response;
mod runtime;
mod tracing_init;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_ACCOUNT_FAILED, PROBLEM_INTERNAL_ERROR,
    PROBLEM_NAME_REQUIRED, PROBLEM_SUMMONER_FAILED, PROBLEM_SUMMONER_NOT_FOUND,
};
pub use requests::{EventError, SummonerLookupRequest, Validate};
pub use response::LambdaResponse;
pub use runtime::{get_runtime, install_runtime, InitError, LambdaRuntime};
pub use tracing_init::{init_tracing, LogFormat, LOG_FORMAT_ENV};
