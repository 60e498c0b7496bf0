//! Summoner lookup Lambda.
//!
//! Accepts a Function URL (or direct) invocation carrying
//! `{"summonerName", "tagLine", "region"}` and answers with a proxy response
//! whose body is either the condensed profile or `{"error": ...}`.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use rift_rewind_lambda_shared::{
    from_lib_error, get_runtime, init_tracing, install_runtime, LambdaResponse, LambdaRuntime,
    ProblemDetails, SummonerLookupRequest, Validate,
};

/// Entry point used by the Lambda runtime.
pub async fn run() -> Result<(), Error> {
    init_tracing();

    let runtime = LambdaRuntime::from_env().await.map_err(|e| {
        error!(error = %e, "Lambda runtime initialization failed");
        e
    })?;
    install_runtime(runtime);

    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda handler invoked per request.
pub async fn handler(event: LambdaEvent<Value>) -> Result<LambdaResponse, Error> {
    let request_id = event.context.request_id.clone();

    let runtime = match get_runtime() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "runtime unavailable");
            return Ok(ProblemDetails::internal_error().into());
        }
    };

    Ok(handle_event(runtime, event.payload, &request_id).await)
}

/// Core handler logic separated for reuse in tests.
pub async fn handle_event(
    runtime: &LambdaRuntime,
    payload: Value,
    request_id: &str,
) -> LambdaResponse {
    let request = match SummonerLookupRequest::from_event(payload) {
        Ok(request) => request,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to parse request");
            return ProblemDetails::internal_error().into();
        }
    };

    let lookup = match request.validate(request_id) {
        Ok(lookup) => lookup,
        Err(problem) => {
            info!(request_id = %request_id, error = %problem, "rejected lookup request");
            return (*problem).into();
        }
    };

    info!(
        request_id = %request_id,
        game_name = %lookup.game_name(),
        tag_line = %lookup.tag_line(),
        region = %lookup.region(),
        "handling summoner lookup"
    );

    match runtime.lookup().run(&lookup).await {
        Ok(result) => {
            info!(
                request_id = %request_id,
                level = result.summoner.level,
                champions = result.top_champions.len(),
                "summoner lookup succeeded"
            );
            LambdaResponse::ok(&result)
        }
        Err(e) => from_lib_error(&e, request_id).into(),
    }
}
