//! AWS Lambda function for summoner profile lookups.

use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    rift_rewind_lambda_lookup::run().await
}
