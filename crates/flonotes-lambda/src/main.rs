use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use flonotes_bedrock::generate::BedrockNoteGenerator;
use flonotes_core::store::UnimplementedNoteStore;
use flonotes_lambda::config::LambdaConfig;
use flonotes_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = LambdaConfig::from_env()?;
    tracing::info!(
        model = %config.model_id,
        region = %config.region,
        timeout = ?config.generation_timeout,
        "starting flonotes lambda"
    );

    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .load()
        .await;

    let state = AppState {
        generator: Arc::new(BedrockNoteGenerator::from_config(
            &sdk_config,
            config.model_id.clone(),
        )),
        store: Arc::new(UnimplementedNoteStore),
        generation_timeout: config.generation_timeout,
    };

    lambda_http::run(flonotes_lambda::router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
