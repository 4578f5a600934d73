use predictor_service::config::{PredictorConfig, SERVICE_NAME};
use predictor_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = PredictorConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        SERVICE_NAME,
        &config.observability.log_level,
        config.observability.otlp_endpoint.as_deref(),
    )?;

    tracing::info!(
        service = SERVICE_NAME,
        version = env!("CARGO_PKG_VERSION"),
        address = %config.common.address(),
        "Starting predictor service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
