//! Product service entry point.

use std::process::ExitCode;

use metrics_exporter_prometheus::PrometheusBuilder;
use product_api::config::Config;
use product_api::error::ServerError;
use product_api::{server, telemetry};

async fn run(config: Config) -> Result<(), ServerError> {
    // 2. Install Prometheus metrics recorder
    let metrics_handle = PrometheusBuilder::new().install_recorder()?;

    // 3. Seed the catalog and build the application
    let state = product_api::create_default_state();
    tracing::info!(products = state.catalog.len(), "catalog seeded");
    let app = product_api::create_app(state, metrics_handle);

    // 4. Start server
    let addr = config.addr();
    let listener = server::bind(&addr).await?;
    tracing::info!(%addr, "starting product service");

    server::serve(listener, app).await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Load configuration and initialize tracing; no subscriber exists
    // until both succeed, so failures here go to stderr.
    let config = match Config::from_env().map_err(ServerError::from) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("product-service: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = telemetry::init(&config) {
        eprintln!("product-service: {err}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "product service failed");
            ExitCode::FAILURE
        }
    }
}
