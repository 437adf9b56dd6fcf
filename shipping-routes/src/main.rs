use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shipping_routes::catalogue::{InMemoryCatalogue, landscape};
use shipping_routes::config::ServerConfig;
use shipping_routes::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shipping_routes=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Load the catalogue (fail fast if the file is unusable)
    let catalogue = match &config.data_path {
        Some(path) => {
            info!(path = %path.display(), "Loading route catalogue");
            InMemoryCatalogue::from_path(path)?
        }
        None => {
            info!("No catalogue configured, using sample landscape");
            landscape()
        }
    };

    let state = AppState::new(catalogue, &config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Shipping route planner listening");
    info!("  GET  /health           - Health check");
    info!("  GET  /ports            - List ports");
    info!("  POST /journey/direct   - Journey along fixed stops");
    info!("  POST /journey/indirect - All journeys between two ports");

    axum::serve(listener, app).await?;
    Ok(())
}
