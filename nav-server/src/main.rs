use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nav_server::config::{AppConfig, DirectionsSource};
use nav_server::directions::{DirectionsClient, MockDirectionsClient};
use nav_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let state = match &config.directions {
        DirectionsSource::Live(directions) => match DirectionsClient::new(directions.clone()) {
            Ok(client) => AppState::new(client),
            Err(e) => {
                error!(error = %e, "failed to create directions client");
                return ExitCode::FAILURE;
            }
        },
        DirectionsSource::Mock(dir) => match MockDirectionsClient::new(dir) {
            Ok(client) => {
                info!(dir = %dir.display(), routes = ?client.available_routes(), "using mock directions");
                AppState::new(client)
            }
            Err(e) => {
                error!(error = %e, dir = %dir.display(), "failed to load mock routes");
                return ExitCode::FAILURE;
            }
        },
    };

    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %config.bind_addr, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "NologyNav listening on http://{}", config.bind_addr);
    info!("  GET  /health       - Health check");
    info!("  POST /get_summary  - Summarise a trip");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
