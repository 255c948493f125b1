//! Binary entrypoint for the sortviz HTTP server.
//!
//! Configuration comes from environment variables (see
//! [`sortviz_server::config`]); log filtering follows `RUST_LOG`.

use std::process::ExitCode;

use sortviz_server::config::ServerConfig;
use sortviz_server::router::build_router;
use sortviz_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let addr = config.bind_addr();
    let app = build_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {}: {}", addr, err);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("sortviz server listening on {}", addr);
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
