//! Companion HTTP server binary.
//!
//! Run with: cargo run --bin inkboard-bridge --features bridge
//!
//! Serves:
//!   GET  /divoom/data - JSON feed for a secondary consumer device
//!   POST /refresh     - trigger one render invocation

use std::process::ExitCode;

use inkboard::Config;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let addr = config.bridge_addr.clone();
    let app = inkboard::bridge::router(config);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {}: {}", addr, err);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("bridge listening on {}", addr);
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
