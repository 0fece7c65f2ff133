//! Companion HTTP server (feature `bridge`).
//!
//! Two small endpoints that sit next to the render pipeline without being
//! part of it:
//!
//! - `GET /divoom/data` - re-exposes a subset of fetched values as JSON for
//!   a secondary consumer device
//! - `POST /refresh` - triggers one render invocation, exactly as the
//!   scheduler would
//!
//! Backend reads use the same blocking [`Client`] as the render path, so
//! handlers hop onto the blocking pool rather than stalling the runtime.
//!
//! # Example
//!
//! ```rust,ignore
//! let config = inkboard::Config::from_env()?;
//! let app = inkboard::bridge::router(config);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! ```

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::client::Client;
use crate::config::Config;
use crate::driver::Driver;
use crate::sink::PpmSink;
use crate::views::opening_count;

/// JSON payload for the secondary consumer device.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeviceSummary {
    /// Open doors/windows count
    pub windows: u32,
    /// Raw dog-outside datetime state
    pub dog_status: String,
    /// Next event title
    pub event: String,
}

/// Shared handler context.
#[derive(Debug)]
pub struct BridgeContext {
    config: Config,
}

impl BridgeContext {
    /// Build the context from configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Assemble the secondary-device summary. Blocking; the client is
    /// built here so it never lives on an async runtime thread.
    fn collect(&self) -> DeviceSummary {
        let client = Client::from_config(&self.config);
        let entities = &self.config.entities;
        DeviceSummary {
            windows: opening_count(&client.fetch(&entities.openings).state),
            dog_status: client.fetch(&entities.dog_outside).state,
            event: client
                .fetch(&entities.calendar)
                .attr_str("message")
                .unwrap_or("No Event")
                .to_string(),
        }
    }
}

/// Build the bridge router.
pub fn router(config: Config) -> Router {
    let ctx = Arc::new(BridgeContext::new(config));
    Router::new()
        .route("/divoom/data", get(summary))
        .route("/refresh", post(refresh))
        .with_state(ctx)
}

/// GET /divoom/data
async fn summary(
    State(ctx): State<Arc<BridgeContext>>,
) -> Result<Json<DeviceSummary>, (StatusCode, String)> {
    match tokio::task::spawn_blocking(move || ctx.collect()).await {
        Ok(payload) => Ok(Json(payload)),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("summary task panicked: {}", err),
        )),
    }
}

/// POST /refresh
async fn refresh(
    State(ctx): State<Arc<BridgeContext>>,
) -> Result<StatusCode, (StatusCode, String)> {
    let outcome = tokio::task::spawn_blocking(move || {
        let mut sink = PpmSink::new(ctx.config.output_path.clone());
        Driver::new(ctx.config.clone()).run(&mut sink)
    })
    .await;

    match outcome {
        Ok(Ok(page)) => {
            tracing::info!("manual refresh rendered page {}", page.token());
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(Err(err)) => {
            tracing::error!("manual refresh failed: {}", err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
        }
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("render task panicked: {}", err),
        )),
    }
}
