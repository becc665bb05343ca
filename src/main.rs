// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Healthboard API Server
//!
//! Serves windowed metric charts, blood marker panels and the workout
//! calendar heatmap from a snapshot data directory.

use healthboard::{config::Config, db::HealthStore, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        week_start = ?config.week_start,
        raw_point_threshold = config.raw_point_threshold,
        "Starting Healthboard API"
    );

    // Load the data snapshot
    tracing::info!(path = %config.data_dir.display(), "Loading health data");
    let store = HealthStore::load_from_dir(&config.data_dir).await?;

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), store));

    // Build router
    let app = healthboard::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthboard=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
