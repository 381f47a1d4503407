//! Country Facade - an HTTP facade over a remote country dataset
//!
//! Fetches the reference dataset from an upstream service, serves filtered
//! views of it, and memoizes response payloads in a bounded LRU cache.

mod api;
mod cache;
mod config;
mod dataset;
mod error;
mod models;
mod tasks;

use std::net::SocketAddr;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use dataset::fetch_countries;
use tasks::spawn_refresh_task;

/// Main entry point for the country facade server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create application state (aborts on invalid cache capacity)
/// 4. Fetch the initial country dataset from upstream
/// 5. Start background dataset refresh task
/// 6. Create Axum router with all endpoints
/// 7. Start HTTP server on configured port
/// 8. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "country_facade=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Country Facade Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_capacity={}, port={}, upstream={}, refresh_interval={}s",
        config.cache_capacity, config.server_port, config.upstream_url, config.refresh_interval
    );

    // Create application state; an invalid cache capacity aborts startup
    let state = AppState::from_config(&config)?;
    info!("Response cache initialized");

    // Fetch the initial dataset; a failure here is tolerated because the
    // refresh task keeps retrying on its interval
    let client = reqwest::Client::new();
    match fetch_countries(&client, &config.upstream_url).await {
        Ok(countries) => {
            info!("Fetched {} countries from upstream", countries.len());
            state.replace_dataset(countries).await;
        }
        Err(err) => {
            warn!(
                "Initial dataset fetch failed ({}); serving an empty dataset until a refresh succeeds",
                err
            );
        }
    }

    // Start background refresh task unless disabled
    let refresh_handle = if config.refresh_interval > 0 {
        let handle = spawn_refresh_task(
            state.clone(),
            client,
            config.upstream_url.clone(),
            config.refresh_interval,
        );
        info!("Background refresh task started");
        Some(handle)
    } else {
        info!("Dataset refresh disabled");
        None
    };

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(refresh_handle))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the refresh task and allows graceful shutdown.
async fn shutdown_signal(refresh_handle: Option<tokio::task::JoinHandle<()>>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the refresh task
    if let Some(handle) = refresh_handle {
        handle.abort();
        warn!("Refresh task aborted");
    }
}
