//! Region Atlas - cached lookups over Moroccan regions and cities
//!
//! HTTP server exposing the lookup engine, its cache, and runtime settings.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use region_atlas::api::create_router;
use region_atlas::dataset::validate_integrity_strict;
use region_atlas::{spawn_cleanup_task, AppState, Config, Dataset, DatasetProvider};

/// Main entry point for the Region Atlas server.
///
/// # Startup Sequence
/// 1. Load configuration from environment variables
/// 2. Initialize tracing subscriber for logging
/// 3. Load and check the dataset
/// 4. Create the cache, engine and application state
/// 5. Start background TTL cleanup task
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Defaults to "info" level (or "debug" in debug mode), can be overridden with RUST_LOG
    let default_filter = if config.settings.debug_mode {
        "region_atlas=debug,tower_http=debug"
    } else {
        "region_atlas=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Region Atlas server");
    info!(
        "Configuration loaded: port={}, cleanup_interval={}s, caching={}, cache_timeout={}ms, default_language={}",
        config.server_port,
        config.cleanup_interval,
        config.settings.enable_caching,
        config.settings.cache_timeout_ms,
        config.settings.default_language
    );

    let dataset = match &config.dataset_path {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("loading dataset from {}", path.display()))?,
        None => Dataset::builtin().context("loading embedded dataset")?,
    };
    validate_integrity_strict(&dataset).context("dataset failed integrity checks")?;
    info!(
        "Dataset loaded: {} regions, {} unassigned cities",
        dataset.regions().len(),
        dataset.unassigned_cities().len()
    );

    let state = AppState::from_config(&config, Arc::new(dataset));
    info!("Lookup engine initialized");

    let cleanup_handle = spawn_cleanup_task(state.cache.clone(), config.cleanup_interval);
    info!("Background cleanup task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
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

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
