//! Storefront API Binary
//!
//! Starts the bakery storefront backend.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin storefront-api
//! ```
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port (default: 8000)
//! - `BIND_ADDRESS`: Bind address (default: 0.0.0.0)
//! - `DATABASE_PATH`: SQLite database file (default: ./data/storefront.db)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use storefront_api::config::AppConfig;
use storefront_api::infrastructure::http::{AppState, create_router};
use storefront_api::infrastructure::persistence::SqliteStore;
use storefront_api::infrastructure::seed::seed_if_empty;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting storefront API");

    let config = AppConfig::from_env()?;
    log_config(&config);

    let store = open_store(&config)?;
    seed_if_empty(&store)?;

    let store = Arc::new(store);
    let state = AppState::new(Arc::clone(&store), store);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.http_port).parse()?;
    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/categories");
    tracing::info!("  GET  /api/products");
    tracing::info!("  GET  /api/products/{{slug}}");
    tracing::info!("  GET  /api/cake-options");
    tracing::info!("  POST /api/orders");
    tracing::info!("  GET  /api/orders/{{id}}");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Storefront API stopped");
    Ok(())
}

/// Load a .env file from the current directory if present.
fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "storefront_api=info"
                    .parse()
                    .expect("static directive 'storefront_api=info' is valid"),
            ),
        )
        .init();
}

/// Log the parsed configuration.
fn log_config(config: &AppConfig) {
    tracing::info!(
        http_port = config.http_port,
        bind_address = %config.bind_address,
        database_path = %config.database_path.display(),
        "Configuration loaded"
    );
}

/// Open the SQLite store, creating the parent directory if needed.
fn open_store(config: &AppConfig) -> anyhow::Result<SqliteStore> {
    if let Some(parent) = config.database_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(SqliteStore::open(&config.database_path)?)
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed. Failure to install handlers
/// means the process cannot respond to termination signals, so it is better to
/// fail fast during startup than to run unresponsive.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
