//! EcoTrack server - Main entry point
//!
//! Starts the HTTP service for the EcoTrack home-energy-audit application:
//! resolves the data folder, initializes the SQLite database, and serves the
//! JSON API until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecotrack_common::config;
use ecotrack_server::api::{create_router, AppContext};

/// Command-line arguments for ecotrack-server
#[derive(Parser, Debug)]
#[command(name = "ecotrack-server")]
#[command(about = "HTTP service for the EcoTrack home energy audit application")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "ECOTRACK_PORT")]
    port: u16,

    /// Data folder holding the SQLite database
    #[arg(short, long)]
    data_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecotrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    let data_dir = config::resolve_data_dir(args.data_dir.as_deref(), "ECOTRACK_DATA_DIR")
        .context("Failed to resolve data folder")?;
    info!("Data folder: {}", data_dir.display());

    let db_path = config::database_path(&data_dir);
    let db_pool = ecotrack_common::db::init_database(&db_path)
        .await
        .context("Failed to initialize database")?;

    // Build the application router
    let ctx = AppContext { db_pool };
    let app = create_router(ctx);

    // Create socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("Starting HTTP server on {}", addr);

    // Create and run the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
