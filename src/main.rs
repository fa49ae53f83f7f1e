//! Stockroom: a minimal HTTP API over a PostgreSQL-backed item store.
//!
//! This is the application entry point. It initializes tracing, loads the
//! database configuration from environment variables, connects to PostgreSQL
//! and creates the schema, sets up the axum router, and starts the HTTP
//! server.

mod config;
mod db;
mod error;
mod middleware;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{DatabaseConfig, DEFAULT_BIND_ADDR, DEFAULT_HTTP_PORT, DEFAULT_LOG_FILTER};
use db::Database;
use routes::create_router;
use state::AppState;

/// Stockroom: HTTP access to a PostgreSQL-backed item store
#[derive(Parser, Debug)]
#[command(name = "stockroom", version, about)]
struct Args {
    /// Bind address
    #[arg(short, long, default_value = DEFAULT_BIND_ADDR)]
    bind: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_HTTP_PORT)]
    port: u16,

    /// Log level filter (e.g., "stockroom=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialization failures are fatal; the entry point alone decides
    // exit behavior.
    if let Err(err) = run(args).await {
        tracing::error!(error = %err, "Fatal startup error");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Pick up a .env file if present; real environment variables win
    dotenvy::dotenv().ok();

    let db_config = DatabaseConfig::from_env()?;
    tracing::info!(
        host = %db_config.host,
        port = db_config.port,
        dbname = %db_config.dbname,
        user = %db_config.user,
        "Connecting to PostgreSQL"
    );

    let db = Database::connect(&db_config).await?;
    db.ping().await?;
    db.ensure_schema().await?;
    tracing::info!("Database ready");

    // Create application state
    let state = AppState::new(db);

    // Create router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown on SIGINT and SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
