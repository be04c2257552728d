//! SGC HTTP Server Binary
//!
//! This is the main entry point for the SGC REST API server.
//! It initializes the course catalog and marks repository, sets up the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the JSON file store (default)
//! cargo run --bin sgc-server
//!
//! # Run with the in-memory store
//! REPOSITORY_TYPE=local cargo run --bin sgc-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Marks store backend, `file` or `local`
//! - `SGC_SAVE_FILE`: Save file location for the file backend (default: saved_data.json)
//! - `SGC_CATALOG`: Path to a catalog TOML overriding the built-in course catalog
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sgc_rust::http::{create_router, AppState};
use sgc_rust::{catalog, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting SGC HTTP Server");

    // Load the course catalog once and reuse it across the app
    catalog::init_catalog()?;
    info!(
        "Course catalog loaded: {} semesters",
        catalog::catalog().semester_count()
    );

    // Initialize global repository once and reuse it across the app
    db::init_repository()?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
