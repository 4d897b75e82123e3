//! Webserver entry point
//!
//! Loads the catalog snapshot and user-state seed, builds the planner, and
//! serves the REST API.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use planner::{MemoryCatalog, MemoryProfiles, Planner};
use shared::logging;

/// Serve the roadmap planning API over HTTP
#[derive(Parser)]
#[command(name = "webserver")]
#[command(about = "HTTP API over the roadmap planner")]
struct Args {
    /// Port for HTTP connections
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Path to the catalog snapshot (JSON)
    #[arg(long, default_value = "data/catalog.json")]
    catalog: String,

    /// Path to the user-state seed file (JSON array)
    #[arg(long, default_value = "data/users.json")]
    users: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    logging::init_tracing("webserver", Some(&args.log_level));

    let catalog = MemoryCatalog::load(&args.catalog)
        .await
        .with_context(|| format!("Failed to load catalog from {}", args.catalog))?;
    let profiles = MemoryProfiles::load(&args.users)
        .await
        .with_context(|| format!("Failed to load user states from {}", args.users))?;
    info!(catalog = %args.catalog, users = %args.users, "Stores loaded");

    let planner = Planner::new(Arc::new(catalog), Arc::new(profiles));
    let app = webserver::router(Arc::new(planner));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Webserver listening");

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;
    Ok(())
}
