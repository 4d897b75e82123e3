//! Planner CLI entry point
//!
//! Loads a catalog snapshot and a user-state seed file, computes one
//! roadmap, and prints it as JSON. Useful for catalog authors checking
//! what a given profile unlocks without standing up the webserver.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use planner::{MemoryCatalog, MemoryProfiles, Planner};
use shared::{logging, Phase, UserId};

/// Compute a prioritized roadmap for one user against a catalog snapshot
#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Filters and ranks catalog solutions against a user profile")]
pub struct Args {
    /// Path to the catalog snapshot (JSON)
    #[arg(long, default_value = "data/catalog.json")]
    pub catalog: String,

    /// Path to the user-state seed file (JSON array)
    #[arg(long, default_value = "data/users.json")]
    pub users: String,

    /// User to plan for
    #[arg(long)]
    pub user_id: String,

    /// Restrict planning to one lifecycle phase (PREP, ARRIVE, BUILD, THRIVE)
    #[arg(long)]
    pub phase: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    logging::init_tracing("planner", Some(&args.log_level));

    let phase = args
        .phase
        .as_deref()
        .map(|raw| Phase::from_str(raw).with_context(|| format!("Invalid phase '{raw}'")))
        .transpose()?;

    let catalog = MemoryCatalog::load(&args.catalog)
        .await
        .with_context(|| format!("Failed to load catalog from {}", args.catalog))?;
    let profiles = MemoryProfiles::load(&args.users)
        .await
        .with_context(|| format!("Failed to load user states from {}", args.users))?;
    info!(catalog = %args.catalog, users = %args.users, "Stores loaded");

    let planner = Planner::new(Arc::new(catalog), Arc::new(profiles));
    let roadmap = planner
        .roadmap_for_user(&UserId::new(args.user_id), phase)
        .await?;

    println!("{}", serde_json::to_string_pretty(&roadmap)?);
    Ok(())
}
