//! CLI administration tool for the star catalog.
//!
//! Works directly against the PostgreSQL store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a star
//! cargo run --bin star-admin -- star add "Barnard's Star" 6
//!
//! # Show a star
//! cargo run --bin star-admin -- star get 1
//!
//! # Delete a star (asks for confirmation unless --yes)
//! cargo run --bin star-admin -- star delete 1
//!
//! # Check database connection
//! cargo run --bin star-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string

use star_catalog::api::dto::star::StarRequest;
use star_catalog::application::services::StarService;
use star_catalog::config::Config;
use star_catalog::domain::entities::Star;
use star_catalog::infrastructure::persistence::PgStarRepository;
use star_catalog::server::connect_database;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing the star catalog.
#[derive(Parser)]
#[command(name = "star-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage stored stars
    Star {
        #[command(subcommand)]
        action: StarAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Star management subcommands.
#[derive(Subcommand)]
enum StarAction {
    /// Show a star by id
    Get { id: i64 },

    /// Store a new star
    Add {
        name: String,

        /// Distance in light-years
        distance: i64,
    },

    /// Delete a star by id
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL must be set")?;

    let pool = connect_database(&config, &database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Star { action } => handle_star_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches star management commands.
async fn handle_star_action(action: StarAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgStarRepository::new(Arc::new(pool.clone())));
    let service = StarService::new(repo);

    match action {
        StarAction::Get { id } => {
            let star = service
                .get_star_by_id(id)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            print_star(&star);
        }
        StarAction::Add { name, distance } => {
            let request = StarRequest { name, distance };
            request
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid star: {}", e))?;

            let star = service
                .add_star(request.into())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to add star: {}", e))?;

            println!("{}", "✅ Star stored".green().bold());
            print_star(&star);
        }
        StarAction::Delete { id, yes } => {
            delete_star(&service, id, yes).await?;
        }
    }

    Ok(())
}

/// Deletes a star after showing it and asking for confirmation.
///
/// A missing star is reported but not treated as an error.
async fn delete_star(
    service: &StarService<PgStarRepository>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    match service.get_star_by_id(id).await {
        Ok(star) => print_star(&star),
        Err(_) => {
            println!("{}", format!("⚠️  No star with id {}", id).yellow());
            return Ok(());
        }
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this star?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_star(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete star: {}", e))?;

    println!("{}", "✅ Star deleted".green().bold());
    Ok(())
}

fn print_star(star: &Star) {
    let id = star.id.map(|id| id.to_string()).unwrap_or_default();
    println!("  ID:       {}", id.bright_black());
    println!("  Name:     {}", star.name.cyan());
    println!("  Distance: {} ly", star.distance.to_string().bright_white());
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let stars: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stars")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Stars: {}", stars.to_string().bright_white().bold());
        }
    }

    Ok(())
}
