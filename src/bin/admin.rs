//! CLI administration tool for donation-service.
//!
//! Performs database maintenance and bulk operations without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Delete every donation posted by a user
//! cargo run --bin admin -- purge-user user-123 --yes
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or the `DB_*` components: PostgreSQL connection

use donation_service::application::services::DonationService;
use donation_service::config::{Config, mask_connection_string};
use donation_service::domain::repositories::RegistrationRepository;
use donation_service::infrastructure::persistence::{
    PgDonationRepository, PgRegistrationRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing donation-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show donation and registration counts
    Stats,

    /// Delete every donation posted by a user
    PurgeUser {
        /// Identifier of the requester
        user_id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::PurgeUser { user_id, yes } => purge_user(&pool, user_id, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays donation and registration counts.
///
/// ```text
/// 📊 Statistics
///
///   Donations:      12
///
///   Registrations:
///     PENDING       4
///     CONFIRMED     2
///     COMPLETED     1
///     CANCELED      0
/// ```
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let donations = DonationService::new(Arc::new(PgDonationRepository::new(pool.clone())));
    let registrations = PgRegistrationRepository::new(pool);

    let donation_count = donations
        .count_donations()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count donations: {}", e))?;

    let per_status = registrations
        .count_by_status()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count registrations: {}", e))?;

    println!(
        "  Donations:      {}",
        donation_count.to_string().bright_green().bold()
    );
    println!();
    println!("  {}", "Registrations:".bright_white());
    for (status, count) in per_status {
        println!(
            "    {:<13} {}",
            status.as_str().cyan(),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Deletes every donation of `user_id` after confirmation.
///
/// Registrations that point at the deleted donations are left in place.
async fn purge_user(pool: &PgPool, user_id: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Purge user donations".bright_blue().bold());
    println!();
    println!("  User: {}", user_id.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete every donation posted by this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = DonationService::new(Arc::new(PgDonationRepository::new(Arc::new(
        pool.clone(),
    ))));

    let deleted = service
        .delete_donations_by_user_id(&user_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete donations: {}", e))?;

    println!();
    if deleted == 0 {
        println!("{}", "⚠️  No donations found for this user".yellow());
    } else {
        println!(
            "{}",
            format!("✅ Deleted {} donation(s)", deleted).green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database maintenance commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🔧 Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "✅ Migrations up to date".green().bold());
        }
    }

    Ok(())
}
