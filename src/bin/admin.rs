//! CLI administration tool for snip.
//!
//! Works directly against the PostgreSQL link store, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts for it when omitted)
//! cargo run --bin admin -- link create https://example.com/some/long/path
//!
//! # Show a stored link without counting a hit
//! cargo run --bin admin -- link show aZ3kP9qL
//!
//! # Totals across all links
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server. `STORAGE_BACKEND` must be `postgres`, and
//! `DATABASE_URL` (or the `DB_*` components) must be set.

use snip::application::services::ShortenerService;
use snip::config::{self, Config, StorageBackend};
use snip::infrastructure::persistence::PgLinkStore;
use snip::server::connect_database;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing snip.
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link
    Create {
        /// URL to shorten (prompted for if omitted)
        url: Option<String>,
    },

    /// Show a stored link
    Show {
        /// Short id
        id: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("admin requires STORAGE_BACKEND=postgres");
    }

    let pool = connect_database(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: &PgPool) -> Result<()> {
    let store = Arc::new(PgLinkStore::new(Arc::new(pool.clone())));
    let generator = config
        .code_generator
        .build(config.code_length)
        .context("Failed to build code generator")?;
    let shortener = ShortenerService::new(store, generator).with_max_attempts(config.max_attempts);

    match action {
        LinkAction::Create { url } => {
            println!("{}", "🔗 Create Short Link".bright_blue().bold());
            println!();

            let url = match url {
                Some(u) => u,
                None => Input::new()
                    .with_prompt("URL to shorten")
                    .with_initial_text("https://")
                    .interact_text()?,
            };

            let link = shortener
                .create(url.trim())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

            println!("{}", "✅ Link created".green().bold());
            println!("  Short: {}", link.id.bright_yellow().bold());
            println!("  URL:   {}", link.url.cyan());
            println!();
        }
        LinkAction::Show { id } => {
            let link = shortener
                .stats(&id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load link: {}", e))?;

            println!("{}", "📋 Link".bright_blue().bold());
            println!();
            println!("  Short:   {}", link.id.bright_yellow().bold());
            println!("  URL:     {}", link.url.cyan());
            println!(
                "  Hits:    {}",
                link.hits.to_string().bright_green().bold()
            );
            println!(
                "  Created: {}",
                link.created_at
                    .to_rfc3339_opts(SecondsFormat::Secs, true)
                    .bright_black()
            );
            println!();
        }
    }

    Ok(())
}

/// Displays totals across all links.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let hits_total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(hits), 0)::BIGINT FROM links")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Hits:  {}",
        hits_total.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
