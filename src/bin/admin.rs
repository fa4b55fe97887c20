//! CLI administration tool for the durable link service.
//!
//! Runs the same core operations as the HTTP API directly against the configured
//! storage, plus database maintenance.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Link counts
//! cargo run --bin admin -- stats
//!
//! # Shorten a long link (prompts when omitted)
//! cargo run --bin admin -- shorten "https://x.link/?link=https://example.com" --short
//!
//! # Expand a short link
//! cargo run --bin admin -- resolve https://x.link/aB3dE9
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`durable_links::config`].

use durable_links::application::services::LinkService;
use durable_links::config::{self, Config};
use durable_links::domain::entities::SuffixOption;
use durable_links::domain::repositories::ShortLinkRepository;
use durable_links::infrastructure::cache::NullCache;
use durable_links::infrastructure::persistence::{
    PgShortLinkRepository, connect_with_retry, run_migrations,
};
use durable_links::server::{build_repository, pool_settings};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the durable link service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show stored link counts
    Stats,

    /// Create a short link from a long durable link
    Shorten {
        /// Long link, e.g. https://x.link/?link=https://example.com
        long_link: Option<String>,

        /// Request a short, reusable path instead of an unguessable one
        #[arg(short, long)]
        short: bool,
    },

    /// Expand a short link into its long form
    Resolve {
        /// Short or preview link, e.g. https://preview.x.link/aB3dE9
        url: String,
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
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &config).await?,
        Commands::Stats => handle_stats(&config).await?,
        Commands::Shorten { long_link, short } => handle_shorten(&config, long_link, short).await?,
        Commands::Resolve { url } => handle_resolve(&config, &url).await?,
    }

    Ok(())
}

async fn connect(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("Database commands require DB_DRIVER=postgres and DATABASE_URL")?;

    connect_with_retry(database_url, &pool_settings(config)).await
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    let pool = connect(config).await?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let repo = PgShortLinkRepository::new(Arc::new(pool.clone()));
            repo.ping().await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(&pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "📦 Applying migrations...".bright_blue());

            run_migrations(&pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Displays stored link counts.
async fn handle_stats(config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repo = build_repository(config).await?;
    let counts = repo.count().await?;

    println!(
        "  Short (reusable): {}",
        counts.guessable.to_string().bright_green().bold()
    );
    println!(
        "  Unguessable:      {}",
        counts.unguessable.to_string().bright_green().bold()
    );
    println!(
        "  Total:            {}",
        counts.total().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn link_service(config: &Config) -> Result<LinkService<dyn ShortLinkRepository>> {
    let repo = build_repository(config).await?;
    Ok(LinkService::new(
        repo,
        Arc::new(NullCache::new()),
        config.links.clone(),
    ))
}

/// Creates a short link from a long durable link.
///
/// `--short` overrides any `path` option carried by the long link.
async fn handle_shorten(config: &Config, long_link: Option<String>, short: bool) -> Result<()> {
    println!("{}", "🔗 Shorten Link".bright_blue().bold());
    println!();

    let long_link = match long_link {
        Some(link) => link,
        None => Input::new()
            .with_prompt("Long link")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let service = link_service(config).await?;

    let mut request = service.prepare_request(json!({ "longDurableLink": long_link }))?;
    if short {
        request.suffix.option = SuffixOption::Short;
    }

    let created = service.create_durable_link(request).await?;

    println!("  Short link: {}", created.short_link.bright_yellow().bold());

    if !created.warnings.is_empty() {
        println!();
        println!("{}", "⚠️  Warnings:".yellow());
        for warning in &created.warnings {
            println!("  {} {}", warning.code.as_str().yellow(), warning.message);
        }
    }
    println!();

    Ok(())
}

/// Expands a short link into its long form.
async fn handle_resolve(config: &Config, url: &str) -> Result<()> {
    let service = link_service(config).await?;

    match service.resolve_short_link(url).await {
        Ok(long_link) => {
            println!("  Long link: {}", long_link.bright_green());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌".red(), e.to_string().red());
            Err(e.into())
        }
    }
}
