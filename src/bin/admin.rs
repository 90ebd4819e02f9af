//! CLI administration tool for link-registry.
//!
//! Works directly against the database, through the same service layer the
//! HTTP API uses.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Create a link (slug optional)
//! cargo run --bin admin -- links create https://example.com --slug docs
//!
//! # Delete a link
//! cargo run --bin admin -- links delete docs
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use link_registry::application::services::LinkService;
use link_registry::domain::entities::Link;
use link_registry::infrastructure::persistence::PgLinkRepository;
use link_registry::utils::slug::RandomSlugGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-registry.
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
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links
    List,

    /// Create a link
    Create {
        /// Target URL
        url: String,

        /// Custom slug (generated if not provided)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Delete a link
    Delete {
        /// Slug of the link to delete
        slug: String,

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

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;

    let service = LinkService::new(
        Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))),
        Arc::new(RandomSlugGenerator::default()),
    );

    match action {
        LinkAction::List => list_links(&service).await?,
        LinkAction::Create { url, slug } => create_link(&service, url, slug).await?,
        LinkAction::Delete { slug, yes } => delete_link(&service, slug, yes).await?,
    }

    Ok(())
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   ID  Slug             Created              URL
///   ─────────────────────────────────────────────────────────────
///   1   docs             2024-01-15 10:30     https://example.com/docs
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<16} {:<20} {}",
        "ID".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        print_link_row(link);
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

fn print_link_row(link: &Link) {
    println!(
        "  {:<4} {:<16} {:<20} {}",
        link.id.to_string().bright_black(),
        link.slug.cyan(),
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black(),
        link.url
    );
}

/// Creates a link and prints it.
async fn create_link(service: &LinkService, url: String, slug: Option<String>) -> Result<()> {
    let link = service
        .create_link(url, slug)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!("  Slug: {}", link.slug.bright_yellow().bold());
    println!("  URL:  {}", link.url);

    Ok(())
}

/// Deletes a link after confirmation.
async fn delete_link(service: &LinkService, slug: String, skip_confirm: bool) -> Result<()> {
    let link = service
        .find_link(&slug)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let Some(link) = link else {
        println!("{}", "⚠️  No link with this slug".yellow());
        return Ok(());
    };

    println!("  Slug: {}", link.slug.cyan());
    println!("  URL:  {}", link.url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(&link.slug)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✅ Link deleted".green().bold());

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
    }

    Ok(())
}
