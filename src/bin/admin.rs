//! CLI administration tool for url-minimizer.
//!
//! Gives operators access to the store operations that have no HTTP
//! endpoint: looking up an alias and deleting mappings by destination.
//!
//! # Usage
//!
//! ```bash
//! # Store a URL (alias generated when omitted)
//! cargo run --bin admin -- save https://example.com --alias ex1
//!
//! # Look up an alias
//! cargo run --bin admin -- get ex1
//!
//! # Delete every alias pointing at a URL
//! cargo run --bin admin -- delete https://example.com
//!
//! # Check that the storage opens and migrates
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; only `STORAGE_PATH` is required.

use url_minimizer::api::dto::save::SaveRequest;
use url_minimizer::application::services::UrlService;
use url_minimizer::config::{self, Config};
use url_minimizer::domain::repositories::UrlRepository;
use url_minimizer::error::AppError;
use url_minimizer::infrastructure::persistence::SqliteUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing url-minimizer storage.
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
    /// Store a URL under an alias
    Save {
        /// Destination URL
        url: String,

        /// Alias to use (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Get {
        /// Alias to look up
        alias: String,
    },

    /// Delete every alias pointing at a URL
    Delete {
        /// Destination URL to delete
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Storage subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Open the storage, apply migrations and close it again
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_config_files()?;

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let repository = SqliteUrlRepository::connect(&config.storage_path, 1)
        .await
        .context("Failed to open storage")?;
    let repository: Arc<dyn UrlRepository> = Arc::new(repository);
    let service = UrlService::new(repository, config.alias_length);

    let outcome = match cli.command {
        Commands::Save { url, alias } => save_url(&service, url, alias).await,
        Commands::Get { alias } => get_url(&service, alias).await,
        Commands::Delete { url, yes } => delete_url(&service, url, yes).await,
        Commands::Db { action } => handle_db_action(action, &config),
    };

    service
        .close()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to close storage: {}", e))?;

    outcome
}

/// Stores a URL the same way the HTTP endpoint does.
async fn save_url(
    service: &UrlService<dyn UrlRepository>,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Save URL".bright_blue().bold());
    println!();

    let request = SaveRequest::new(url, alias);
    if let Err(e) = request.check() {
        println!("{}", format!("  {e}").red());
        anyhow::bail!("Invalid URL");
    }

    let url = request.url.as_deref().unwrap_or_default();
    match service.save_url(url, request.alias.as_deref()).await {
        Ok(record) => {
            println!("  Alias: {}", record.alias.bright_yellow().bold());
            println!("  URL:   {}", record.url.cyan());
            println!("  ID:    {}", record.id.to_string().bright_black());
            println!();
            println!("{}", "✅ Saved".green().bold());
            Ok(())
        }
        Err(AppError::AliasConflict { .. }) => {
            println!("{}", "⚠️  Alias is already taken".yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to save URL: {}", e)),
    }
}

/// Prints the destination stored under an alias.
async fn get_url(service: &UrlService<dyn UrlRepository>, alias: String) -> Result<()> {
    match service.get_url(&alias).await {
        Ok(url) => {
            println!("  {} → {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("  No URL stored under '{alias}'").yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to get URL: {}", e)),
    }
}

/// Deletes every mapping whose destination is `url`.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
/// - Aliases are unique but destinations are not, so several aliases may go
async fn delete_url(service: &UrlService<dyn UrlRepository>, url: String, yes: bool) -> Result<()> {
    println!("{}", "🗑️  Delete URL".bright_blue().bold());
    println!();
    println!("  URL: {}", url.cyan());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete every alias pointing at this URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = service
        .delete_url(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete URL: {}", e))?;

    if deleted == 0 {
        println!("{}", "  Nothing matched".yellow());
    } else {
        println!(
            "{} {}",
            "✅ Deleted".green().bold(),
            format!("{deleted} alias(es)").bright_white()
        );
    }
    println!();

    Ok(())
}

/// Handles storage diagnostic commands.
///
/// Opening the storage already applied migrations, so reaching this point
/// means the check passed.
fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!(
                "{} {}",
                "🔍 Storage".bright_blue(),
                config.storage_path.bright_white()
            );
            println!("{}", "✅ Storage opened and migrated".green().bold());
        }
    }

    Ok(())
}
