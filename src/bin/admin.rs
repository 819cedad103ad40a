//! CLI administration tool for hash-shortener.
//!
//! Works against the same store as the server, configured through the same
//! environment variables (`STORE_BACKEND`, `MAPPING_TABLE`, `DATABASE_URL`, ...).
//!
//! # Usage
//!
//! ```bash
//! # Print the identifier a URL maps to (no store access)
//! cargo run --bin admin -- id "https://example.com/very/long/path"
//!
//! # Store a mapping, asking before replacing a different URL
//! cargo run --bin admin -- shorten "https://example.com" --check
//!
//! # Look up an identifier
//! cargo run --bin admin -- resolve HkTRTCT
//!
//! # Check store connectivity
//! cargo run --bin admin -- store check
//! ```

use hash_shortener::application::services::{ResolverService, ShortenerService};
use hash_shortener::config::{self, Config};
use hash_shortener::domain::entities::Mapping;
use hash_shortener::domain::repositories::MappingStore;
use hash_shortener::error::AppError;
use hash_shortener::server::connect_store;
use hash_shortener::utils::short_id::derive_short_id;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI tool for managing hash-shortener mappings.
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
    /// Print the short identifier for a URL without touching the store
    Id {
        /// The original URL
        url: String,
    },

    /// Store a mapping and print the short URL
    Shorten {
        /// The original URL
        url: String,

        /// Look up the identifier first and confirm before replacing a different URL
        #[arg(short, long)]
        check: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the URL stored for an identifier
    Resolve {
        /// 7-character short identifier
        short_id: String,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Store diagnostic subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Id { url } => {
            println!("{}", derive_short_id(&url).bright_yellow().bold());
        }
        Commands::Shorten { url, check, yes } => {
            let (config, store) = open_store().await?;
            shorten(&config, store, url, check, yes).await?;
        }
        Commands::Resolve { short_id } => {
            let (config, store) = open_store().await?;
            resolve(&config, store, short_id).await?;
        }
        Commands::Store { action } => {
            let (config, store) = open_store().await?;
            handle_store_action(action, &config, store).await?;
        }
    }

    Ok(())
}

/// Loads configuration and connects to the configured store.
async fn open_store() -> Result<(Config, Arc<dyn MappingStore>)> {
    let config = config::load_from_env().context("Invalid configuration")?;
    let store = connect_store(&config).await?;
    Ok((config, store))
}

/// Stores a mapping, optionally checking for an identifier collision first.
///
/// # Flow
///
/// 1. Derive the identifier
/// 2. With `--check`, read the current record at that identifier
/// 3. If it holds a different URL, show both and confirm (unless `--yes`)
/// 4. Write the mapping and print the short URL
async fn shorten(
    config: &Config,
    store: Arc<dyn MappingStore>,
    url: String,
    check: bool,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    if check {
        let short_id = derive_short_id(&url);
        let existing = lookup_existing(config, store.as_ref(), &short_id).await?;

        match existing {
            Some(mapping) if mapping.original_url != url => {
                println!(
                    "{}",
                    "⚠️  Identifier collision: this write replaces another URL"
                        .yellow()
                        .bold()
                );
                println!("  Identifier: {}", short_id.bright_yellow());
                println!("  Stored:     {}", mapping.original_url.cyan());
                println!("  New:        {}", url.cyan());
                println!();

                if !skip_confirm {
                    let confirmed = Confirm::new()
                        .with_prompt("Replace the stored URL?")
                        .default(false)
                        .interact()?;

                    if !confirmed {
                        println!("{}", "❌ Cancelled".red());
                        return Ok(());
                    }
                }
            }
            Some(_) => println!("{}", "ℹ️  Mapping already stored".bright_black()),
            None => {}
        }
    }

    let shortener = ShortenerService::new(store, &config.base_url, config.store_timeout());
    let link = shortener.shorten(&url).await.map_err(describe)?;

    println!("  Identifier: {}", link.short_id.bright_yellow());
    println!("  Short URL:  {}", link.short_url.bright_green().bold());
    println!();

    Ok(())
}

/// Reads the record currently stored at `short_id`, bounded by the store timeout.
async fn lookup_existing(
    config: &Config,
    store: &dyn MappingStore,
    short_id: &str,
) -> Result<Option<Mapping>> {
    tokio::time::timeout(config.store_timeout(), store.get(short_id))
        .await
        .map_err(|_| anyhow::anyhow!("Store error: timed out after {}ms", config.store_timeout_ms))?
        .map_err(|e| anyhow::anyhow!("Store error: {}", e))
}

/// Looks up an identifier and prints the stored URL.
async fn resolve(config: &Config, store: Arc<dyn MappingStore>, short_id: String) -> Result<()> {
    let resolver = ResolverService::new(store, config.store_timeout());

    match resolver.resolve(&short_id).await {
        Ok(url) => {
            println!("  {} → {}", short_id.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(AppError::NotFound) => {
            println!("{}", format!("  No mapping for {}", short_id).yellow());
            Ok(())
        }
        Err(e) => Err(describe(e)),
    }
}

/// Handles store diagnostic commands.
async fn handle_store_action(
    action: StoreAction,
    config: &Config,
    store: Arc<dyn MappingStore>,
) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!(
                "{}",
                format!(
                    "🔍 Checking {} store (table: {})...",
                    config.store_backend, config.mapping_table
                )
                .bright_blue()
            );

            let healthy = tokio::time::timeout(config.store_timeout(), store.health_check())
                .await
                .unwrap_or(false);

            if !healthy {
                anyhow::bail!("Store is unreachable");
            }

            println!("{}", "✅ Store connection OK".green().bold());
        }
    }

    Ok(())
}

/// Turns a service error into a CLI error. Store detail is logged by the service.
fn describe(e: AppError) -> anyhow::Error {
    anyhow::Error::new(e).context("Operation failed")
}
