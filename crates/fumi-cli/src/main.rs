//! Fumi CLI - Find your name, open your letter
//!
//! Terminal version of the wedding greeting envelope.

mod api;
mod app;
mod config;
mod render;
mod storage;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use fumi::{
    resolve, DomainError, GreetingSession, GuestDirectory, LookupFailure, ResolvedGuest,
    RevealTimings, SessionCache, SystemClock,
};

use api::DirectorySource;
use config::Config;
use storage::FileStore;

#[derive(Parser)]
#[command(name = "fumi")]
#[command(about = "Fumi - Find your name, open your letter", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory server URL (overrides config)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Local directory JSON file (overrides config)
    #[arg(long, global = true)]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the envelope (default)
    Open,

    /// Look a name up in the directory once, bypassing the remembered guest
    Lookup {
        /// Name in kanji or kana
        name: String,
    },

    /// Forget the remembered guest
    Reset,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Use a directory server
    SetUrl {
        /// Base URL, e.g. https://wedding.example
        url: String,
    },
    /// Use a local directory file
    SetDirectory {
        /// Path to a JSON guest list
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.url {
        config.set_base_url(url);
    }
    if let Some(path) = cli.directory {
        config.set_directory_path(path);
    }

    match cli.command.unwrap_or(Commands::Open) {
        Commands::Open => cmd_open(&config).await,
        Commands::Lookup { name } => cmd_lookup(&config, &name).await,
        Commands::Reset => cmd_reset(),
        Commands::Config { action } => cmd_config(action),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_open(config: &Config) -> Result<()> {
    let directory = Arc::new(DirectorySource::from_config(config));
    let store = Arc::new(FileStore::open_default()?);

    tracing::info!("Guest directory: {}", directory.describe());

    let session = GreetingSession::start(directory, store, SystemClock, RevealTimings::default());
    app::run(session, config).await
}

async fn cmd_lookup(config: &Config, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        println!("{}", "Name is empty".yellow());
        return Ok(());
    }

    let directory = DirectorySource::from_config(config);
    let records = match directory.fetch_all().await {
        Ok(records) => records,
        Err(e) => {
            println!("{} {}", "✗".red(), LookupFailure::DirectoryUnavailable.message());
            println!("  {}", e.to_string().dimmed());
            return Ok(());
        }
    };

    match resolve(name, &records) {
        Ok(record) => {
            let guest = ResolvedGuest::from(record);
            println!("{} {} ({})", "✓".green(), guest.name.cyan().bold(), record.id.dimmed());
            println!("  {}", guest.message);
        }
        Err(DomainError::NotFound(key)) => {
            println!("{} {}", "✗".red(), LookupFailure::NotFound.message());
            println!("  {}", format!("searched for {}", key).dimmed());
        }
        Err(e) => return Err(e.into()),
    }

    if let Some(remembered) = remembered_guest() {
        println!(
            "  {}",
            format!("remembered guest: {} (used by `fumi open`)", remembered.name).dimmed()
        );
    }

    Ok(())
}

/// Guest the envelope session would open straight away, if any
fn remembered_guest() -> Option<ResolvedGuest> {
    remembered_in(FileStore::open_default().ok()?)
}

fn remembered_in(store: FileStore) -> Option<ResolvedGuest> {
    SessionCache::new(Arc::new(store)).load()
}

fn cmd_reset() -> Result<()> {
    let store = FileStore::open_default()?;
    let path = store.path().to_path_buf();

    SessionCache::new(Arc::new(store))
        .clear()
        .with_context(|| format!("Failed to clear {:?}", path))?;

    println!("{} Remembered guest cleared", "✓".green());
    Ok(())
}

fn cmd_config(action: Option<ConfigAction>) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        Some(ConfigAction::SetUrl { url }) => {
            config.set_base_url(url);
            config.save()?;
            println!("{} Directory server set to {}", "✓".green(), config.base_url);
        }
        Some(ConfigAction::SetDirectory { path }) => {
            config.set_directory_path(path);
            config.save()?;
            println!("{} Directory file set", "✓".green());
        }
        None => {
            let remembered = remembered_guest();

            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Directory: {}", DirectorySource::from_config(&config).describe());
            println!("  Subtitle: {}", config.subtitle);
            println!("  Signature: {}", config.signature);
            println!(
                "  Remembered guest: {}",
                remembered
                    .map(|g| g.name.cyan().to_string())
                    .unwrap_or_else(|| "None".dimmed().to_string())
            );
        }
    }

    Ok(())
}
