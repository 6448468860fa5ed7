//! mediacat: media-catalog CLI.
//!
//! Loads configuration, bootstraps the backend with connectivity-aware
//! retries, then runs one catalog operation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

use mediacat::backend::{enable_offline_cache, RemoteConnector};
use mediacat::bootstrap::{BackoffPolicy, Bootstrapper};
use mediacat::catalog::{CategoryKind, CategoryStore};
use mediacat::config::load_config;
use mediacat::connectivity::HttpProber;
use mediacat::observability::init_logging;

#[derive(Parser)]
#[command(name = "mediacat", version, about = "Media catalog client")]
struct Cli {
    /// Path to a TOML config file; credentials may also come from
    /// MEDIACAT_* environment variables.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one connectivity probe and report the result.
    Probe,
    /// Bootstrap the backend and exit.
    Init,
    /// List categories of one kind.
    List {
        #[arg(long, default_value = "video")]
        kind: CategoryKind,
    },
    /// Create a category (or reuse the existing one with the same name).
    Add {
        name: String,
        #[arg(long, default_value = "video")]
        kind: CategoryKind,
    },
    /// Rename a category.
    Rename { id: Uuid, name: String },
    /// Delete a category.
    Remove { id: Uuid },
    /// Search categories by name substring.
    Search {
        query: String,
        #[arg(long, default_value = "video")]
        kind: CategoryKind,
    },
    /// Upload a cover image for a category and print its public URL.
    SetCover { id: Uuid, file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Configuration errors (missing API key above all) surface here, before
    // any probe or construction attempt.
    let config = load_config(cli.config.as_deref())?;

    init_logging(&config.observability.log_level);
    tracing::info!("mediacat v0.1.0 starting");

    let prober = HttpProber::new(&config.prober);

    if let Command::Probe = cli.command {
        use mediacat::connectivity::Prober;
        let reachable = prober.probe().await;
        println!("network reachable: {}", reachable);
        return Ok(());
    }

    let bootstrapper = Bootstrapper::new(
        prober,
        RemoteConnector::new(config.backend.clone()),
        BackoffPolicy::from_config(&config.retry),
    );
    let handles = bootstrapper.run().await?;

    // Best-effort: a conflict or unsupported environment degrades to
    // non-cached operation with a warning.
    let cache = enable_offline_cache(&config.cache);

    // Hold a clone so the lock is released even when the command fails
    let result = run_command(cli.command, &handles, cache.clone()).await;
    if let Some(cache) = cache {
        cache.release();
    }
    result
}

async fn run_command(
    command: Command,
    handles: &mediacat::BackendHandles,
    cache: Option<mediacat::backend::OfflineCache>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Command::Init = command {
        tracing::info!(cached = cache.is_some(), "Backend ready");
        println!("backend initialized");
        return Ok(());
    }

    let store = CategoryStore::load(handles.documents.clone(), cache, whoami()).await?;

    match command {
        Command::Probe | Command::Init => unreachable!("handled above"),
        Command::List { kind } => {
            for category in store.list(kind) {
                println!("{}  {}", category.id, category.name);
            }
        }
        Command::Add { name, kind } => {
            let category = store.add(&name, kind).await?;
            println!("{}  {}", category.id, category.name);
        }
        Command::Rename { id, name } => match store.rename(id, &name).await? {
            Some(category) => println!("{}  {}", category.id, category.name),
            None => eprintln!("no category with id {}", id),
        },
        Command::Remove { id } => {
            store.remove(id).await?;
        }
        Command::Search { query, kind } => {
            for category in store.search(&query, kind) {
                println!("{}  {}", category.id, category.name);
            }
        }
        Command::SetCover { id, file } => {
            let bytes = std::fs::read(&file)?;
            let content_type = match file.extension().and_then(|e| e.to_str()) {
                Some("png") => "image/png",
                Some("jpg") | Some("jpeg") => "image/jpeg",
                Some("webp") => "image/webp",
                _ => "application/octet-stream",
            };
            let object = format!("covers/{}", id);
            handles.blobs.upload(&object, content_type, bytes).await?;
            println!("{}", handles.blobs.public_url(&object)?);
        }
    }

    Ok(())
}

fn whoami() -> String {
    std::env::var("USER").unwrap_or_else(|_| "local-user".to_string())
}
