use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quote_admin::{
    export_to_dir, filter_directors, filter_quotes, format_director_line, format_quote_details,
    format_quote_line, import_from_file,
};
use quote_core::store::QuoteStore;
use quote_db_sqlite::SqliteQuoteStore;

/// RUNSPEND admin console: inspect and manage the directors roster, the
/// quote history, and the artwork gallery, and transfer database backups.
#[derive(Parser, Debug)]
#[command(name = "quote-admin")]
#[command(version, about, long_about = None)]
struct Args {
    /// SQLite database URL (e.g., sqlite:runspend.db?mode=rwc to create if missing)
    #[arg(short, long, default_value = "sqlite:runspend.db?mode=rwc")]
    database: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Quote history
    Quotes {
        #[command(subcommand)]
        action: QuotesAction,
    },
    /// Directors roster
    Directors {
        #[command(subcommand)]
        action: DirectorsAction,
    },
    /// Artwork gallery
    Assets {
        #[command(subcommand)]
        action: AssetsAction,
    },
    /// Write a backup file of the full database
    Export {
        /// Directory to write the backup file into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Replace the database contents with a backup file
    Import {
        /// Path to the backup file
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum QuotesAction {
    /// List all quote records, most recent first
    List,
    /// Print the full quote request for one record
    Show { id: String },
    /// Delete one record by id
    Delete { id: String },
    /// List records matching a director or event name
    Search { query: String },
}

#[derive(Subcommand, Debug)]
enum DirectorsAction {
    /// List all registered directors
    List,
    /// List directors matching a name or club
    Search { query: String },
}

#[derive(Subcommand, Debug)]
enum AssetsAction {
    /// List uploaded artwork assets, newest first
    List,
    /// Delete one asset by id
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let store = SqliteQuoteStore::new(&args.database)
        .await
        .with_context(|| format!("Failed to connect to database: {}", args.database))?;
    store
        .run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::debug!(database = %args.database, "store ready");

    match args.command {
        Command::Quotes { action } => run_quotes(&store, action).await,
        Command::Directors { action } => run_directors(&store, action).await,
        Command::Assets { action } => run_assets(&store, action).await,
        Command::Export { out } => {
            let path = export_to_dir(&store, &out).await?;
            println!("Backup written to: {}", path.display());
            Ok(())
        }
        Command::Import { file } => {
            let summary = import_from_file(&store, &file).await?;
            println!(
                "Imported {} directors and {} quotes.",
                summary.directors, summary.quotes
            );
            match summary.assets {
                Some(n) => println!("Imported {} assets.", n),
                None => println!("Backup carried no assets; existing gallery kept."),
            }
            Ok(())
        }
    }
}

async fn run_quotes(
    store: &dyn QuoteStore,
    action: QuotesAction,
) -> Result<()> {
    let quotes = store.load_quotes().await?;
    match action {
        QuotesAction::List => {
            if quotes.is_empty() {
                println!("No quote records.");
            }
            for record in &quotes {
                println!("{}", format_quote_line(record));
            }
        }
        QuotesAction::Show { id } => {
            let Some(record) = quotes.iter().find(|q| q.id == id) else {
                bail!("No quote record with id: {}", id);
            };
            println!("{}", format_quote_details(record));
        }
        QuotesAction::Delete { id } => {
            if !store.delete_quote(&id).await? {
                bail!("No quote record with id: {}", id);
            }
            println!("Deleted quote record: {}", id);
        }
        QuotesAction::Search { query } => {
            for record in filter_quotes(&quotes, &query) {
                println!("{}", format_quote_line(record));
            }
        }
    }
    Ok(())
}

async fn run_directors(
    store: &dyn QuoteStore,
    action: DirectorsAction,
) -> Result<()> {
    let directors = store.load_directors().await?;
    match action {
        DirectorsAction::List => {
            if directors.is_empty() {
                println!("No registered directors.");
            }
            for director in &directors {
                println!("{}", format_director_line(director));
            }
        }
        DirectorsAction::Search { query } => {
            for director in filter_directors(&directors, &query) {
                println!("{}", format_director_line(director));
            }
        }
    }
    Ok(())
}

async fn run_assets(
    store: &dyn QuoteStore,
    action: AssetsAction,
) -> Result<()> {
    match action {
        AssetsAction::List => {
            let assets = store.load_assets().await?;
            if assets.is_empty() {
                println!("No uploaded assets.");
            }
            for asset in &assets {
                println!("{}  {}  ({} bytes)", asset.id, asset.name, asset.data.len());
            }
        }
        AssetsAction::Delete { id } => {
            if !store.delete_asset(&id).await? {
                bail!("No asset with id: {}", id);
            }
            println!("Deleted asset: {}", id);
        }
    }
    Ok(())
}
