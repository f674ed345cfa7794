//! Admin console helpers: roster/history search, display formatting, and
//! backup file transfer between the store and disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use quote_core::backup::{self, BackupPayload};
use quote_core::models::{QuoteRecord, UserProfile};
use quote_core::render;
use quote_core::store::QuoteStore;

/// Quote records whose director name or event name contains `query`,
/// case-insensitively. An empty query matches everything.
pub fn filter_quotes<'a>(
    quotes: &'a [QuoteRecord],
    query: &str,
) -> Vec<&'a QuoteRecord> {
    let needle = query.to_lowercase();
    quotes
        .iter()
        .filter(|q| {
            q.user_name.to_lowercase().contains(&needle)
                || q.event_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Roster entries whose full name or club name contains `query`,
/// case-insensitively. An empty query matches everything.
pub fn filter_directors<'a>(
    directors: &'a [UserProfile],
    query: &str,
) -> Vec<&'a UserProfile> {
    let needle = query.to_lowercase();
    directors
        .iter()
        .filter(|d| {
            d.full_name.to_lowercase().contains(&needle)
                || d.club_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// One-line listing entry for a quote record.
pub fn format_quote_line(record: &QuoteRecord) -> String {
    format!(
        "{}  {}  {} ({} items)  {}",
        record.id,
        record.timestamp.format("%Y-%m-%d %H:%M"),
        record.event_name,
        record.items.len(),
        record.user_name,
    )
}

/// Full plain-text rendering of one quote record, as sent to the director.
pub fn format_quote_details(record: &QuoteRecord) -> String {
    render::quote_request_message(&record.user_details, &record.items)
}

/// One-line listing entry for a roster director.
pub fn format_director_line(director: &UserProfile) -> String {
    format!(
        "{}  {} ({})  {}  {}",
        director.id.as_deref().unwrap_or("-"),
        director.full_name,
        director.club_name,
        director.email,
        director.event_name,
    )
}

/// What an import replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub directors: usize,
    pub quotes: usize,
    pub assets: Option<usize>,
}

/// Writes a timestamped backup file into `dir` and returns its path.
pub async fn export_to_dir(
    store: &dyn QuoteStore,
    dir: &Path,
) -> Result<PathBuf> {
    let payload = backup::export_backup(store)
        .await
        .context("Failed to read store contents for export")?;
    let json = backup::payload_to_json(&payload).context("Failed to serialize backup")?;

    let at = payload.exported_at.unwrap_or_else(Utc::now);
    let path = dir.join(backup::backup_filename(at));
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write backup file: {}", path.display()))?;
    Ok(path)
}

/// Reads a backup file and replaces the store contents with it.
///
/// A file that fails to parse leaves the store untouched.
pub async fn import_from_file(
    store: &dyn QuoteStore,
    path: &Path,
) -> Result<ImportSummary> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read backup file: {}", path.display()))?;
    let payload: BackupPayload = backup::parse_backup(&json)
        .with_context(|| format!("Invalid backup file: {}", path.display()))?;

    let summary = ImportSummary {
        directors: payload.directors.len(),
        quotes: payload.quotes.len(),
        assets: payload.assets.as_ref().map(Vec::len),
    };

    backup::import_backup(store, &payload)
        .await
        .context("Failed to apply imported backup")?;
    Ok(summary)
}
