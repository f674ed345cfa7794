//! Backup export/import of the persisted admin data.
//!
//! The backup file is a single JSON document holding the directors roster,
//! the quote history, the asset gallery, and an export timestamp. Import is
//! a full overwrite, not a merge; a file that fails to parse or lacks the
//! `directors`/`quotes` keys is rejected before any state is touched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AssetRecord, QuoteRecord, UserProfile};
use crate::store::{QuoteStore, StoreError};

/// Product label used in the backup filename.
pub const PRODUCT_NAME: &str = "RUNSPEND";

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("invalid backup file: {0}")]
    Parse(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The complete backup payload.
///
/// `directors` and `quotes` are required — their absence fails the parse,
/// which is the minimum validity check on import. `assets` and `exportedAt`
/// are tolerated as absent in imported files; exports always write both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPayload {
    pub directors: Vec<UserProfile>,
    pub quotes: Vec<QuoteRecord>,
    #[serde(default)]
    pub assets: Option<Vec<AssetRecord>>,
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
}

/// Gathers the current roster, history, and assets into a payload stamped
/// with the export time.
pub async fn export_backup(store: &dyn QuoteStore) -> Result<BackupPayload, StoreError> {
    Ok(BackupPayload {
        directors: store.load_directors().await?,
        quotes: store.load_quotes().await?,
        assets: Some(store.load_assets().await?),
        exported_at: Some(Utc::now()),
    })
}

/// Serializes a payload to the pretty-printed backup document.
pub fn payload_to_json(payload: &BackupPayload) -> Result<String, BackupError> {
    serde_json::to_string_pretty(payload).map_err(|e| BackupError::Parse(e.to_string()))
}

/// Parses a backup document.
///
/// Rejection here is the whole validity check: nothing reaches the store
/// until a payload has parsed, so a bad file leaves state untouched.
pub fn parse_backup(json: &str) -> Result<BackupPayload, BackupError> {
    serde_json::from_str(json).map_err(|e| BackupError::Parse(e.to_string()))
}

/// Wholesale-replaces directors and quotes with the imported values.
/// Assets are replaced only when the file carried them; otherwise the
/// current gallery is kept.
pub async fn import_backup(
    store: &dyn QuoteStore,
    payload: &BackupPayload,
) -> Result<(), StoreError> {
    store.save_directors(&payload.directors).await?;
    store.save_quotes(&payload.quotes).await?;
    if let Some(assets) = &payload.assets {
        store.save_assets(assets).await?;
    }
    Ok(())
}

/// Backup filename for an export taken at `at`:
/// `RUNSPEND_DATABASE_BACKUP_{epoch-millis}.json`.
pub fn backup_filename(at: DateTime<Utc>) -> String {
    format!(
        "{PRODUCT_NAME}_DATABASE_BACKUP_{}.json",
        at.timestamp_millis()
    )
}
