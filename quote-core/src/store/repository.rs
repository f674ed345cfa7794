use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use crate::cart::QuoteCart;
use crate::models::{AssetRecord, QuoteRecord, Theme, UserProfile};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

/// The persisted store: exclusive owner of durable state.
///
/// One slot per aggregate — profile, cart, directors roster, quote history,
/// uploaded assets, per-item custom photos, theme. All components read and
/// write through these accessors; nothing touches the underlying storage
/// directly.
///
/// The provided methods implement the read-modify-write composites on top of
/// the load/save primitives, so every backend shares their semantics. All
/// mutation happens on the single UI thread in direct response to discrete
/// user actions; each composite completes before control yields, so no
/// interleaving is possible by construction.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    // Current organizer profile
    async fn load_profile(&self) -> Result<Option<UserProfile>, StoreError>;
    async fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError>;
    async fn clear_profile(&self) -> Result<(), StoreError>;

    // Current cart
    async fn load_cart(&self) -> Result<QuoteCart, StoreError>;
    async fn save_cart(&self, cart: &QuoteCart) -> Result<(), StoreError>;
    async fn clear_cart(&self) -> Result<(), StoreError>;

    // Directors roster
    async fn load_directors(&self) -> Result<Vec<UserProfile>, StoreError>;
    async fn save_directors(&self, directors: &[UserProfile]) -> Result<(), StoreError>;

    // Quote history (most-recent-first)
    async fn load_quotes(&self) -> Result<Vec<QuoteRecord>, StoreError>;
    async fn save_quotes(&self, quotes: &[QuoteRecord]) -> Result<(), StoreError>;

    // Uploaded assets (newest-first)
    async fn load_assets(&self) -> Result<Vec<AssetRecord>, StoreError>;
    async fn save_assets(&self, assets: &[AssetRecord]) -> Result<(), StoreError>;

    // Per-item custom product photos
    async fn load_custom_photo(&self, item_id: &str) -> Result<Option<String>, StoreError>;
    async fn save_custom_photo(&self, item_id: &str, data: &str) -> Result<(), StoreError>;

    // Theme preference
    async fn load_theme(&self) -> Result<Option<Theme>, StoreError>;
    async fn save_theme(&self, theme: Theme) -> Result<(), StoreError>;

    /// Adds the profile to the roster unless an entry with the same contact
    /// email already exists (first-write-wins). New entries get a fresh id
    /// and timestamp. Returns whether an entry was added.
    async fn upsert_director(
        &self,
        profile: &UserProfile,
    ) -> Result<bool, StoreError> {
        let mut directors = self.load_directors().await?;
        if directors.iter().any(|d| d.email == profile.email) {
            return Ok(false);
        }
        let mut entry = profile.clone();
        entry.id = Some(UserProfile::new_director_id());
        entry.timestamp = Some(Utc::now());
        directors.push(entry);
        self.save_directors(&directors).await?;
        Ok(true)
    }

    /// Prepends a finalized record to the quote history.
    async fn prepend_quote(
        &self,
        record: &QuoteRecord,
    ) -> Result<(), StoreError> {
        let mut quotes = self.load_quotes().await?;
        quotes.insert(0, record.clone());
        self.save_quotes(&quotes).await
    }

    /// Deletes one record by id. Returns whether a record was removed.
    async fn delete_quote(
        &self,
        id: &str,
    ) -> Result<bool, StoreError> {
        let mut quotes = self.load_quotes().await?;
        let before = quotes.len();
        quotes.retain(|q| q.id != id);
        if quotes.len() == before {
            return Ok(false);
        }
        self.save_quotes(&quotes).await?;
        Ok(true)
    }

    /// Adds an uploaded asset at the front of the gallery.
    async fn add_asset(
        &self,
        asset: &AssetRecord,
    ) -> Result<(), StoreError> {
        let mut assets = self.load_assets().await?;
        assets.insert(0, asset.clone());
        self.save_assets(&assets).await
    }

    /// Deletes one asset by id. Returns whether an asset was removed.
    async fn delete_asset(
        &self,
        id: &str,
    ) -> Result<bool, StoreError> {
        let mut assets = self.load_assets().await?;
        let before = assets.len();
        assets.retain(|a| a.id != id);
        if assets.len() == before {
            return Ok(false);
        }
        self.save_assets(&assets).await?;
        Ok(true)
    }
}
