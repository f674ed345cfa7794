use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::{Row, sqlite::SqlitePool};

use quote_core::cart::QuoteCart;
use quote_core::models::{AssetRecord, QuoteRecord, Theme, UserProfile};
use quote_core::store::{QuoteStore, StoreError};

/// Slot keys. One key per aggregate, plus one `custom_img_{item_id}` key per
/// custom product photo. These names are part of the on-disk format and must
/// not change without a migration.
mod keys {
    pub const PROFILE: &str = "race_director_user";
    pub const CART: &str = "race_quote_cart";
    pub const DIRECTORS: &str = "crm_directors";
    pub const QUOTES: &str = "crm_quotes";
    pub const ASSETS: &str = "admin_artwork_assets";
    pub const THEME: &str = "race_theme";

    pub fn custom_photo(item_id: &str) -> String {
        format!("custom_img_{item_id}")
    }
}

/// A [`QuoteStore`] backed by a sqlite `slots` table.
///
/// Each aggregate is one row, written whole on every save. Theme and custom
/// photos are stored as raw strings; everything else is a JSON document.
pub struct SqliteQuoteStore {
    pool: SqlitePool,
}

impl SqliteQuoteStore {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .with_context(|| format!("Failed to connect to database: {}", database_url))?;
        Ok(Self { pool })
    }

    pub fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn get_slot(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError> {
        let row = sqlx::query("SELECT value FROM slots WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        row.map(|r| {
            r.try_get("value")
                .map_err(|e| StoreError::Storage(e.to_string()))
        })
        .transpose()
    }

    async fn set_slot(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO slots (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(())
    }

    async fn delete_slot(
        &self,
        key: &str,
    ) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM slots WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(())
    }

    async fn load_json<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StoreError> {
        match self.get_slot(key).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| StoreError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    async fn save_json<T: Serialize>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.set_slot(key, &json).await
    }
}

#[async_trait]
impl QuoteStore for SqliteQuoteStore {
    async fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.load_json(keys::PROFILE).await
    }

    async fn save_profile(
        &self,
        profile: &UserProfile,
    ) -> Result<(), StoreError> {
        self.save_json(keys::PROFILE, profile).await
    }

    async fn clear_profile(&self) -> Result<(), StoreError> {
        self.delete_slot(keys::PROFILE).await
    }

    async fn load_cart(&self) -> Result<QuoteCart, StoreError> {
        Ok(self.load_json(keys::CART).await?.unwrap_or_default())
    }

    async fn save_cart(
        &self,
        cart: &QuoteCart,
    ) -> Result<(), StoreError> {
        self.save_json(keys::CART, cart).await
    }

    async fn clear_cart(&self) -> Result<(), StoreError> {
        self.delete_slot(keys::CART).await
    }

    async fn load_directors(&self) -> Result<Vec<UserProfile>, StoreError> {
        Ok(self.load_json(keys::DIRECTORS).await?.unwrap_or_default())
    }

    async fn save_directors(
        &self,
        directors: &[UserProfile],
    ) -> Result<(), StoreError> {
        self.save_json(keys::DIRECTORS, &directors).await
    }

    async fn load_quotes(&self) -> Result<Vec<QuoteRecord>, StoreError> {
        Ok(self.load_json(keys::QUOTES).await?.unwrap_or_default())
    }

    async fn save_quotes(
        &self,
        quotes: &[QuoteRecord],
    ) -> Result<(), StoreError> {
        self.save_json(keys::QUOTES, &quotes).await
    }

    async fn load_assets(&self) -> Result<Vec<AssetRecord>, StoreError> {
        Ok(self.load_json(keys::ASSETS).await?.unwrap_or_default())
    }

    async fn save_assets(
        &self,
        assets: &[AssetRecord],
    ) -> Result<(), StoreError> {
        self.save_json(keys::ASSETS, &assets).await
    }

    async fn load_custom_photo(
        &self,
        item_id: &str,
    ) -> Result<Option<String>, StoreError> {
        self.get_slot(&keys::custom_photo(item_id)).await
    }

    async fn save_custom_photo(
        &self,
        item_id: &str,
        data: &str,
    ) -> Result<(), StoreError> {
        self.set_slot(&keys::custom_photo(item_id), data).await
    }

    async fn load_theme(&self) -> Result<Option<Theme>, StoreError> {
        // An unrecognized stored value reads as no preference.
        Ok(self
            .get_slot(keys::THEME)
            .await?
            .as_deref()
            .and_then(Theme::parse))
    }

    async fn save_theme(
        &self,
        theme: Theme,
    ) -> Result<(), StoreError> {
        self.set_slot(keys::THEME, theme.as_str()).await
    }
}
