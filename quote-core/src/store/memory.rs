//! In-memory store backend for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::cart::QuoteCart;
use crate::models::{AssetRecord, QuoteRecord, Theme, UserProfile};
use crate::store::repository::{QuoteStore, StoreError};

#[derive(Debug, Default)]
struct Slots {
    profile: Option<UserProfile>,
    cart: QuoteCart,
    directors: Vec<UserProfile>,
    quotes: Vec<QuoteRecord>,
    assets: Vec<AssetRecord>,
    custom_photos: HashMap<String, String>,
    theme: Option<Theme>,
}

/// A [`QuoteStore`] holding everything in process memory.
///
/// Locks are held only for the duration of a copy in or out; no await point
/// ever holds the mutex.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<Slots>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuoteStore for MemoryStore {
    async fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.slots.lock().unwrap().profile.clone())
    }

    async fn save_profile(
        &self,
        profile: &UserProfile,
    ) -> Result<(), StoreError> {
        self.slots.lock().unwrap().profile = Some(profile.clone());
        Ok(())
    }

    async fn clear_profile(&self) -> Result<(), StoreError> {
        self.slots.lock().unwrap().profile = None;
        Ok(())
    }

    async fn load_cart(&self) -> Result<QuoteCart, StoreError> {
        Ok(self.slots.lock().unwrap().cart.clone())
    }

    async fn save_cart(
        &self,
        cart: &QuoteCart,
    ) -> Result<(), StoreError> {
        self.slots.lock().unwrap().cart = cart.clone();
        Ok(())
    }

    async fn clear_cart(&self) -> Result<(), StoreError> {
        self.slots.lock().unwrap().cart = QuoteCart::new();
        Ok(())
    }

    async fn load_directors(&self) -> Result<Vec<UserProfile>, StoreError> {
        Ok(self.slots.lock().unwrap().directors.clone())
    }

    async fn save_directors(
        &self,
        directors: &[UserProfile],
    ) -> Result<(), StoreError> {
        self.slots.lock().unwrap().directors = directors.to_vec();
        Ok(())
    }

    async fn load_quotes(&self) -> Result<Vec<QuoteRecord>, StoreError> {
        Ok(self.slots.lock().unwrap().quotes.clone())
    }

    async fn save_quotes(
        &self,
        quotes: &[QuoteRecord],
    ) -> Result<(), StoreError> {
        self.slots.lock().unwrap().quotes = quotes.to_vec();
        Ok(())
    }

    async fn load_assets(&self) -> Result<Vec<AssetRecord>, StoreError> {
        Ok(self.slots.lock().unwrap().assets.clone())
    }

    async fn save_assets(
        &self,
        assets: &[AssetRecord],
    ) -> Result<(), StoreError> {
        self.slots.lock().unwrap().assets = assets.to_vec();
        Ok(())
    }

    async fn load_custom_photo(
        &self,
        item_id: &str,
    ) -> Result<Option<String>, StoreError> {
        Ok(self.slots.lock().unwrap().custom_photos.get(item_id).cloned())
    }

    async fn save_custom_photo(
        &self,
        item_id: &str,
        data: &str,
    ) -> Result<(), StoreError> {
        self.slots
            .lock()
            .unwrap()
            .custom_photos
            .insert(item_id.to_string(), data.to_string());
        Ok(())
    }

    async fn load_theme(&self) -> Result<Option<Theme>, StoreError> {
        Ok(self.slots.lock().unwrap().theme)
    }

    async fn save_theme(
        &self,
        theme: Theme,
    ) -> Result<(), StoreError> {
        self.slots.lock().unwrap().theme = Some(theme);
        Ok(())
    }
}
