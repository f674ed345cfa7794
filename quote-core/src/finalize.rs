//! Committing the current cart to permanent history.

use chrono::Utc;
use tracing::debug;

use crate::cart::QuoteCart;
use crate::models::{QuoteRecord, UserProfile};
use crate::store::{QuoteStore, StoreError};

/// Packages the profile and cart into an immutable [`QuoteRecord`] and
/// prepends it to the quote history, exactly once per call.
///
/// Guard-skip: returns `Ok(None)` without touching the store when the
/// profile is absent or the cart is empty — the calling UI is responsible
/// for disabling the action in those states. The cart is deliberately left
/// intact; "start new quote" is a separate explicit action.
pub async fn finalize_quote(
    store: &dyn QuoteStore,
    profile: Option<&UserProfile>,
    cart: &QuoteCart,
) -> Result<Option<QuoteRecord>, StoreError> {
    let Some(profile) = profile else {
        return Ok(None);
    };
    if cart.is_empty() {
        return Ok(None);
    }

    let record = QuoteRecord::new(profile, cart.items(), Utc::now());
    store.prepend_quote(&record).await?;
    debug!(id = %record.id, items = record.items.len(), "quote recorded in history");
    Ok(Some(record))
}
