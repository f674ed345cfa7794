use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{QuoteItem, UserProfile};

/// An immutable, timestamped snapshot of a finalized cart plus the
/// submitting organizer's profile.
///
/// `user_id`, `user_name` and `event_name` are denormalized from the profile
/// so the admin view can list records without unpacking the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub event_name: String,
    pub items: Vec<QuoteItem>,
    pub timestamp: DateTime<Utc>,
    pub user_details: UserProfile,
}

impl QuoteRecord {
    /// Builds a record from the current profile and cart contents.
    ///
    /// Takes deep snapshots; later cart edits do not affect the record.
    pub fn new(
        profile: &UserProfile,
        items: &[QuoteItem],
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_quote_id(),
            user_id: profile.email.clone(),
            user_name: profile.full_name.clone(),
            event_name: profile.event_name.clone(),
            items: items.to_vec(),
            timestamp: at,
            user_details: profile.clone(),
        }
    }
}

/// Fresh quote reference of the form `QR-XXXXXXXXX`.
fn new_quote_id() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("QR-{}", &hex[..9])
}
