use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One confirmed configuration of a catalog item.
///
/// Created when the user confirms an item's calculator; replaced in place if
/// the same `calculator_id` is confirmed again. `details` is the final
/// human-readable specification string, `artwork` an optional base64 payload
/// attached by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    pub calculator_id: String,
    pub name: String,
    pub details: String,
    pub quantity: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork: Option<String>,
}
