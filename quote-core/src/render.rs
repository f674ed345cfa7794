//! The quote-to-renderer contract.
//!
//! External renderers (PDF, WhatsApp, email) consume a finalized quote as an
//! ordered list of `{name, details, quantity}` lines plus the full organizer
//! profile. Renderers special-case lines whose details carry the artwork
//! clause to surface a "master artwork attached" flag.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{QuoteItem, QuoteRecord, UserProfile};

/// One line of the itemized inventory table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub name: String,
    pub details: String,
    pub quantity: Decimal,
}

/// Everything a renderer needs: director identity block, event metadata
/// block, and the line-itemized inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub profile: UserProfile,
    pub lines: Vec<QuoteLine>,
}

impl QuoteSummary {
    pub fn from_parts(
        profile: &UserProfile,
        items: &[QuoteItem],
    ) -> Self {
        Self {
            profile: profile.clone(),
            lines: items
                .iter()
                .map(|item| QuoteLine {
                    name: item.name.clone(),
                    details: item.details.clone(),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }

    pub fn from_record(record: &QuoteRecord) -> Self {
        Self::from_parts(&record.user_details, &record.items)
    }
}

/// Whether a details string carries the branding artwork clause.
pub fn line_has_artwork(details: &str) -> bool {
    details.contains("Artwork:")
}

/// Builds the consolidated plain-text quote request handed to the messaging
/// renderers (WhatsApp body, email body).
pub fn quote_request_message(
    profile: &UserProfile,
    items: &[QuoteItem],
) -> String {
    let mut msg = format!(
        "OFFICIAL QUOTE REQUEST - {}\n",
        profile.event_name.to_uppercase()
    );
    msg.push_str("------------------------------------------\n");
    msg.push_str("DIRECTOR INFORMATION\n");
    msg.push_str(&format!("Name: {} {}\n", profile.title, profile.full_name));
    msg.push_str(&format!("Designation: {}\n", profile.designation));
    msg.push_str(&format!("Organization: {}\n", profile.club_name));
    msg.push_str(&format!("Email: {}\n", profile.email));
    msg.push_str(&format!("Cell: {}\n", profile.cell_number));
    if !profile.alt_contact.is_empty() {
        msg.push_str(&format!("Alt Contact: {}\n", profile.alt_contact));
    }
    msg.push_str("\nEVENT DETAILS\n");
    msg.push_str(&format!("Event: {}\n", profile.event_name));
    msg.push_str(&format!("Location: {}\n", profile.event_location));
    msg.push_str(&format!(
        "Date: {} @ {}\n",
        profile.event_date, profile.event_time
    ));
    msg.push_str(&format!(
        "Estimated Athletes: {}\n",
        profile.est_participants
    ));
    msg.push_str(&format!("\nINVENTORY REQUESTED ({} Items)\n", items.len()));
    msg.push_str("------------------------------------------\n");

    for (idx, item) in items.iter().enumerate() {
        msg.push_str(&format!("{}. {}\n", idx + 1, item.name));
        msg.push_str(&format!("   Quantity: {} Units\n", item.quantity));
        msg.push_str(&format!("   Specs: {}\n\n", item.details));
    }

    msg.push_str("------------------------------------------\n");
    msg.push_str("This request has been logged in the RUNSPEND Admin Hub.");
    msg
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::store::test_support::profile_with_email;

    use super::*;

    fn items() -> Vec<QuoteItem> {
        vec![
            QuoteItem {
                calculator_id: "water-sachets-21k".to_string(),
                name: "Water Sachets 21K".to_string(),
                details: "Formula: 1000 Runners x 2 sachets/point x 7 stations. 150ml sachets."
                    .to_string(),
                quantity: dec!(14000),
                artwork: None,
            },
            QuoteItem {
                calculator_id: "crew-tshirts".to_string(),
                name: "Crew T-Shirts".to_string(),
                details: "Moisture-wicking technical fabric with custom event branding. \
                          | Artwork: Master Provided | Type Colour: Custom Colour"
                    .to_string(),
                quantity: dec!(50),
                artwork: Some("AAAA".to_string()),
            },
        ]
    }

    #[test]
    fn summary_preserves_item_order_and_fields() {
        let profile = profile_with_email("render@example.com");
        let items = items();

        let summary = QuoteSummary::from_parts(&profile, &items);

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].name, "Water Sachets 21K");
        assert_eq!(summary.lines[0].quantity, dec!(14000));
        assert_eq!(summary.lines[1].name, "Crew T-Shirts");
        assert_eq!(summary.profile.email, "render@example.com");
    }

    #[test]
    fn artwork_clause_detection() {
        let items = items();

        assert!(!line_has_artwork(&items[0].details));
        assert!(line_has_artwork(&items[1].details));
    }

    #[test]
    fn message_carries_director_event_and_inventory_blocks() {
        let profile = profile_with_email("msg@example.com");

        let msg = quote_request_message(&profile, &items());

        assert!(msg.starts_with("OFFICIAL QUOTE REQUEST - CITY NIGHT RUN\n"));
        assert!(msg.contains("Name: Ms Thandi Nkosi"));
        assert!(msg.contains("Organization: Highveld Harriers"));
        assert!(msg.contains("Location: Johannesburg"));
        assert!(msg.contains("Date: 2026-03-14 @ 18:30"));
        assert!(msg.contains("INVENTORY REQUESTED (2 Items)"));
        assert!(msg.contains("1. Water Sachets 21K"));
        assert!(msg.contains("   Quantity: 14000 Units"));
        assert!(msg.contains("2. Crew T-Shirts"));
        assert!(msg.ends_with("logged in the RUNSPEND Admin Hub."));
    }

    #[test]
    fn message_omits_empty_alt_contact() {
        let profile = profile_with_email("msg@example.com");

        let msg = quote_request_message(&profile, &[]);

        assert!(!msg.contains("Alt Contact:"));
    }
}
