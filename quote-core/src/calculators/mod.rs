//! Per-item calculators: interactive parameters and the confirm step that
//! turns them into a [`QuoteItem`].

pub mod branding;
pub mod common;
pub mod input;

pub use branding::{ArtworkStatus, BrandingSelection, PrintColour, needs_artwork};
pub use input::{
    CHANNELS, CalculatorInput, Channel, ChannelSelection, Evaluation, LogisticsScope, MedalSize,
};

use crate::models::{CatalogItem, QuoteItem};

/// One calculator instance per rendered catalog item.
///
/// Holds the in-progress parameter state; stateless across items. The
/// branding selection exists only for items on the artwork allow-list, and
/// `artwork_file` carries the uploaded master payload when one was attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCalculator {
    item: &'static CatalogItem,
    pub input: CalculatorInput,
    pub branding: Option<BrandingSelection>,
    pub artwork_file: Option<String>,
}

impl ItemCalculator {
    /// Creates a calculator with the item's default parameter state.
    pub fn new(item: &'static CatalogItem) -> Self {
        Self {
            item,
            input: CalculatorInput::for_item(item),
            branding: needs_artwork(item.id).then(BrandingSelection::default),
            artwork_file: None,
        }
    }

    pub fn item(&self) -> &'static CatalogItem {
        self.item
    }

    /// Records an uploaded master artwork file and flips the artwork status.
    ///
    /// No-op for items outside the artwork allow-list.
    pub fn attach_artwork(
        &mut self,
        payload: impl Into<String>,
    ) {
        if let Some(branding) = &mut self.branding {
            branding.artwork = ArtworkStatus::MasterProvided;
            self.artwork_file = Some(payload.into());
        }
    }

    /// Confirms the calculator: derives `(quantity, details)` and emits the
    /// quote item destined for the cart.
    pub fn confirm(&self) -> QuoteItem {
        let Evaluation {
            quantity,
            mut details,
        } = self.input.evaluate(self.item);

        if let Some(branding) = &self.branding {
            branding.append_to(&mut details);
        }

        QuoteItem {
            calculator_id: self.item.id.to_string(),
            name: self.item.name.to_string(),
            details,
            quantity,
            artwork: self.artwork_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::catalog::find_item;

    use super::*;

    #[test]
    fn confirm_emits_denormalized_name_and_id() {
        let item = find_item("water-sachets-10k").unwrap();
        let calc = ItemCalculator::new(item);

        let quote_item = calc.confirm();

        assert_eq!(quote_item.calculator_id, "water-sachets-10k");
        assert_eq!(quote_item.name, "Water Sachets 10K");
        // Defaults: 1000 runners x 2 sachets/point x 3 stations.
        assert_eq!(quote_item.quantity, dec!(6000));
    }

    #[test]
    fn branded_item_details_carry_both_clauses() {
        let item = find_item("runner-tshirts").unwrap();
        let calc = ItemCalculator::new(item);

        let quote_item = calc.confirm();

        assert!(quote_item.details.contains(" | Artwork: None"));
        assert!(
            quote_item
                .details
                .ends_with("Type Colour: Standard (Black/White)")
        );
    }

    #[test]
    fn unbranded_item_details_have_no_artwork_clause() {
        let item = find_item("finisher-medals").unwrap();
        let calc = ItemCalculator::new(item);

        let quote_item = calc.confirm();

        assert!(!quote_item.details.contains("Artwork:"));
        assert!(quote_item.artwork.is_none());
    }

    #[test]
    fn attaching_artwork_sets_status_and_payload() {
        let item = find_item("race-numbers-5k").unwrap();
        let mut calc = ItemCalculator::new(item);

        calc.attach_artwork("data:image/png;base64,AAAA");
        let quote_item = calc.confirm();

        assert!(quote_item.details.contains("Artwork: Master Provided"));
        assert_eq!(
            quote_item.artwork.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn attaching_artwork_to_unbranded_item_is_a_no_op() {
        let item = find_item("water-sachets-5k").unwrap();
        let mut calc = ItemCalculator::new(item);

        calc.attach_artwork("payload");

        assert!(calc.artwork_file.is_none());
        assert!(calc.branding.is_none());
    }
}
