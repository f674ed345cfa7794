//! The in-progress, editable set of quote items for the current session.

use serde::{Deserialize, Serialize};

use crate::models::QuoteItem;

/// An ordered collection with at most one entry per catalog item id.
///
/// Confirming the same item again replaces the existing entry in place;
/// the cart can therefore never grow past the catalog size. Serializes
/// transparently as the item array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteCart {
    items: Vec<QuoteItem>,
}

impl QuoteCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the item, or replaces the existing entry with the same
    /// `calculator_id` in place. Always succeeds.
    pub fn add_or_replace(
        &mut self,
        item: QuoteItem,
    ) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.calculator_id == item.calculator_id)
        {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Removes the matching entry; no-op if absent.
    pub fn remove(
        &mut self,
        calculator_id: &str,
    ) {
        self.items
            .retain(|item| item.calculator_id != calculator_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(
        &self,
        calculator_id: &str,
    ) -> bool {
        self.items
            .iter()
            .any(|item| item.calculator_id == calculator_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[QuoteItem] {
        &self.items
    }
}
