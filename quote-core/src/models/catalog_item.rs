use serde::{Deserialize, Serialize};

/// How an item's quantity is configured.
///
/// `Slider` items take a single bounded quantity; `Composite` items carry
/// extra parameters (hydration formula, medal tiers, channel toggles, ...)
/// that a [`crate::calculators::CalculatorInput`] variant models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Slider,
    Composite,
}

/// One purchasable supply category in the static catalog.
///
/// Defined once at process start; `id` uniquely identifies the item across
/// the whole system and every quote item references it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub default_quantity: u32,
    pub max_quantity: u32,
    pub category: &'static str,
    pub kind: ItemKind,
}

impl CatalogItem {
    /// Lower bound for the item's quantity slider.
    ///
    /// The generic slider starts at 10; logistics trips start at 1 so a
    /// single-trip booking stays expressible.
    pub fn slider_lower_bound(&self) -> u32 {
        if self.id == "logistics-event-trips" {
            1
        } else {
            10
        }
    }
}
