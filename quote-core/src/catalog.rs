//! Static registry of purchasable event supplies.
//!
//! The catalog is fixed at process start; every quote item references one of
//! these entries by id. Quantity bounds apply to slider-configured items
//! only — free-typed counts in the composite calculators are intentionally
//! unbounded above zero.

use crate::models::{CatalogItem, ItemKind};

const fn slider(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    default_quantity: u32,
    max_quantity: u32,
    unit: &'static str,
    category: &'static str,
) -> CatalogItem {
    CatalogItem {
        id,
        name,
        description,
        unit,
        default_quantity,
        max_quantity,
        category,
        kind: ItemKind::Slider,
    }
}

const fn composite(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    default_quantity: u32,
    max_quantity: u32,
    unit: &'static str,
    category: &'static str,
) -> CatalogItem {
    CatalogItem {
        id,
        name,
        description,
        unit,
        default_quantity,
        max_quantity,
        category,
        kind: ItemKind::Composite,
    }
}

/// All purchasable items, in display order.
pub const CATALOG: &[CatalogItem] = &[
    // Hydration
    composite(
        "water-sachets-5k",
        "Water Sachets 5K",
        "150ml high-quality polyethylene water sachets for standard 5km distance.",
        1,
        50_000,
        "Sachets",
        "Hydration",
    ),
    composite(
        "water-sachets-10k",
        "Water Sachets 10K",
        "150ml high-quality polyethylene water sachets for standard 10km distance.",
        1,
        50_000,
        "Sachets",
        "Hydration",
    ),
    composite(
        "water-sachets-21k",
        "Water Sachets 21K",
        "150ml high-quality polyethylene water sachets for standard 21.1km distance.",
        1,
        100_000,
        "Sachets",
        "Hydration",
    ),
    composite(
        "water-sachets-42k",
        "Water Sachets 42K",
        "150ml high-quality polyethylene water sachets for standard 42.2km distance.",
        1,
        200_000,
        "Sachets",
        "Hydration",
    ),
    composite(
        "water-sachets-custom",
        "Water Sachets Custom",
        "150ml high-quality polyethylene water sachets for custom race distances.",
        1,
        200_000,
        "Sachets",
        "Hydration",
    ),
    // Apparel & headwear
    slider(
        "crew-tshirts",
        "Crew T-Shirts",
        "Moisture-wicking technical fabric with custom event branding.",
        50,
        1_000,
        "Units",
        "Apparel",
    ),
    slider(
        "runner-tshirts",
        "Runner T-Shirts",
        "Premium sublimation print technical shirts for participants.",
        500,
        50_000,
        "Units",
        "Apparel",
    ),
    slider(
        "running-caps-microfibre",
        "Microfibre Caps",
        "Lightweight performance caps with embroidered or printed event logo.",
        100,
        5_000,
        "Units",
        "Apparel",
    ),
    slider(
        "running-gloves-logo",
        "Running Gloves",
        "Thermal grip gloves with custom branding for winter races.",
        100,
        2_000,
        "Pairs",
        "Apparel",
    ),
    // Race administration
    slider(
        "race-numbers-5k",
        "Race Numbers 5K",
        "Waterproof Tyvek bibs for 5km entrants, includes safety pins.",
        500,
        10_000,
        "Units",
        "Admin",
    ),
    slider(
        "race-numbers-10k",
        "Race Numbers 10K",
        "Waterproof Tyvek bibs for 10km entrants, includes safety pins.",
        500,
        10_000,
        "Units",
        "Admin",
    ),
    slider(
        "race-numbers-21k",
        "Race Numbers 21K",
        "Waterproof Tyvek bibs for Half Marathon entrants, includes safety pins.",
        500,
        10_000,
        "Units",
        "Admin",
    ),
    slider(
        "race-numbers-42k",
        "Race Numbers 42K",
        "Waterproof Tyvek bibs for Full Marathon entrants, includes safety pins.",
        500,
        5_000,
        "Units",
        "Admin",
    ),
    slider(
        "race-numbers-custom",
        "Race Numbers Custom",
        "Bespoke Tyvek bibs with custom dimensions or specific event branding.",
        500,
        20_000,
        "Units",
        "Admin",
    ),
    composite(
        "finisher-medals",
        "Finisher Medals",
        "Premium race medals with size options and tiered finish counts.",
        1_000,
        200_000,
        "Units",
        "Admin",
    ),
    slider(
        "runners-tyvek-wristbands",
        "Tyvek Wristbands (Runners)",
        "Security wristbands for athlete identification and finish line access.",
        1_000,
        50_000,
        "Units",
        "Admin",
    ),
    slider(
        "vip-tyvek-wristbands",
        "Tyvek Wristbands (VIP)",
        "Premium coloured wristbands for hospitality and VIP areas.",
        100,
        2_000,
        "Units",
        "Admin",
    ),
    // Safety & visibility
    slider(
        "safety-bibs",
        "Marshal Safety Bibs",
        "High-visibility reflective bibs for course marshals and staff.",
        100,
        5_000,
        "Units",
        "Safety",
    ),
    slider(
        "red-flags-marshal",
        "Marshal Red Flags",
        "Standard event marshaling flags for hazard marking and direction.",
        20,
        200,
        "Units",
        "Safety",
    ),
    slider(
        "safety-file-audit",
        "Event Safety File",
        "Comprehensive compliance documentation and safety plan audit.",
        1,
        1,
        "File",
        "Safety",
    ),
    // Marketing & logistics
    slider(
        "posters-eyelets",
        "Eyeleted Posters",
        "Correx event posters with eyelets for cable-tie attachment to poles.",
        50,
        500,
        "Units",
        "Marketing",
    ),
    composite(
        "logistics-event-trips",
        "Logistics Transport",
        "Transport trips for equipment delivery and water station setup.",
        5,
        100,
        "Trips",
        "Logistics",
    ),
    composite(
        "digital-marketing",
        "Digital Marketing",
        "Promotional campaign management across multiple social platforms.",
        1,
        10,
        "Channels",
        "Marketing",
    ),
];

/// Looks up a catalog item by id.
pub fn find_item(id: &str) -> Option<&'static CatalogItem> {
    CATALOG.iter().find(|item| item.id == id)
}

/// Distinct categories in catalog order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for item in CATALOG {
        if !seen.contains(&item.category) {
            seen.push(item.category);
        }
    }
    seen
}
