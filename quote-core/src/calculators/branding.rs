//! Artwork and print-colour clauses appended to branded items.
//!
//! A fixed allow-list of item ids (apparel, race numbers, signage) carries a
//! branding selection. Its two clauses always follow the kind-specific
//! details, in a fixed order, joined by `" | "` — the renderer contract
//! detects the artwork clause to flag attached master artwork.

/// Items that take artwork and print-colour options.
const ARTWORK_ITEMS: &[&str] = &[
    "crew-tshirts",
    "runner-tshirts",
    "running-gloves-logo",
    "running-caps-microfibre",
    "runners-tyvek-wristbands",
    "vip-tyvek-wristbands",
    "red-flags-marshal",
    "safety-bibs",
    "posters-eyelets",
    "race-numbers-5k",
    "race-numbers-10k",
    "race-numbers-21k",
    "race-numbers-42k",
    "race-numbers-custom",
];

/// Whether the catalog item takes a branding selection.
pub fn needs_artwork(item_id: &str) -> bool {
    ARTWORK_ITEMS.contains(&item_id)
}

/// State of the master artwork for a branded item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtworkStatus {
    /// User uploaded a master file.
    MasterProvided,
    /// User asked for a layout to be designed.
    DesignRequested,
    #[default]
    None,
}

impl ArtworkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MasterProvided => "Master Provided",
            Self::DesignRequested => "Design Requested",
            Self::None => "None",
        }
    }
}

/// Print colour scheme for a branded item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintColour {
    #[default]
    Standard,
    Custom,
}

impl PrintColour {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard (Black/White)",
            Self::Custom => "Custom Colour",
        }
    }
}

/// The branding options chosen for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BrandingSelection {
    pub artwork: ArtworkStatus,
    pub colour: PrintColour,
}

impl BrandingSelection {
    /// Appends the artwork-status and print-colour clauses, in that order.
    pub fn append_to(
        &self,
        details: &mut String,
    ) {
        details.push_str(" | Artwork: ");
        details.push_str(self.artwork.label());
        details.push_str(" | Type Colour: ");
        details.push_str(self.colour.label());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn apparel_and_race_numbers_need_artwork() {
        assert!(needs_artwork("crew-tshirts"));
        assert!(needs_artwork("race-numbers-custom"));
        assert!(needs_artwork("posters-eyelets"));
    }

    #[test]
    fn hydration_and_medals_do_not_need_artwork() {
        assert!(!needs_artwork("water-sachets-21k"));
        assert!(!needs_artwork("finisher-medals"));
        assert!(!needs_artwork("digital-marketing"));
    }

    #[test]
    fn clauses_follow_details_in_fixed_order() {
        let selection = BrandingSelection {
            artwork: ArtworkStatus::MasterProvided,
            colour: PrintColour::Custom,
        };
        let mut details = String::from("Premium sublimation print technical shirts.");

        selection.append_to(&mut details);

        assert_eq!(
            details,
            "Premium sublimation print technical shirts. | Artwork: Master Provided | Type Colour: Custom Colour"
        );
    }

    #[test]
    fn default_selection_reports_no_artwork_and_standard_colours() {
        let mut details = String::from("desc");

        BrandingSelection::default().append_to(&mut details);

        assert_eq!(
            details,
            "desc | Artwork: None | Type Colour: Standard (Black/White)"
        );
    }
}
