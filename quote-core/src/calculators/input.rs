//! Per-item-kind parameters and the quantity/details derivation.
//!
//! Each catalog item maps to one [`CalculatorInput`] variant carrying only
//! the fields relevant to its kind; a single exhaustive match in
//! [`CalculatorInput::evaluate`] produces the final quantity and the
//! human-readable specification string.

use rust_decimal::Decimal;

use crate::calculators::common::clamp_slider;
use crate::models::CatalogItem;

/// Medal diameter tiers offered for finisher medals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedalSize {
    #[default]
    Mm50,
    Mm60,
    Mm70,
}

impl MedalSize {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mm50 => "50mm",
            Self::Mm60 => "60mm",
            Self::Mm70 => "70mm",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "50mm" => Some(Self::Mm50),
            "60mm" => Some(Self::Mm60),
            "70mm" => Some(Self::Mm70),
            _ => None,
        }
    }
}

/// One marketing channel in the fixed campaign list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub id: &'static str,
    pub name: &'static str,
}

/// The fixed channel list, in display (and details) order.
pub const CHANNELS: &[Channel] = &[
    Channel {
        id: "fb",
        name: "Facebook",
    },
    Channel {
        id: "x",
        name: "X (Twitter)",
    },
    Channel {
        id: "insta",
        name: "Instagram",
    },
    Channel {
        id: "google",
        name: "Google Search",
    },
];

/// Toggle state per channel, parallel to [`CHANNELS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelSelection {
    toggled: [bool; 4],
}

impl ChannelSelection {
    /// Flips one channel by id; unknown ids are ignored.
    pub fn toggle(
        &mut self,
        channel_id: &str,
    ) {
        if let Some(idx) = CHANNELS.iter().position(|c| c.id == channel_id) {
            self.toggled[idx] = !self.toggled[idx];
        }
    }

    pub fn count(&self) -> u32 {
        self.toggled.iter().filter(|t| **t).count() as u32
    }

    /// Names of toggled-on channels, in fixed list order.
    pub fn selected_names(&self) -> Vec<&'static str> {
        CHANNELS
            .iter()
            .zip(self.toggled)
            .filter(|(_, on)| *on)
            .map(|(c, _)| c.name)
            .collect()
    }
}

/// Delivery scope for logistics transport trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogisticsScope {
    EventOnly,
    EventAndWaterPoints { water_points: u32 },
}

/// User-entered parameters for one catalog item, keyed by item kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorInput {
    Hydration {
        runners: u32,
        sachets_per_runner: Decimal,
        stations: u32,
    },
    Medals {
        size: MedalSize,
        gold: u32,
        silver: u32,
        bronze: u32,
    },
    DigitalMarketing {
        channels: ChannelSelection,
    },
    LogisticsTrips {
        trips: u32,
        scope: LogisticsScope,
    },
    CustomDimensions {
        width: String,
        height: String,
        quantity: u32,
    },
    Slider {
        quantity: u32,
    },
}

/// A derived `(quantity, details)` pair, produced at confirm time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub quantity: Decimal,
    pub details: String,
}

/// Default water-station count, keyed off the race distance in the item id.
fn default_stations(item_id: &str) -> u32 {
    if item_id.contains("5k") {
        1
    } else if item_id.contains("10k") {
        3
    } else if item_id.contains("21k") {
        7
    } else if item_id.contains("42k") {
        14
    } else {
        5
    }
}

impl CalculatorInput {
    /// Initial parameter state for a catalog item, dispatched by id.
    pub fn for_item(item: &CatalogItem) -> Self {
        match item.id {
            id if id.starts_with("water-sachets") => Self::Hydration {
                runners: 1000,
                sachets_per_runner: Decimal::TWO,
                stations: default_stations(id),
            },
            "finisher-medals" => Self::Medals {
                size: MedalSize::default(),
                gold: 0,
                silver: 0,
                bronze: item.default_quantity,
            },
            "digital-marketing" => Self::DigitalMarketing {
                channels: ChannelSelection::default(),
            },
            "logistics-event-trips" => Self::LogisticsTrips {
                trips: item.default_quantity,
                scope: LogisticsScope::EventOnly,
            },
            "race-numbers-custom" => Self::CustomDimensions {
                width: "210".to_string(),
                height: "148".to_string(),
                quantity: item.default_quantity,
            },
            _ => Self::Slider {
                quantity: item.default_quantity,
            },
        }
    }

    /// Derives the final quantity and specification string.
    pub fn evaluate(
        &self,
        item: &CatalogItem,
    ) -> Evaluation {
        match self {
            Self::Hydration {
                runners,
                sachets_per_runner,
                stations,
            } => {
                let rate = sachets_per_runner.normalize();
                let quantity =
                    (Decimal::from(*runners) * rate * Decimal::from(*stations)).normalize();
                Evaluation {
                    quantity,
                    details: format!(
                        "Formula: {runners} Runners x {rate} sachets/point x {stations} stations. 150ml sachets."
                    ),
                }
            }
            Self::Medals {
                size,
                gold,
                silver,
                bronze,
            } => Evaluation {
                quantity: Decimal::from(u64::from(*gold) + u64::from(*silver) + u64::from(*bronze)),
                details: format!(
                    "Size: {} | Breakdown: Gold ({gold}), Silver ({silver}), Bronze ({bronze})",
                    size.label()
                ),
            },
            Self::DigitalMarketing { channels } => {
                let names = channels.selected_names();
                let listing = if names.is_empty() {
                    "None selected".to_string()
                } else {
                    names.join(", ")
                };
                Evaluation {
                    quantity: Decimal::from(channels.count()),
                    details: format!("Channels: {listing}"),
                }
            }
            Self::LogisticsTrips { trips, scope } => {
                let trips = clamp_slider(*trips, item.slider_lower_bound(), item.max_quantity);
                let details = match scope {
                    LogisticsScope::EventOnly => "Scope: EVENT ONLY".to_string(),
                    LogisticsScope::EventAndWaterPoints { water_points } => {
                        format!("Scope: EVENT AND WATER POINTS ({water_points} Points)")
                    }
                };
                Evaluation {
                    quantity: Decimal::from(trips),
                    details,
                }
            }
            Self::CustomDimensions {
                width,
                height,
                quantity,
            } => {
                let quantity =
                    clamp_slider(*quantity, item.slider_lower_bound(), item.max_quantity);
                Evaluation {
                    quantity: Decimal::from(quantity),
                    details: format!(
                        "Dimensions: {width}mm x {height}mm | {}",
                        item.description
                    ),
                }
            }
            Self::Slider { quantity } => {
                let quantity =
                    clamp_slider(*quantity, item.slider_lower_bound(), item.max_quantity);
                Evaluation {
                    quantity: Decimal::from(quantity),
                    details: item.description.to_string(),
                }
            }
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
    fn hydration_quantity_is_product_of_inputs() {
        let item = find_item("water-sachets-21k").unwrap();
        let input = CalculatorInput::Hydration {
            runners: 1000,
            sachets_per_runner: dec!(2),
            stations: 7,
        };

        let result = input.evaluate(item);

        assert_eq!(result.quantity, dec!(14000));
        assert!(
            result
                .details
                .contains("1000 Runners x 2 sachets/point x 7 stations")
        );
        assert!(result.details.contains("150ml"));
    }

    #[test]
    fn hydration_zero_runners_yields_zero() {
        let item = find_item("water-sachets-5k").unwrap();
        let input = CalculatorInput::Hydration {
            runners: 0,
            sachets_per_runner: dec!(2.5),
            stations: 4,
        };

        let result = input.evaluate(item);

        assert_eq!(result.quantity, dec!(0));
    }

    #[test]
    fn hydration_half_step_rate_multiplies_exactly() {
        let item = find_item("water-sachets-custom").unwrap();
        let input = CalculatorInput::Hydration {
            runners: 999,
            sachets_per_runner: dec!(0.5),
            stations: 1,
        };

        let result = input.evaluate(item);

        assert_eq!(result.quantity, dec!(499.5));
        assert!(result.details.contains("0.5 sachets/point"));
    }

    #[test]
    fn hydration_defaults_follow_race_distance() {
        for (id, stations) in [
            ("water-sachets-5k", 1),
            ("water-sachets-10k", 3),
            ("water-sachets-21k", 7),
            ("water-sachets-42k", 14),
            ("water-sachets-custom", 5),
        ] {
            let item = find_item(id).unwrap();
            match CalculatorInput::for_item(item) {
                CalculatorInput::Hydration {
                    runners,
                    sachets_per_runner,
                    stations: s,
                } => {
                    assert_eq!(runners, 1000);
                    assert_eq!(sachets_per_runner, dec!(2));
                    assert_eq!(s, stations, "{id}");
                }
                other => panic!("expected hydration input for {id}, got {other:?}"),
            }
        }
    }

    #[test]
    fn medals_quantity_is_sum_of_tiers() {
        let item = find_item("finisher-medals").unwrap();
        let input = CalculatorInput::Medals {
            size: MedalSize::Mm60,
            gold: 10,
            silver: 15,
            bronze: 25,
        };

        let result = input.evaluate(item);

        assert_eq!(result.quantity, dec!(50));
        assert!(result.details.contains("60mm"));
        assert!(result.details.contains("Gold (10)"));
        assert!(result.details.contains("Silver (15)"));
        assert!(result.details.contains("Bronze (25)"));
    }

    #[test]
    fn medals_default_puts_item_default_in_bronze() {
        let item = find_item("finisher-medals").unwrap();

        let input = CalculatorInput::for_item(item);

        assert_eq!(
            input,
            CalculatorInput::Medals {
                size: MedalSize::Mm50,
                gold: 0,
                silver: 0,
                bronze: 1000,
            }
        );
    }

    #[test]
    fn marketing_counts_and_lists_toggled_channels_in_fixed_order() {
        let item = find_item("digital-marketing").unwrap();
        let mut channels = ChannelSelection::default();
        channels.toggle("google");
        channels.toggle("insta");
        let input = CalculatorInput::DigitalMarketing { channels };

        let result = input.evaluate(item);

        assert_eq!(result.quantity, dec!(2));
        assert_eq!(result.details, "Channels: Instagram, Google Search");
    }

    #[test]
    fn marketing_with_nothing_selected_says_so() {
        let item = find_item("digital-marketing").unwrap();
        let input = CalculatorInput::DigitalMarketing {
            channels: ChannelSelection::default(),
        };

        let result = input.evaluate(item);

        assert_eq!(result.quantity, dec!(0));
        assert_eq!(result.details, "Channels: None selected");
    }

    #[test]
    fn marketing_toggle_twice_deselects() {
        let mut channels = ChannelSelection::default();
        channels.toggle("fb");
        channels.toggle("fb");

        assert_eq!(channels.count(), 0);
    }

    #[test]
    fn logistics_event_only_omits_water_points() {
        let item = find_item("logistics-event-trips").unwrap();
        let input = CalculatorInput::LogisticsTrips {
            trips: 12,
            scope: LogisticsScope::EventOnly,
        };

        let result = input.evaluate(item);

        assert_eq!(result.quantity, dec!(12));
        assert_eq!(result.details, "Scope: EVENT ONLY");
    }

    #[test]
    fn logistics_wider_scope_states_water_point_count() {
        let item = find_item("logistics-event-trips").unwrap();
        let input = CalculatorInput::LogisticsTrips {
            trips: 5,
            scope: LogisticsScope::EventAndWaterPoints { water_points: 8 },
        };

        let result = input.evaluate(item);

        assert_eq!(result.details, "Scope: EVENT AND WATER POINTS (8 Points)");
    }

    #[test]
    fn logistics_trips_clamp_to_slider_bounds() {
        let item = find_item("logistics-event-trips").unwrap();
        let input = CalculatorInput::LogisticsTrips {
            trips: 500,
            scope: LogisticsScope::EventOnly,
        };

        let result = input.evaluate(item);

        assert_eq!(result.quantity, dec!(100));
    }

    #[test]
    fn custom_dimensions_prefix_details_and_keep_slider_quantity() {
        let item = find_item("race-numbers-custom").unwrap();
        let input = CalculatorInput::CustomDimensions {
            width: "300".to_string(),
            height: "200".to_string(),
            quantity: 750,
        };

        let result = input.evaluate(item);

        assert_eq!(result.quantity, dec!(750));
        assert!(result.details.starts_with("Dimensions: 300mm x 200mm | "));
        assert!(result.details.contains(item.description));
    }

    #[test]
    fn custom_dimensions_default_to_a5_landscape() {
        let item = find_item("race-numbers-custom").unwrap();

        let input = CalculatorInput::for_item(item);

        assert_eq!(
            input,
            CalculatorInput::CustomDimensions {
                width: "210".to_string(),
                height: "148".to_string(),
                quantity: 500,
            }
        );
    }

    #[test]
    fn slider_uses_base_description_unmodified() {
        let item = find_item("crew-tshirts").unwrap();
        let input = CalculatorInput::Slider { quantity: 250 };

        let result = input.evaluate(item);

        assert_eq!(result.quantity, dec!(250));
        assert_eq!(result.details, item.description);
    }

    #[test]
    fn slider_clamps_below_lower_bound() {
        let item = find_item("crew-tshirts").unwrap();
        let input = CalculatorInput::Slider { quantity: 3 };

        let result = input.evaluate(item);

        assert_eq!(result.quantity, dec!(10));
    }

    #[test]
    fn every_catalog_item_gets_a_matching_input_kind() {
        for item in crate::catalog::CATALOG {
            let input = CalculatorInput::for_item(item);
            match (item.kind, &input) {
                (crate::models::ItemKind::Composite, CalculatorInput::Slider { .. }) => {
                    panic!("{} is composite but defaulted to a plain slider", item.id)
                }
                _ => {
                    // Every default must evaluate without panicking.
                    let _ = input.evaluate(item);
                }
            }
        }
    }
}
