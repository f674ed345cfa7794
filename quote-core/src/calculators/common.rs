//! Input coercion helpers shared by the item calculators.
//!
//! The quantity UI is live-editing, so bad input is corrected silently
//! rather than surfaced: negative or non-numeric entries coerce to the
//! field's lower bound. Free-typed counts have no upper bound by design —
//! real events may exceed catalog defaults — while slider values clamp into
//! the item's configured range.

use rust_decimal::Decimal;

/// Parses a free-typed count field. Negative and non-numeric input coerces
/// to 0.
pub fn parse_count(s: &str) -> u32 {
    s.trim().parse::<i64>().map_or(0, |n| n.max(0) as u32)
}

/// Parses the sachets-per-runner rate (0.5 steps in the UI, so fractional
/// values are expected). Negative and non-numeric input coerces to 0.
pub fn parse_rate(s: &str) -> Decimal {
    s.trim()
        .parse::<Decimal>()
        .map_or(Decimal::ZERO, |d| d.max(Decimal::ZERO))
}

/// Parses a water-point count. The field's floor is 1: a scope that covers
/// water points implies at least one point.
pub fn parse_water_points(s: &str) -> u32 {
    s.trim().parse::<i64>().map_or(1, |n| n.max(1) as u32)
}

/// Clamps a slider value into `[lower, max]`.
///
/// `lower` may exceed `max` for single-unit items (the generic slider floor
/// is 10); the upper bound wins in that case.
pub fn clamp_slider(
    value: u32,
    lower: u32,
    max: u32,
) -> u32 {
    value.min(max).max(lower.min(max))
}
