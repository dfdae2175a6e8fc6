use std::collections::HashMap;
use std::sync::LazyLock;

/// Mean Earth radius used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Lowest award tier a restaurant can hold.
pub const MIN_RATING: u8 = 1;

/// Highest award tier a restaurant can hold.
pub const MAX_RATING: u8 = 3;

/// Tier that may appear at most once per day.
pub const TOP_TIER: u8 = MAX_RATING;

/// Accepted range for the per-day rating budget.
pub const MIN_BUDGET: u32 = 1;
pub const MAX_BUDGET: u32 = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Map from rating tier to human-readable award name.
pub static RATING_NAMES: LazyLock<HashMap<u8, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(1, "one star");
    m.insert(2, "two stars");
    m.insert(3, "three stars");
    m
});

/// Get the award name for a rating tier.
pub fn rating_name(rating: u8) -> &'static str {
    RATING_NAMES.get(&rating).unwrap_or(&"unrated")
}

/// Star glyphs for a rating tier, e.g. `★★☆`.
pub fn rating_stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}
