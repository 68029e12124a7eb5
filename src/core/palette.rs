//! Color palette and difficulty tiers.
//!
//! ## Catalog
//!
//! 15 color names mapped to the hex codes the frontend renders them in.
//! The catalog is process-wide and immutable.
//!
//! ## Tiers
//!
//! Five difficulty tiers, each exposing a growing subset of the catalog
//! (4, 6, 8, 10, 15 colors). More colors in the pool means more candidates
//! competing for attention, which is what makes the Stroop effect harder.

use serde::{Deserialize, Serialize};

/// The full color catalog: name → display hex code.
///
/// Order matters only for reproducibility of filler draws; lookups are by
/// name. Purple and Violet intentionally share a hex code — visually
/// similar shades are part of the difficulty at high tiers.
pub const CATALOG: [(&str, &str); 15] = [
    ("Red", "#ef4444"),
    ("Blue", "#3b82f6"),
    ("Green", "#22c55e"),
    ("Yellow", "#eab308"),
    ("Purple", "#8b5cf6"),
    ("Orange", "#f97316"),
    ("Pink", "#ff29ff"),
    ("Cyan", "#06b6d4"),
    ("Indigo", "#6366f1"),
    ("Violet", "#8b5cf6"),
    ("Black", "#1a1a1a"),
    ("Brown", "#78350f"),
    ("Lavender", "#a78bfa"),
    ("White", "#ffffff"),
    ("Beige", "#f5f5dc"),
];

/// Display code used when a name is somehow missing from the catalog.
pub const FALLBACK_CODE: &str = "#888";

/// Reserved word shown when a pool is too small to pick a mismatched word.
///
/// Only reachable with a single-color pool, which the fixed tiers never
/// produce; caller-supplied pools can.
pub const FALLBACK_WORD: &str = "Black";

/// Lowest difficulty tier.
pub const MIN_TIER: u8 = 1;
/// Highest difficulty tier (full catalog).
pub const MAX_TIER: u8 = 5;

const TIER_1: [&str; 4] = ["Red", "Blue", "Green", "Yellow"];
const TIER_2: [&str; 6] = ["Red", "Blue", "Green", "Yellow", "Purple", "Orange"];
const TIER_3: [&str; 8] = [
    "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Pink", "Cyan",
];
const TIER_4: [&str; 10] = [
    "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Pink", "Cyan", "Indigo", "Violet",
];
const TIER_5: [&str; 15] = [
    "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Pink", "Cyan", "Indigo", "Violet",
    "Black", "Brown", "Lavender", "White", "Beige",
];

/// Difficulty tier, clamped to 1..=5.
///
/// Tiers are ordered: a higher tier exposes a strictly larger color pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tier(u8);

impl Tier {
    /// Create a tier, clamping out-of-range values into 1..=5.
    #[must_use]
    pub const fn new(tier: u8) -> Self {
        if tier < MIN_TIER {
            Self(MIN_TIER)
        } else if tier > MAX_TIER {
            Self(MAX_TIER)
        } else {
            Self(tier)
        }
    }

    /// Get the raw tier value (1..=5).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The color pool available at this tier.
    #[must_use]
    pub const fn pool(self) -> &'static [&'static str] {
        match self.0 {
            1 => &TIER_1,
            2 => &TIER_2,
            3 => &TIER_3,
            4 => &TIER_4,
            _ => &TIER_5,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier {}", self.0)
    }
}

/// Look up the display code for a color name (case-sensitive, catalog names
/// are capitalized).
#[must_use]
pub fn color_code(name: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}
