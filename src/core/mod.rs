//! Core engine types: color palette, difficulty tiers, RNG.
//!
//! This module contains the static game data and the deterministic
//! randomness source everything else is built on.

pub mod palette;
pub mod rng;

pub use palette::{Tier, CATALOG, FALLBACK_WORD, MAX_TIER, MIN_TIER};
pub use rng::GameRng;
