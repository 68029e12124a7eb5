//! Stroop question generation.
//!
//! A question shows a color word painted in a *different* color and asks
//! for the paint. The generator guarantees the mismatch and always
//! produces exactly four distinct answer options.
//!
//! ## Key Types
//!
//! - `StroopQuestion`: Immutable value object, one per turn
//! - `QuestionGenerator`: Owns the current difficulty tier and the RNG

pub mod generator;
pub mod stroop;

pub use generator::{tier_for_score, QuestionGenerator};
pub use stroop::StroopQuestion;
