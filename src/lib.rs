//! # color-confusion
//!
//! A Stroop-effect game engine: question generation, answer scoring, and
//! turn-based session tracking for the "Color Confusion" game.
//!
//! The Stroop effect is the interference between a word's literal meaning
//! (the displayed color name) and the color it is rendered in. The game
//! shows a color word painted in a *different* color and asks the player to
//! name the paint, not the word.
//!
//! ## Design Principles
//!
//! 1. **Pure and in-memory**: The engine never touches a database, socket,
//!    or identity provider. The enclosing service maps its transport onto
//!    the engine's calls and serializes the value objects it returns.
//!
//! 2. **Deterministic randomness**: Question generation draws from an
//!    injected, seedable [`GameRng`]. Same seed, same question sequence —
//!    whole play-throughs are reproducible in tests.
//!
//! 3. **Mode-tagged state**: A session carries only the fields its mode
//!    uses (`Endless` lives, `Survival` clock, `Speed` target). There are
//!    no "-1 means disabled" sentinels.
//!
//! 4. **Caller-owned concurrency**: Sessions and the [`SessionRegistry`]
//!    are plain mutable state. The owning service is responsible for
//!    serializing access per key (see the registry docs).
//!
//! ## Modules
//!
//! - `core`: color palette, difficulty tiers, deterministic RNG
//! - `question`: Stroop question value object and generator
//! - `scoring`: answer validation and point calculation
//! - `session`: per-player state machine, game modes, session registry
//! - `report`: end-of-session summary and performance rating
//! - `error`: engine error taxonomy

pub mod core;
pub mod error;
pub mod question;
pub mod report;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, Tier};

pub use crate::error::EngineError;

pub use crate::question::{QuestionGenerator, StroopQuestion};

pub use crate::scoring::{score_answer, AnswerResult};

pub use crate::session::{
    AnswerOutcome, EndReason, GameMode, GameSession, SessionRegistry, SessionSnapshot,
    SessionStatus,
};

pub use crate::report::{finalize, Rating, Report};
