//! Per-player session state machine and the session registry.
//!
//! A session cycles between "awaiting next question" and "awaiting answer"
//! until its mode's terminal condition fires. Out-of-order calls are
//! caller errors, never silently absorbed.
//!
//! ## Key Types
//!
//! - `GameMode` / `EndReason` / `SessionStatus`: mode and lifecycle tags
//! - `GameSession`: one play-through, owns generator and counters
//! - `SessionRegistry`: keyed get-or-create store owned by the service
//! - `AnswerOutcome` / `SessionSnapshot`: what `submit_answer` returns

pub mod mode;
pub mod registry;
pub mod state;

pub use mode::{EndReason, GameMode, SessionStatus};
pub use registry::SessionRegistry;
pub use state::{AnswerOutcome, GameSession, SessionSnapshot};
