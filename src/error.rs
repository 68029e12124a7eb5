//! Engine error taxonomy.
//!
//! Only caller-protocol violations and table misconfiguration are errors.
//! Normal game outcomes — wrong answers, lives running out, the clock
//! expiring — are data, not failures.

/// Errors the engine reports to its caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The session has reached a terminal state. No further questions or
    /// answers are accepted; request the final report instead.
    #[error("session has ended; request the final report")]
    SessionOver,

    /// An answer arrived with no question outstanding. The caller must
    /// alternate strictly between requesting a question and answering it.
    #[error("no pending question to answer")]
    NoPendingQuestion,

    /// No session is registered under the given key, or it was already
    /// removed after terminating.
    #[error("no active session for key {0:?}")]
    UnknownSession(String),

    /// A color pool resolved to zero entries. Cannot happen with the fixed
    /// difficulty tiers; guards against edited tables or bad caller pools.
    #[error("color pool is empty")]
    EmptyColorPool,
}
