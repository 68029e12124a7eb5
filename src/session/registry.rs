//! The session registry: keyed store of live sessions.
//!
//! This is the piece the enclosing service owns. It maps opaque session
//! keys (whatever the service uses — cookie values, user ids) to
//! [`GameSession`]s with create-or-resume semantics: asking for a key that
//! is unknown, or whose session already terminated, starts a fresh one.
//!
//! # Concurrency note
//!
//! `SessionRegistry` is NOT thread-safe by itself — it is a plain
//! `HashMap`, not a concurrent one. Each method is atomic only in the
//! sense that it runs to completion on one thread. A service handling
//! concurrent requests for the same key must serialize access itself:
//! one mutex around the registry, or a single-writer task that owns it.
//! Keeping the registry lock-free here avoids hidden locking overhead
//! and keeps the policy where it belongs.
//!
//! Terminated sessions are not reaped automatically; the owner removes a
//! session once it has delivered the final report, which bounds memory.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::core::GameRng;
use crate::error::EngineError;
use crate::session::{GameMode, GameSession};

/// Keyed store of sessions with get-or-create and remove operations.
///
/// Owns a master RNG and forks one independent stream per created
/// session, so an entire multi-session run replays from a single seed.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: HashMap<String, GameSession>,
    rng: GameRng,
}

impl SessionRegistry {
    /// Create a registry whose sessions replay deterministically from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            sessions: HashMap::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Create a registry seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            sessions: HashMap::new(),
            rng: GameRng::from_entropy(),
        }
    }

    /// Get the session for `key`, starting a fresh one in `mode` if the
    /// key is unknown or the existing session has terminated.
    ///
    /// Resuming ignores `mode`: an active session keeps the mode it was
    /// created with.
    pub fn create_or_resume(&mut self, key: &str, mode: GameMode) -> &mut GameSession {
        match self.sessions.entry(key.to_string()) {
            Entry::Occupied(mut entry) => {
                if !entry.get().is_active() {
                    debug!(key, %mode, "replacing terminated session");
                    entry.insert(GameSession::new(mode, self.rng.fork()));
                }
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!(key, %mode, "creating session");
                entry.insert(GameSession::new(mode, self.rng.fork()))
            }
        }
    }

    /// Look up an existing session.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut GameSession, EngineError> {
        self.sessions
            .get_mut(key)
            .ok_or_else(|| EngineError::UnknownSession(key.to_string()))
    }

    /// Remove a session, returning it if it existed.
    ///
    /// The owner calls this after delivering the final report.
    pub fn remove(&mut self, key: &str) -> Option<GameSession> {
        let removed = self.sessions.remove(key);
        if removed.is_some() {
            debug!(key, "session removed");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
