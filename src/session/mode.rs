//! Game modes and session lifecycle tags.

use serde::{Deserialize, Serialize};

/// Lives a fresh Endless session starts with.
pub const STARTING_LIVES: u32 = 3;

/// Seconds on a fresh Survival clock.
pub const STARTING_TIME_SECS: f64 = 60.0;

/// Seconds gained (correct) or lost (wrong) in Survival.
pub const SURVIVAL_TIME_DELTA_SECS: f64 = 3.0;

/// Correct answers needed to win Speed mode.
pub const SPEED_TARGET: u32 = 50;

/// Points a wrong answer costs in Speed mode.
pub const SPEED_WRONG_PENALTY: u32 = 5;

/// The three ways to play. Fixed for a session's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Play until 3 lives are gone.
    Endless,
    /// 60-second clock; correct answers buy time, wrong ones burn it.
    Survival,
    /// Race to 50 correct answers; wrong answers cost points.
    Speed,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameMode::Endless => "endless",
            GameMode::Survival => "survival",
            GameMode::Speed => "speed",
        };
        f.write_str(name)
    }
}

/// Why a session terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// Endless: the last life was lost.
    LivesExhausted,
    /// Survival: the clock hit zero.
    TimeExpired,
    /// Speed: the 50th correct answer landed. A win, not a loss.
    TargetReached,
    /// The caller ended the session.
    ManuallyEnded,
}

/// Session lifecycle. Once `Terminated` there is no way back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Active,
    Terminated(EndReason),
}

/// The per-mode mutable state a session carries.
///
/// Tagged by mode so a session only holds the fields its mode actually
/// reads; there is no "-1 means disabled" convention to misread.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ModeState {
    Endless { lives: u32 },
    Survival { time_remaining: f64 },
    Speed { target: u32 },
}

impl ModeState {
    pub(crate) fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Endless => ModeState::Endless {
                lives: STARTING_LIVES,
            },
            GameMode::Survival => ModeState::Survival {
                time_remaining: STARTING_TIME_SECS,
            },
            GameMode::Speed => ModeState::Speed {
                target: SPEED_TARGET,
            },
        }
    }
}
