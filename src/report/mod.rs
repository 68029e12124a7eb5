//! End-of-session summary and performance rating.

use serde::{Deserialize, Serialize};

use crate::session::{GameMode, GameSession};

/// Qualitative performance rating, worst to best.
///
/// Assigned from average reaction time and correct-answer count by an
/// ordered threshold table; the first row that matches wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    Trainee,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Grandmaster,
}

impl Rating {
    /// Rate a performance.
    ///
    /// `score` is the number of correct answers, not total points.
    #[must_use]
    pub fn for_performance(avg_reaction_ms: u32, score: u32) -> Self {
        if avg_reaction_ms < 600 && score > 40 {
            Rating::Grandmaster
        } else if avg_reaction_ms < 800 && score > 25 {
            Rating::Expert
        } else if avg_reaction_ms < 1000 && score > 15 {
            Rating::Advanced
        } else if avg_reaction_ms < 1200 && score > 8 {
            Rating::Intermediate
        } else if score > 3 {
            Rating::Beginner
        } else {
            Rating::Trainee
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rating::Trainee => "Trainee",
            Rating::Beginner => "Beginner",
            Rating::Intermediate => "Intermediate",
            Rating::Advanced => "Advanced",
            Rating::Expert => "Expert",
            Rating::Grandmaster => "Grandmaster",
        };
        f.write_str(name)
    }
}

/// The end-of-session summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub mode: GameMode,
    pub total_points: u32,
    pub correct_count: u32,
    pub max_combo: u32,
    /// Mean of all submitted reaction times, rounded; 0 with no answers.
    pub avg_reaction_ms: u32,
    /// Wall time from start to termination, two decimals.
    pub elapsed_seconds: f64,
    pub rating: Rating,
    /// Questions answered, correct or not.
    pub total_questions: u32,
    /// `correct_count / total_questions` as a percentage, one decimal.
    pub accuracy_percent: f64,
}

/// Summarize a session.
///
/// Pure read: the session is not mutated, so two calls on a terminated
/// session return identical reports (elapsed time freezes at
/// termination).
#[must_use]
pub fn finalize(session: &GameSession) -> Report {
    let reactions = session.reaction_times();
    let avg_reaction_ms = if reactions.is_empty() {
        0
    } else {
        let sum: u64 = reactions.iter().map(|&ms| u64::from(ms)).sum();
        (sum as f64 / reactions.len() as f64).round() as u32
    };

    let answered = reactions.len() as u32;
    let accuracy =
        f64::from(session.correct_count()) / f64::from(answered.max(1)) * 100.0;

    Report {
        mode: session.mode(),
        total_points: session.total_points(),
        correct_count: session.correct_count(),
        max_combo: session.max_combo(),
        avg_reaction_ms,
        elapsed_seconds: (session.elapsed_seconds() * 100.0).round() / 100.0,
        rating: Rating::for_performance(avg_reaction_ms, session.correct_count()),
        total_questions: answered,
        accuracy_percent: (accuracy * 10.0).round() / 10.0,
    }
}
