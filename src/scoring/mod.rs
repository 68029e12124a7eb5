//! Answer validation and point calculation.
//!
//! Scoring is a pure function of the question, the answer, the reaction
//! time, and the combo coming in:
//!
//! - Base: 10 points per correct answer
//! - Speed bonus: 1 point per 100 ms under a 2000 ms reaction, up to 20
//! - Combo multiplier: `1.0 + combo × 0.1` (a 5-streak scores at 1.5x)
//!
//! A wrong answer earns nothing and resets the combo.

use serde::{Deserialize, Serialize};

use crate::question::StroopQuestion;

/// Points awarded for any correct answer before bonuses.
const BASE_POINTS: u32 = 10;

/// Reaction-time ceiling (ms) under which the speed bonus starts accruing.
const SPEED_BONUS_WINDOW_MS: u32 = 2000;

/// Milliseconds of reaction time per speed-bonus point.
const MS_PER_BONUS_POINT: u32 = 100;

/// Combo multiplier gained per consecutive correct answer.
const COMBO_STEP: f64 = 0.1;

/// Outcome of scoring one submitted answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Whether the selected color names the paint.
    pub correct: bool,
    /// Reaction time as submitted, in milliseconds.
    pub reaction_time_ms: u32,
    /// Points earned by this answer. Zero when wrong.
    pub points_earned: u32,
    /// Combo streak after this answer. Zero when wrong.
    pub combo_after: u32,
    /// Speed bonus component, 0..=20.
    pub speed_bonus: u32,
    /// Combo multiplier applied to the points. Exactly 1.0 when wrong.
    pub multiplier_applied: f64,
}

/// Score a submitted answer against its question.
///
/// Pure: no session state is read or written. Comparison with the paint
/// color is case-insensitive.
#[must_use]
pub fn score_answer(
    question: &StroopQuestion,
    selected_color: &str,
    reaction_time_ms: u32,
    combo_before: u32,
) -> AnswerResult {
    if !question.is_correct(selected_color) {
        return AnswerResult {
            correct: false,
            reaction_time_ms,
            points_earned: 0,
            combo_after: 0,
            speed_bonus: 0,
            multiplier_applied: 1.0,
        };
    }

    let combo_after = combo_before + 1;
    let speed_bonus = SPEED_BONUS_WINDOW_MS.saturating_sub(reaction_time_ms) / MS_PER_BONUS_POINT;
    let multiplier_applied = 1.0 + f64::from(combo_after) * COMBO_STEP;
    let points_earned = (f64::from(BASE_POINTS + speed_bonus) * multiplier_applied).round() as u32;

    AnswerResult {
        correct: true,
        reaction_time_ms,
        points_earned,
        combo_after,
        speed_bonus,
        multiplier_applied,
    }
}
