//! The Stroop question value object.

use serde::{Deserialize, Serialize};

use crate::core::Tier;

/// A single Stroop question, immutable once issued.
///
/// ## Invariants
///
/// - `displayed_word` never names the color it is painted in
/// - `options` holds exactly 4 distinct names, `font_color_name` among them
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StroopQuestion {
    /// The word shown on screen, upper-cased. This is the distractor.
    pub displayed_word: String,

    /// The color the word is painted in — the correct answer.
    pub font_color_name: String,

    /// Display code for `font_color_name`, for the frontend to paint with.
    pub font_color_code: String,

    /// Exactly 4 answer choices in randomized order.
    pub options: Vec<String>,

    /// Tier active when this question was generated.
    pub difficulty_at_issue: Tier,

    /// Unix milliseconds at generation. Informational only.
    pub issued_at_ms: u64,
}

impl StroopQuestion {
    /// Whether a submitted answer names the paint color.
    ///
    /// Comparison is case-insensitive; the scoring layer relies on this.
    #[must_use]
    pub fn is_correct(&self, selected_color: &str) -> bool {
        selected_color.eq_ignore_ascii_case(&self.font_color_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> StroopQuestion {
        StroopQuestion {
            displayed_word: "YELLOW".into(),
            font_color_name: "Red".into(),
            font_color_code: "#ef4444".into(),
            options: vec!["Red".into(), "Blue".into(), "Green".into(), "Yellow".into()],
            difficulty_at_issue: Tier::new(1),
            issued_at_ms: 0,
        }
    }

    #[test]
    fn test_is_correct_case_insensitive() {
        let q = question();
        assert!(q.is_correct("Red"));
        assert!(q.is_correct("red"));
        assert!(q.is_correct("RED"));
        assert!(!q.is_correct("Yellow"));
        assert!(!q.is_correct(""));
    }

    #[test]
    fn test_serde_round_trip() {
        let q = question();
        let json = serde_json::to_string(&q).unwrap();
        let back: StroopQuestion = serde_json::from_str(&json).unwrap();
        assert_eq!(q, back);
    }
}
