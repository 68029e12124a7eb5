//! Question generation and difficulty scaling.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::core::{palette, GameRng, Tier, FALLBACK_WORD};
use crate::error::EngineError;
use crate::question::StroopQuestion;

/// Number of answer choices on every question.
const OPTION_COUNT: usize = 4;

/// Generates Stroop questions from the color pool of its current tier.
///
/// Owns the session's difficulty: it starts where the session starts and
/// moves only through [`rescale`](Self::rescale). The RNG is injected so
/// question sequences replay from a seed.
#[derive(Clone, Debug)]
pub struct QuestionGenerator {
    difficulty: Tier,
    rng: GameRng,
}

impl QuestionGenerator {
    /// Create a generator at the given starting tier.
    #[must_use]
    pub fn new(difficulty: Tier, rng: GameRng) -> Self {
        Self { difficulty, rng }
    }

    /// The tier currently in effect.
    #[must_use]
    pub fn difficulty(&self) -> Tier {
        self.difficulty
    }

    /// Generate a question from the current tier's pool.
    pub fn generate(&mut self) -> Result<StroopQuestion, EngineError> {
        let tier = self.difficulty;
        self.generate_from_pool(tier.pool(), tier)
    }

    /// Generate a question from an explicit pool.
    ///
    /// The pool does not have to come from a tier; any non-empty set of
    /// catalog names works. With a single-color pool the displayed word
    /// falls back to a reserved color name so the mismatch invariant holds.
    pub fn generate_from_pool(
        &mut self,
        pool: &[&str],
        tier: Tier,
    ) -> Result<StroopQuestion, EngineError> {
        // The paint color is the correct answer.
        let font_color_name = *self.rng.choose(pool).ok_or(EngineError::EmptyColorPool)?;

        // The word must name a different color.
        let words: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|c| *c != font_color_name)
            .collect();
        let displayed_word = match self.rng.choose(&words) {
            Some(w) => *w,
            None => FALLBACK_WORD,
        };

        // Up to 3 distractors from the pool, then catalog filler until we
        // have exactly 4 distinct options.
        let mut distractors: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|c| *c != font_color_name && *c != displayed_word)
            .collect();
        self.rng.shuffle(&mut distractors);

        let mut options: Vec<&str> = Vec::with_capacity(OPTION_COUNT);
        options.push(font_color_name);
        options.extend(distractors.into_iter().take(OPTION_COUNT - 1));
        while options.len() < OPTION_COUNT {
            let (filler, _) = palette::CATALOG[self.rng.gen_range_usize(0..palette::CATALOG.len())];
            if !options.contains(&filler) {
                options.push(filler);
            }
        }
        self.rng.shuffle(&mut options);

        debug!(word = displayed_word, paint = font_color_name, %tier, "question generated");

        Ok(StroopQuestion {
            displayed_word: displayed_word.to_uppercase(),
            font_color_name: font_color_name.to_string(),
            font_color_code: palette::color_code(font_color_name)
                .unwrap_or(palette::FALLBACK_CODE)
                .to_string(),
            options: options.into_iter().map(str::to_string).collect(),
            difficulty_at_issue: tier,
            issued_at_ms: unix_millis(),
        })
    }

    /// Recompute the tier from the cumulative correct-answer count.
    ///
    /// A step function over the count, not an increment — the session calls
    /// this at every 5th correct answer and the tier lands wherever the
    /// count says, which in practice only ever moves it upward.
    pub fn rescale(&mut self, correct_count: u32) {
        self.difficulty = tier_for_score(correct_count);
    }
}

/// Tier thresholds over the cumulative correct-answer count.
#[must_use]
pub fn tier_for_score(correct_count: u32) -> Tier {
    let tier = match correct_count {
        0..=9 => 1,
        10..=19 => 2,
        20..=29 => 3,
        30..=39 => 4,
        _ => 5,
    };
    Tier::new(tier)
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
