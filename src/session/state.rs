//! The session state machine: one play-through, turn by turn.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameRng, Tier};
use crate::error::EngineError;
use crate::question::{tier_for_score, QuestionGenerator, StroopQuestion};
use crate::report::{self, Report};
use crate::scoring::{score_answer, AnswerResult};
use crate::session::mode::{
    EndReason, GameMode, ModeState, SessionStatus, SPEED_WRONG_PENALTY, SURVIVAL_TIME_DELTA_SECS,
};

/// Difficulty rescale cadence, in cumulative correct answers.
const RESCALE_EVERY: u32 = 5;

/// Point-in-time view of a session's counters, returned with every answer.
///
/// `None` in `lives_remaining` / `time_remaining` / `target` means the
/// field does not apply to the session's mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub total_points: u32,
    pub correct_count: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub lives_remaining: Option<u32>,
    /// Seconds left on the Survival clock, rounded to one decimal.
    pub time_remaining: Option<f64>,
    pub target: Option<u32>,
    pub active: bool,
}

/// What `submit_answer` hands back: the scored answer plus where the
/// session stands afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub result: AnswerResult,
    pub session: SessionSnapshot,
}

/// One player's play-through.
///
/// The caller drives a strict alternation: [`next_question`] then
/// [`submit_answer`], repeated until a terminal condition flips the
/// session to `Terminated`. After that, both calls error and the only
/// useful read left is [`final_report`].
///
/// A session is a single logical actor — it holds at most one in-flight
/// question and provides no internal locking. Callers sharing sessions
/// across threads serialize access themselves (see [`SessionRegistry`]).
///
/// [`next_question`]: Self::next_question
/// [`submit_answer`]: Self::submit_answer
/// [`final_report`]: Self::final_report
/// [`SessionRegistry`]: crate::session::SessionRegistry
#[derive(Clone, Debug)]
pub struct GameSession {
    mode: GameMode,
    generator: QuestionGenerator,
    mode_state: ModeState,
    status: SessionStatus,
    correct_count: u32,
    total_points: u32,
    combo: u32,
    max_combo: u32,
    reaction_times: Vec<u32>,
    started_at: Instant,
    ended_at: Option<Instant>,
    pending_question: Option<StroopQuestion>,
}

impl GameSession {
    /// Start a session in the given mode at tier 1.
    #[must_use]
    pub fn new(mode: GameMode, rng: GameRng) -> Self {
        info!(%mode, seed = rng.seed(), "session started");
        Self {
            mode,
            generator: QuestionGenerator::new(tier_for_score(0), rng),
            mode_state: ModeState::for_mode(mode),
            status: SessionStatus::Active,
            correct_count: 0,
            total_points: 0,
            combo: 0,
            max_combo: 0,
            reaction_times: Vec::new(),
            started_at: Instant::now(),
            ended_at: None,
            pending_question: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// The difficulty tier currently in effect.
    #[must_use]
    pub fn difficulty(&self) -> Tier {
        self.generator.difficulty()
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    #[must_use]
    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Every submitted reaction time, in answer order.
    #[must_use]
    pub fn reaction_times(&self) -> &[u32] {
        &self.reaction_times
    }

    /// Seconds since the session started, frozen at termination.
    ///
    /// Freezing makes the final report idempotent: two reads of a
    /// terminated session agree on elapsed time.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.ended_at
            .unwrap_or_else(Instant::now)
            .duration_since(self.started_at)
            .as_secs_f64()
    }

    /// Issue the next question.
    ///
    /// Errors with [`EngineError::SessionOver`] once terminated — the
    /// enclosing handler maps that onto its end-of-session response,
    /// attaching [`final_report`](Self::final_report).
    pub fn next_question(&mut self) -> Result<StroopQuestion, EngineError> {
        if !self.is_active() {
            return Err(EngineError::SessionOver);
        }
        let question = self.generator.generate()?;
        self.pending_question = Some(question.clone());
        Ok(question)
    }

    /// Score the answer to the pending question and apply mode effects.
    ///
    /// Rejects out-of-order calls: a terminated session or a missing
    /// pending question is a caller error and mutates nothing.
    pub fn submit_answer(
        &mut self,
        selected_color: &str,
        reaction_time_ms: u32,
    ) -> Result<AnswerOutcome, EngineError> {
        if !self.is_active() {
            return Err(EngineError::SessionOver);
        }
        let question = self
            .pending_question
            .take()
            .ok_or(EngineError::NoPendingQuestion)?;

        let result = score_answer(&question, selected_color, reaction_time_ms, self.combo);
        self.reaction_times.push(reaction_time_ms);

        if result.correct {
            self.apply_correct(&result);
        } else {
            self.apply_wrong();
        }

        // Speed's win condition can only newly hold after a correct answer,
        // but the check sits after both branches like the penalty path.
        if let ModeState::Speed { target } = self.mode_state {
            if self.correct_count >= target {
                self.terminate(EndReason::TargetReached);
            }
        }

        debug!(
            correct = result.correct,
            points = result.points_earned,
            combo = self.combo,
            "answer scored"
        );

        Ok(AnswerOutcome {
            result,
            session: self.snapshot(),
        })
    }

    /// End the session on the caller's behalf. No-op if already terminated.
    pub fn end(&mut self) {
        if self.is_active() {
            self.terminate(EndReason::ManuallyEnded);
        }
    }

    /// Summarize the session.
    ///
    /// Meant for terminated sessions, where it is idempotent; calling it on
    /// an active session merely summarizes partial progress.
    #[must_use]
    pub fn final_report(&self) -> Report {
        report::finalize(self)
    }

    /// Current counters, with mode-inapplicable fields as `None`.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let (lives_remaining, time_remaining, target) = match self.mode_state {
            ModeState::Endless { lives } => (Some(lives), None, None),
            ModeState::Survival { time_remaining } => {
                (None, Some((time_remaining * 10.0).round() / 10.0), None)
            }
            ModeState::Speed { target } => (None, None, Some(target)),
        };
        SessionSnapshot {
            total_points: self.total_points,
            correct_count: self.correct_count,
            combo: self.combo,
            max_combo: self.max_combo,
            lives_remaining,
            time_remaining,
            target,
            active: self.is_active(),
        }
    }

    fn apply_correct(&mut self, result: &AnswerResult) {
        self.correct_count += 1;
        self.combo = result.combo_after;
        self.max_combo = self.max_combo.max(self.combo);
        self.total_points += result.points_earned;

        if let ModeState::Survival { time_remaining } = &mut self.mode_state {
            *time_remaining += SURVIVAL_TIME_DELTA_SECS;
        }

        if self.correct_count % RESCALE_EVERY == 0 {
            self.generator.rescale(self.correct_count);
            debug!(tier = %self.generator.difficulty(), "difficulty rescaled");
        }
    }

    fn apply_wrong(&mut self) {
        self.combo = 0;
        match &mut self.mode_state {
            ModeState::Endless { lives } => {
                *lives = lives.saturating_sub(1);
                if *lives == 0 {
                    self.terminate(EndReason::LivesExhausted);
                }
            }
            ModeState::Survival { time_remaining } => {
                *time_remaining = (*time_remaining - SURVIVAL_TIME_DELTA_SECS).max(0.0);
                if *time_remaining <= 0.0 {
                    self.terminate(EndReason::TimeExpired);
                }
            }
            ModeState::Speed { .. } => {
                self.total_points = self.total_points.saturating_sub(SPEED_WRONG_PENALTY);
            }
        }
    }

    fn terminate(&mut self, reason: EndReason) {
        self.status = SessionStatus::Terminated(reason);
        self.ended_at = Some(Instant::now());
        self.pending_question = None;
        info!(
            mode = %self.mode,
            ?reason,
            points = self.total_points,
            correct = self.correct_count,
            "session terminated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: GameMode) -> GameSession {
        GameSession::new(mode, GameRng::new(42))
    }

    fn answer_correctly(s: &mut GameSession, reaction_ms: u32) -> AnswerOutcome {
        let q = s.next_question().unwrap();
        s.submit_answer(&q.font_color_name, reaction_ms).unwrap()
    }

    fn answer_wrong(s: &mut GameSession, reaction_ms: u32) -> AnswerOutcome {
        let q = s.next_question().unwrap();
        // Any option that isn't the paint color.
        let wrong = q
            .options
            .iter()
            .find(|o| !q.is_correct(o))
            .unwrap()
            .clone();
        s.submit_answer(&wrong, reaction_ms).unwrap()
    }

    #[test]
    fn test_answer_without_question_is_rejected() {
        let mut s = session(GameMode::Endless);
        assert_eq!(
            s.submit_answer("Red", 500),
            Err(EngineError::NoPendingQuestion)
        );
    }

    #[test]
    fn test_double_answer_is_rejected() {
        let mut s = session(GameMode::Endless);
        answer_correctly(&mut s, 500);
        assert_eq!(
            s.submit_answer("Red", 500),
            Err(EngineError::NoPendingQuestion)
        );
    }

    #[test]
    fn test_correct_answer_updates_counters() {
        let mut s = session(GameMode::Endless);
        let out = answer_correctly(&mut s, 1000);
        assert!(out.result.correct);
        assert_eq!(out.session.correct_count, 1);
        assert_eq!(out.session.combo, 1);
        assert_eq!(out.session.max_combo, 1);
        assert_eq!(out.session.total_points, out.result.points_earned);
        assert!(out.session.active);
    }

    #[test]
    fn test_wrong_answer_resets_combo_keeps_max() {
        let mut s = session(GameMode::Speed);
        answer_correctly(&mut s, 1000);
        answer_correctly(&mut s, 1000);
        let out = answer_wrong(&mut s, 1000);
        assert_eq!(out.session.combo, 0);
        assert_eq!(out.session.max_combo, 2);
    }

    #[test]
    fn test_endless_lives_exhausted() {
        let mut s = session(GameMode::Endless);
        assert_eq!(answer_wrong(&mut s, 500).session.lives_remaining, Some(2));
        assert_eq!(answer_wrong(&mut s, 500).session.lives_remaining, Some(1));
        let out = answer_wrong(&mut s, 500);
        assert_eq!(out.session.lives_remaining, Some(0));
        assert!(!out.session.active);
        assert_eq!(
            s.status(),
            SessionStatus::Terminated(EndReason::LivesExhausted)
        );
    }

    #[test]
    fn test_survival_time_arithmetic() {
        let mut s = session(GameMode::Survival);
        let out = answer_wrong(&mut s, 500);
        assert_eq!(out.session.time_remaining, Some(57.0));
        let out = answer_correctly(&mut s, 500);
        assert_eq!(out.session.time_remaining, Some(60.0));
    }

    #[test]
    fn test_survival_expires_at_zero() {
        let mut s = session(GameMode::Survival);
        for _ in 0..19 {
            assert!(answer_wrong(&mut s, 500).session.active);
        }
        let out = answer_wrong(&mut s, 500);
        assert_eq!(out.session.time_remaining, Some(0.0));
        assert!(!out.session.active);
        assert_eq!(s.status(), SessionStatus::Terminated(EndReason::TimeExpired));
    }

    #[test]
    fn test_speed_penalty_floors_at_zero() {
        let mut s = session(GameMode::Speed);
        let out = answer_wrong(&mut s, 500);
        assert_eq!(out.session.total_points, 0);
        assert!(out.session.active, "speed mode never loses");
    }

    #[test]
    fn test_speed_wins_at_target() {
        let mut s = session(GameMode::Speed);
        for i in 0..49 {
            // Intervening wrong answers cost points, not progress.
            if i % 10 == 0 {
                assert!(answer_wrong(&mut s, 500).session.active);
            }
            assert!(answer_correctly(&mut s, 500).session.active);
        }
        let out = answer_correctly(&mut s, 500);
        assert!(!out.session.active);
        assert_eq!(out.session.correct_count, 50);
        assert_eq!(
            s.status(),
            SessionStatus::Terminated(EndReason::TargetReached)
        );
    }

    #[test]
    fn test_difficulty_rescales_on_fifth_correct() {
        let mut s = session(GameMode::Speed);
        for expected in [1u8, 1, 2, 2, 3, 3, 4, 4] {
            for _ in 0..5 {
                answer_correctly(&mut s, 500);
            }
            assert_eq!(s.difficulty(), Tier::new(expected));
        }
        // 40th correct: top tier.
        for _ in 0..5 {
            answer_correctly(&mut s, 500);
        }
        assert_eq!(s.difficulty(), Tier::new(5));
    }

    #[test]
    fn test_wrong_answers_do_not_rescale() {
        let mut s = session(GameMode::Speed);
        for _ in 0..9 {
            answer_correctly(&mut s, 500);
        }
        for _ in 0..7 {
            answer_wrong(&mut s, 500);
        }
        assert_eq!(s.difficulty(), Tier::new(1));
        // The 10th correct lands tier 2 at the checkpoint.
        answer_correctly(&mut s, 500);
        assert_eq!(s.difficulty(), Tier::new(2));
    }

    #[test]
    fn test_terminated_session_rejects_everything() {
        let mut s = session(GameMode::Endless);
        s.end();
        assert_eq!(s.status(), SessionStatus::Terminated(EndReason::ManuallyEnded));
        assert_eq!(s.next_question(), Err(EngineError::SessionOver));
        assert_eq!(s.submit_answer("Red", 100), Err(EngineError::SessionOver));
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut s = session(GameMode::Survival);
        answer_wrong(&mut s, 500);
        s.end();
        s.end();
        assert_eq!(s.status(), SessionStatus::Terminated(EndReason::ManuallyEnded));
    }

    #[test]
    fn test_question_issued_at_current_difficulty() {
        let mut s = session(GameMode::Speed);
        let q = s.next_question().unwrap();
        assert_eq!(q.difficulty_at_issue, Tier::new(1));
        s.submit_answer(&q.font_color_name, 500).unwrap();
    }

    #[test]
    fn test_snapshot_fields_match_mode() {
        let endless = session(GameMode::Endless).snapshot();
        assert_eq!(endless.lives_remaining, Some(3));
        assert_eq!(endless.time_remaining, None);
        assert_eq!(endless.target, None);

        let survival = session(GameMode::Survival).snapshot();
        assert_eq!(survival.lives_remaining, None);
        assert_eq!(survival.time_remaining, Some(60.0));

        let speed = session(GameMode::Speed).snapshot();
        assert_eq!(speed.target, Some(50));
        assert_eq!(speed.lives_remaining, None);
    }
}
