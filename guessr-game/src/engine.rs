//! Session state and the guess evaluation pipeline.
use serde::{Deserialize, Serialize};

use crate::outcome::GuessOutcome;
use crate::range::GuessRange;
use crate::rng::SecretSource;

/// Logical state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Accepting submissions.
    #[default]
    Active,
    /// The secret was found; only `restart` leaves this state.
    Won,
}

/// Read-only snapshot of a session's progress.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub attempts: u32,
    pub history: Vec<i32>,
}

/// Mutable state of one game between a start and the next restart.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Session {
    secret: i32,
    attempts: u32,
    history: Vec<i32>,
    phase: SessionPhase,
}

impl Session {
    const fn fresh(secret: i32) -> Self {
        Self {
            secret,
            attempts: 0,
            history: Vec::new(),
            phase: SessionPhase::Active,
        }
    }

    fn record(&mut self, guess: i32) {
        self.attempts = self.attempts.saturating_add(1);
        self.history.push(guess);
    }
}

/// Owns the secret, the attempt counter and the guess history for one game.
#[derive(Debug, Clone)]
pub struct GuessEngine<S> {
    range: GuessRange,
    source: S,
    session: Session,
}

impl<S: SecretSource> GuessEngine<S> {
    /// Start a session over `range`, sampling the first secret from `source`.
    pub fn new(range: GuessRange, mut source: S) -> Self {
        let secret = source.sample(range);
        log::debug!("Secret (dev): {secret}");
        Self {
            range,
            source,
            session: Session::fresh(secret),
        }
    }

    /// Start a session over the fixed classic range.
    pub fn classic(source: S) -> Self {
        Self::new(GuessRange::CLASSIC, source)
    }

    /// Parse raw text and evaluate it against the secret.
    ///
    /// Invalid input and submissions after a win leave the session untouched.
    pub fn submit(&mut self, raw: &str) -> GuessOutcome {
        if let Some(done) = self.won_outcome() {
            return done;
        }
        match parse_guess(raw) {
            Some(value) => self.submit_value(value),
            None => GuessOutcome::InvalidNotANumber,
        }
    }

    /// Evaluate a number the caller already parsed.
    pub fn submit_value(&mut self, value: i64) -> GuessOutcome {
        if let Some(done) = self.won_outcome() {
            return done;
        }
        let Some(guess) = self.in_range(value) else {
            return GuessOutcome::InvalidOutOfRange {
                min: self.range.min(),
                max: self.range.max(),
            };
        };

        self.session.record(guess);
        let outcome = GuessOutcome::evaluate(guess, self.session.secret, self.session.attempts);
        log::trace!(
            "guess {guess} (attempt {}) -> {outcome:?}",
            self.session.attempts
        );
        if outcome.is_win() {
            self.session.phase = SessionPhase::Won;
        }
        outcome
    }

    /// Replace the session with a fresh one over the same range.
    pub fn restart(&mut self) {
        let secret = self.source.sample(self.range);
        self.session = Session::fresh(secret);
        log::debug!("New secret (dev): {secret}");
    }

    /// Answer for any submission once the session is won.
    const fn won_outcome(&self) -> Option<GuessOutcome> {
        match self.session.phase {
            SessionPhase::Won => Some(GuessOutcome::AlreadyWon {
                secret: self.session.secret,
                attempts: self.session.attempts,
            }),
            SessionPhase::Active => None,
        }
    }

    fn in_range(&self, value: i64) -> Option<i32> {
        if !self.range.contains(value) {
            return None;
        }
        i32::try_from(value).ok()
    }
}

impl<S> GuessEngine<S> {
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            attempts: self.session.attempts,
            history: self.session.history.clone(),
        }
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.session.attempts
    }

    #[must_use]
    pub fn history(&self) -> &[i32] {
        &self.session.history
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.session.phase
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.session.phase, SessionPhase::Won)
    }

    #[must_use]
    pub const fn range(&self) -> GuessRange {
        self.range
    }

    /// The hidden value, exposed for developer tooling and tests.
    #[must_use]
    pub const fn secret(&self) -> i32 {
        self.session.secret
    }

    /// Borrow the secret source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}

/// Read a guess from user text.
///
/// Accepts integers and whole-valued decimal or exponent notation
/// (`"30.0"`, `"1e1"`); rejects empty, fractional and non-finite input.
#[must_use]
pub fn parse_guess(raw: &str) -> Option<i64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    let value = text.parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    Some(crate::numbers::saturating_f64_to_i64(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{Direction, Tier};
    use crate::rng::FixedSecrets;

    fn engine_with_secret(secret: i32) -> GuessEngine<FixedSecrets> {
        GuessEngine::classic(FixedSecrets::constant(secret))
    }

    #[test]
    fn parse_guess_accepts_whole_numbers_only() {
        assert_eq!(parse_guess("42"), Some(42));
        assert_eq!(parse_guess("  7\n"), Some(7));
        assert_eq!(parse_guess("-3"), Some(-3));
        assert_eq!(parse_guess("30.0"), Some(30));
        assert_eq!(parse_guess("1e1"), Some(10));
        assert_eq!(parse_guess("4.5"), None);
        assert_eq!(parse_guess(""), None);
        assert_eq!(parse_guess("   "), None);
        assert_eq!(parse_guess("abc"), None);
        assert_eq!(parse_guess("inf"), None);
        assert_eq!(parse_guess("NaN"), None);
    }

    #[test]
    fn winning_guess_moves_session_to_won() {
        let mut engine = engine_with_secret(50);
        assert_eq!(engine.phase(), SessionPhase::Active);
        assert_eq!(
            engine.submit("50"),
            GuessOutcome::Win {
                secret: 50,
                attempts: 1
            }
        );
        assert!(engine.is_won());
        assert_eq!(engine.history(), &[50]);
    }

    #[test]
    fn progress_reports_tier_and_direction() {
        let mut engine = engine_with_secret(50);
        assert_eq!(
            engine.submit("53"),
            GuessOutcome::Progress {
                tier: Tier::VeryClose,
                direction: Direction::Lower
            }
        );
        assert_eq!(engine.phase(), SessionPhase::Active);
    }

    #[test]
    fn invalid_input_leaves_session_untouched() {
        let mut engine = engine_with_secret(50);
        engine.submit("20");
        let before = engine.stats();

        assert_eq!(engine.submit("abc"), GuessOutcome::InvalidNotANumber);
        assert_eq!(engine.submit("12.5"), GuessOutcome::InvalidNotANumber);
        assert_eq!(
            engine.submit("-1"),
            GuessOutcome::InvalidOutOfRange { min: 0, max: 100 }
        );
        assert_eq!(
            engine.submit_value(i64::MAX),
            GuessOutcome::InvalidOutOfRange { min: 0, max: 100 }
        );
        assert_eq!(engine.stats(), before);
    }

    #[test]
    fn submissions_after_win_are_rejected() {
        let mut engine = engine_with_secret(7);
        engine.submit("7");
        let before = engine.stats();
        assert_eq!(
            engine.submit("8"),
            GuessOutcome::AlreadyWon {
                secret: 7,
                attempts: 1
            }
        );
        assert_eq!(
            engine.submit("not a number"),
            GuessOutcome::AlreadyWon {
                secret: 7,
                attempts: 1
            }
        );
        assert_eq!(engine.stats(), before);
    }

    #[test]
    fn restart_resamples_and_clears() {
        let mut engine = GuessEngine::classic(FixedSecrets::new(vec![10, 90]));
        assert_eq!(engine.secret(), 10);
        engine.submit("10");
        assert!(engine.is_won());

        engine.restart();
        assert_eq!(engine.secret(), 90);
        assert_eq!(engine.stats(), SessionStats::default());
        assert_eq!(engine.phase(), SessionPhase::Active);
        assert_eq!(engine.range(), GuessRange::CLASSIC);
    }

    #[test]
    fn duplicates_are_recorded_in_order() {
        let mut engine = engine_with_secret(99);
        for raw in ["5", "5", "80", "5"] {
            engine.submit(raw);
        }
        assert_eq!(engine.history(), &[5, 5, 80, 5]);
        assert_eq!(engine.attempts(), 4);
    }
}
