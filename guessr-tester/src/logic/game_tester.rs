use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use guessr_game::{GuessOutcome, GuessRange, SeededEngine, seeded_engine};

use super::policy::GuessStrategy;

/// Hard stop for a single game; the linear policy needs at most `span + 1`.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 500;

/// One submission and what the engine answered.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord {
    pub guess: i64,
    pub outcome: GuessOutcome,
    pub attempts_after: u32,
    pub history_len_after: usize,
}

/// Everything observed while a policy played one game.
#[derive(Debug, Clone)]
pub struct SimulationSummary {
    pub seed: u64,
    pub strategy: GuessStrategy,
    pub range: GuessRange,
    pub secret: i32,
    pub turns: Vec<TurnRecord>,
    pub won: bool,
    pub final_attempts: u32,
    pub final_history: Vec<i32>,
}

impl SimulationSummary {
    /// `attempts == history.len()` held after every submission, and only
    /// accepted guesses were counted.
    #[must_use]
    pub fn counters_consistent(&self) -> bool {
        let per_turn = self.turns.iter().all(|turn| {
            usize::try_from(turn.attempts_after).is_ok_and(|a| a == turn.history_len_after)
        });
        per_turn && usize::try_from(self.final_attempts).is_ok_and(|a| a == self.accepted_turns())
    }

    /// Turns the engine recorded in the history.
    #[must_use]
    pub fn accepted_turns(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| turn.outcome.is_accepted())
            .count()
    }

    /// Turns rejected as malformed or out of range.
    #[must_use]
    pub fn rejected_turns(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| turn.outcome.is_invalid())
            .count()
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.won { "won" } else { "halted" }
    }
}

/// Assertion hook run after a simulation completes.
type SimulationExpectationFn =
    Arc<dyn Fn(&SimulationSummary) -> Result<()> + Send + Sync + 'static>;

#[derive(Clone)]
pub struct SimulationExpectation(SimulationExpectationFn);

impl std::fmt::Debug for SimulationExpectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationExpectation").finish()
    }
}

impl SimulationExpectation {
    pub fn evaluate(&self, summary: &SimulationSummary) -> Result<()> {
        (self.0)(summary)
    }
}

impl<F> From<F> for SimulationExpectation
where
    F: Fn(&SimulationSummary) -> Result<()> + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self(Arc::new(f))
    }
}

#[derive(Debug, Clone)]
pub struct SimulationPlan {
    pub strategy: GuessStrategy,
    pub max_attempts: u32,
    pub expectations: Vec<SimulationExpectation>,
}

impl SimulationPlan {
    #[must_use]
    pub const fn new(strategy: GuessStrategy) -> Self {
        Self {
            strategy,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: impl Into<SimulationExpectation>) -> Self {
        self.expectations.push(expectation.into());
        self
    }
}

/// Plays seeded games against the engine with a chosen policy.
#[derive(Debug, Clone, Copy)]
pub struct GameTester {
    verbose: bool,
}

impl GameTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run_plan(&self, plan: &SimulationPlan, seed: u64) -> SimulationSummary {
        let mut engine = seeded_engine(seed);
        let range = engine.range();
        let secret = engine.secret();
        let mut policy = plan.strategy.create_policy(range, seed);
        let mut turns = Vec::new();
        let turn_limit = usize::try_from(plan.max_attempts)
            .unwrap_or(usize::MAX)
            .saturating_mul(2);

        if self.verbose {
            println!(
                "    ↳ {} seed {} secret {}",
                policy.name().bright_white(),
                seed,
                secret
            );
        }

        while !engine.is_won() && engine.attempts() < plan.max_attempts {
            let guess = policy.next_guess();
            let outcome = engine.submit(&guess.to_string());
            log::trace!("{} guessed {guess}: {outcome:?}", policy.name());
            policy.observe(guess, &outcome);
            turns.push(record_turn(&engine, guess, outcome));
            if turns.len() > turn_limit {
                // A policy producing only rejected input never advances attempts.
                break;
            }
        }

        SimulationSummary {
            seed,
            strategy: plan.strategy,
            range,
            secret,
            turns,
            won: engine.is_won(),
            final_attempts: engine.attempts(),
            final_history: engine.history().to_vec(),
        }
    }
}

fn record_turn(engine: &SeededEngine, guess: i64, outcome: GuessOutcome) -> TurnRecord {
    TurnRecord {
        guess,
        outcome,
        attempts_after: engine.attempts(),
        history_len_after: engine.history().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_strategy_wins_on_a_few_seeds() {
        let tester = GameTester::new(false);
        for strategy in GuessStrategy::ALL {
            for seed in [1_u64, 42, 1337] {
                let summary = tester.run_plan(&SimulationPlan::new(strategy), seed);
                assert!(summary.won, "{strategy} lost on seed {seed}");
                assert!(summary.counters_consistent());
                assert_eq!(summary.final_history.last().copied(), Some(summary.secret));
            }
        }
    }

    #[test]
    fn attempt_cap_halts_the_game() {
        let tester = GameTester::new(false);
        let plan = SimulationPlan::new(GuessStrategy::Linear).with_max_attempts(1);
        let summary = (0..64)
            .map(|seed| tester.run_plan(&plan, seed))
            .find(|summary| summary.secret != 0)
            .expect("some seed has a non-zero secret");
        assert!(!summary.won);
        assert_eq!(summary.final_attempts, 1);
        assert_eq!(summary.status_label(), "halted");
    }

    #[test]
    fn accepted_and_rejected_turns_are_tallied() {
        let tester = GameTester::new(false);
        let summary = tester.run_plan(&SimulationPlan::new(GuessStrategy::Linear), 3);
        assert!(summary.won);
        assert_eq!(summary.rejected_turns(), 0);
        assert_eq!(
            summary.accepted_turns(),
            usize::try_from(summary.final_attempts).unwrap()
        );

        let mut forged = summary.clone();
        forged.turns.push(TurnRecord {
            guess: 1_000,
            outcome: GuessOutcome::InvalidOutOfRange { min: 0, max: 100 },
            attempts_after: summary.final_attempts,
            history_len_after: summary.final_history.len(),
        });
        assert_eq!(forged.rejected_turns(), 1);
        assert!(forged.counters_consistent());

        forged.final_attempts += 1;
        assert!(!forged.counters_consistent());
    }

    #[test]
    fn expectations_receive_the_summary() {
        let plan = SimulationPlan::new(GuessStrategy::Bisect).with_expectation(
            |summary: &SimulationSummary| {
                anyhow::ensure!(summary.won, "bisect should win");
                Ok(())
            },
        );
        let summary = GameTester::new(false).run_plan(&plan, 7);
        for expectation in &plan.expectations {
            expectation.evaluate(&summary).expect("expectation passes");
        }
    }
}
