use anyhow::{Result, ensure};
use guessr_game::outcome::{CLOSE_MAX, EXTREMELY_CLOSE_MAX, VERY_CLOSE_MAX};
use guessr_game::{Direction, GuessOutcome, Tier, seeded_engine};

use crate::logic::game_tester::SimulationSummary;

/// Upper bound on bisection guesses for a range of `span` values.
#[must_use]
pub fn bisect_bound(span: u64) -> u32 {
    u64::BITS - span.leading_zeros()
}

pub fn smoke_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.won, "bisection should always find the secret");
    let bound = bisect_bound(summary.range.span());
    ensure!(
        summary.final_attempts <= bound,
        "bisection took {} attempts, bound is {bound}",
        summary.final_attempts
    );
    Ok(())
}

pub fn policy_expectation(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.won, "{} policy did not win", summary.strategy);
    ensure!(
        summary.counters_consistent(),
        "attempts diverged from history length"
    );
    ensure!(
        summary.rejected_turns() == 0,
        "{} policy guessed outside the range {} times",
        summary.strategy,
        summary.rejected_turns()
    );
    ensure!(
        u64::from(summary.final_attempts) <= summary.range.span(),
        "{} attempts exceed the range size",
        summary.final_attempts
    );
    ensure!(
        summary.final_history.last() == Some(&summary.secret),
        "last recorded guess is not the secret"
    );
    Ok(())
}

fn expected_tier(diff: u32) -> Tier {
    if diff <= EXTREMELY_CLOSE_MAX {
        Tier::ExtremelyClose
    } else if diff <= VERY_CLOSE_MAX {
        Tier::VeryClose
    } else if diff <= CLOSE_MAX {
        Tier::Close
    } else {
        Tier::Far
    }
}

/// Every wrong guess in range lands in the right tier with the right hint.
pub fn tier_ladder_expectation(summary: &SimulationSummary) -> Result<()> {
    let mut engine = seeded_engine(summary.seed);
    let secret = engine.secret();
    let range = engine.range();

    for guess in range.min()..=range.max() {
        if guess == secret {
            continue;
        }
        let outcome = engine.submit_value(i64::from(guess));
        let direction = if guess < secret {
            Direction::Higher
        } else {
            Direction::Lower
        };
        let expected = GuessOutcome::Progress {
            tier: expected_tier(guess.abs_diff(secret)),
            direction,
        };
        ensure!(
            outcome == expected,
            "guess {guess} vs secret {secret}: got {outcome:?}, expected {expected:?}"
        );
    }

    let wrong = u32::try_from(range.span() - 1)?;
    let outcome = engine.submit_value(i64::from(secret));
    ensure!(
        outcome
            == GuessOutcome::Win {
                secret,
                attempts: wrong + 1
            },
        "final guess should win on attempt {}, got {outcome:?}",
        wrong + 1
    );
    Ok(())
}

/// Rejected input leaves the counters alone, before and after real guesses.
pub fn invalid_input_expectation(summary: &SimulationSummary) -> Result<()> {
    let mut engine = seeded_engine(summary.seed);
    let range = engine.range();
    let not_numbers = ["", "   ", "abc", "12.5", "NaN", "inf", "4 2"];
    let out_of_range = [
        (i64::from(range.min()) - 1).to_string(),
        (i64::from(range.max()) + 1).to_string(),
        "1e9".to_string(),
    ];

    for round in 0..2 {
        let before = engine.stats();
        for raw in not_numbers {
            let outcome = engine.submit(raw);
            ensure!(
                outcome.is_invalid() && !outcome.is_accepted(),
                "{raw:?} should be rejected, got {outcome:?}"
            );
            ensure!(
                outcome == GuessOutcome::InvalidNotANumber,
                "{raw:?} should be rejected as not a number, got {outcome:?}"
            );
        }
        for raw in &out_of_range {
            let outcome = engine.submit(raw);
            ensure!(
                outcome
                    == GuessOutcome::InvalidOutOfRange {
                        min: range.min(),
                        max: range.max()
                    },
                "{raw:?} should be out of range, got {outcome:?}"
            );
        }
        ensure!(
            engine.stats() == before,
            "rejected input changed stats in round {round}"
        );

        // Make one valid, non-winning guess before the second round.
        let miss = if engine.secret() == range.min() {
            range.max()
        } else {
            range.min()
        };
        engine.submit_value(i64::from(miss));
    }
    Ok(())
}

/// Restarting keeps secrets in range and actually draws new ones.
pub fn restart_spread_expectation(summary: &SimulationSummary) -> Result<()> {
    const RESTARTS: usize = 200;

    let mut engine = seeded_engine(summary.seed);
    let range = engine.range();
    let mut seen = std::collections::BTreeSet::new();
    seen.insert(engine.secret());

    for _ in 0..RESTARTS {
        engine.restart();
        ensure!(
            range.contains(i64::from(engine.secret())),
            "secret {} escaped {range:?}",
            engine.secret()
        );
        ensure!(engine.attempts() == 0, "restart must clear attempts");
        ensure!(engine.history().is_empty(), "restart must clear history");
        seen.insert(engine.secret());
    }

    ensure!(
        seen.len() >= 20,
        "only {} distinct secrets across {RESTARTS} restarts",
        seen.len()
    );
    Ok(())
}

/// Once won, submissions are answered with `AlreadyWon` and change nothing.
pub fn won_guard_expectation(summary: &SimulationSummary) -> Result<()> {
    let mut engine = seeded_engine(summary.seed);
    let secret = engine.secret();
    let first = engine.submit_value(i64::from(secret));
    ensure!(first.is_win(), "submitting the secret should win, got {first:?}");

    let frozen = engine.stats();
    let late_inputs = [
        secret.to_string(),
        "0".to_string(),
        "abc".to_string(),
        "500".to_string(),
    ];
    for raw in &late_inputs {
        let outcome = engine.submit(raw);
        ensure!(
            outcome
                == GuessOutcome::AlreadyWon {
                    secret,
                    attempts: frozen.attempts
                },
            "{raw:?} after a win returned {outcome:?}"
        );
        ensure!(engine.stats() == frozen, "{raw:?} after a win changed stats");
    }

    engine.restart();
    ensure!(!engine.is_won(), "restart should reopen the session");
    Ok(())
}
