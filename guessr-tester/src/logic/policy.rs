use std::fmt;

use guessr_game::outcome::{CLOSE_MAX, EXTREMELY_CLOSE_MAX, VERY_CLOSE_MAX};
use guessr_game::{Direction, GuessOutcome, GuessRange, Tier};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Policy interface for automated players.
pub trait GuessPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Pick the next number to submit.
    fn next_guess(&mut self) -> i64;

    /// Learn from the engine's answer to `guess`.
    fn observe(&mut self, guess: i64, outcome: &GuessOutcome);
}

/// Built-in guessing strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuessStrategy {
    Bisect,
    Linear,
    Random,
    Tiered,
}

impl GuessStrategy {
    pub const ALL: [Self; 4] = [Self::Bisect, Self::Linear, Self::Random, Self::Tiered];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bisect => "Bisect",
            Self::Linear => "Linear",
            Self::Random => "Random",
            Self::Tiered => "Tiered",
        }
    }

    #[must_use]
    pub fn create_policy(self, range: GuessRange, seed: u64) -> Box<dyn GuessPolicy + Send> {
        match self {
            Self::Bisect => Box::new(BisectPolicy::new(range)),
            Self::Linear => Box::new(LinearPolicy::new(range)),
            Self::Random => Box::new(RandomPolicy::new(range, seed)),
            Self::Tiered => Box::new(TieredPolicy::new(range)),
        }
    }
}

impl fmt::Display for GuessStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive bounds the secret is still known to lie within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    lo: i64,
    hi: i64,
}

impl Window {
    fn new(range: GuessRange) -> Self {
        Self {
            lo: i64::from(range.min()),
            hi: i64::from(range.max()),
        }
    }

    const fn midpoint(self) -> i64 {
        self.lo + (self.hi - self.lo) / 2
    }

    /// Drop everything on the wrong side of `guess`.
    fn narrow(&mut self, guess: i64, direction: Direction) {
        match direction {
            Direction::Higher => self.lo = self.lo.max(guess + 1),
            Direction::Lower => self.hi = self.hi.min(guess - 1),
        }
    }

    fn clamp_to(&mut self, lo: i64, hi: i64) {
        self.lo = self.lo.max(lo);
        self.hi = self.hi.min(hi);
    }
}

/// Distance band implied by a tier; `Far` is open-ended.
fn tier_band(tier: Tier) -> (i64, Option<i64>) {
    let extremely = i64::from(EXTREMELY_CLOSE_MAX);
    let very = i64::from(VERY_CLOSE_MAX);
    let close = i64::from(CLOSE_MAX);
    match tier {
        Tier::ExtremelyClose => (1, Some(extremely)),
        Tier::VeryClose => (extremely + 1, Some(very)),
        Tier::Close => (very + 1, Some(close)),
        Tier::Far => (close + 1, None),
    }
}

struct BisectPolicy {
    window: Window,
}

impl BisectPolicy {
    fn new(range: GuessRange) -> Self {
        Self {
            window: Window::new(range),
        }
    }
}

impl GuessPolicy for BisectPolicy {
    fn name(&self) -> &'static str {
        "Bisect"
    }

    fn next_guess(&mut self) -> i64 {
        self.window.midpoint()
    }

    fn observe(&mut self, guess: i64, outcome: &GuessOutcome) {
        if let GuessOutcome::Progress { direction, .. } = *outcome {
            self.window.narrow(guess, direction);
        }
    }
}

/// Walks the range from the bottom and ignores every hint.
struct LinearPolicy {
    next: i64,
}

impl LinearPolicy {
    fn new(range: GuessRange) -> Self {
        Self {
            next: i64::from(range.min()),
        }
    }
}

impl GuessPolicy for LinearPolicy {
    fn name(&self) -> &'static str {
        "Linear"
    }

    fn next_guess(&mut self) -> i64 {
        let guess = self.next;
        self.next += 1;
        guess
    }

    fn observe(&mut self, _guess: i64, _outcome: &GuessOutcome) {}
}

/// Uniform pick inside the window, narrowed by direction hints only.
struct RandomPolicy {
    window: Window,
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    fn new(range: GuessRange, seed: u64) -> Self {
        Self {
            window: Window::new(range),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl GuessPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn next_guess(&mut self) -> i64 {
        if self.window.lo >= self.window.hi {
            return self.window.lo;
        }
        self.rng.gen_range(self.window.lo..=self.window.hi)
    }

    fn observe(&mut self, guess: i64, outcome: &GuessOutcome) {
        if let GuessOutcome::Progress { direction, .. } = *outcome {
            self.window.narrow(guess, direction);
        }
    }
}

/// Uses the proximity tier as well as the direction to cut the window.
struct TieredPolicy {
    window: Window,
}

impl TieredPolicy {
    fn new(range: GuessRange) -> Self {
        Self {
            window: Window::new(range),
        }
    }
}

impl GuessPolicy for TieredPolicy {
    fn name(&self) -> &'static str {
        "Tiered"
    }

    fn next_guess(&mut self) -> i64 {
        self.window.midpoint()
    }

    fn observe(&mut self, guess: i64, outcome: &GuessOutcome) {
        let GuessOutcome::Progress { tier, direction } = *outcome else {
            return;
        };
        self.window.narrow(guess, direction);
        let (near, far) = tier_band(tier);
        match direction {
            Direction::Higher => {
                self.window
                    .clamp_to(guess + near, far.map_or(i64::MAX, |d| guess + d));
            }
            Direction::Lower => {
                self.window
                    .clamp_to(far.map_or(i64::MIN, |d| guess - d), guess - near);
            }
        }
    }
}
