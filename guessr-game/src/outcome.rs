//! Classified results of evaluating a single guess.
use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the "extremely close" tier.
pub const EXTREMELY_CLOSE_MAX: u32 = 2;
/// Upper bound (inclusive) of the "very close" tier.
pub const VERY_CLOSE_MAX: u32 = 5;
/// Upper bound (inclusive) of the "close" tier.
pub const CLOSE_MAX: u32 = 10;

/// Proximity of a wrong guess to the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    ExtremelyClose,
    VeryClose,
    Close,
    Far,
}

impl Tier {
    /// Classify a non-zero distance, narrowest tier first.
    #[must_use]
    pub const fn classify(diff: u32) -> Self {
        if diff <= EXTREMELY_CLOSE_MAX {
            Self::ExtremelyClose
        } else if diff <= VERY_CLOSE_MAX {
            Self::VeryClose
        } else if diff <= CLOSE_MAX {
            Self::Close
        } else {
            Self::Far
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExtremelyClose => "extremely close",
            Self::VeryClose => "very close",
            Self::Close => "close",
            Self::Far => "far",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which way the next guess should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    /// Direction hint for a wrong guess; `None` when the guess is the secret.
    #[must_use]
    pub const fn between(guess: i32, secret: i32) -> Option<Self> {
        if guess < secret {
            Some(Self::Higher)
        } else if guess > secret {
            Some(Self::Lower)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Higher => "higher",
            Self::Lower => "lower",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The guess matched the secret; the session is now won.
    Win { secret: i32, attempts: u32 },
    /// A wrong but valid guess.
    Progress { tier: Tier, direction: Direction },
    /// The input could not be read as a whole number.
    InvalidNotANumber,
    /// The number falls outside the session range.
    InvalidOutOfRange { min: i32, max: i32 },
    /// The session was already won; nothing was recorded.
    AlreadyWon { secret: i32, attempts: u32 },
}

impl GuessOutcome {
    /// Evaluate an in-range guess against the secret.
    #[must_use]
    pub const fn evaluate(guess: i32, secret: i32, attempts: u32) -> Self {
        match Direction::between(guess, secret) {
            None => Self::Win { secret, attempts },
            Some(direction) => Self::Progress {
                tier: Tier::classify(guess.abs_diff(secret)),
                direction,
            },
        }
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win { .. })
    }

    /// Whether the guess was recorded in the session history.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Win { .. } | Self::Progress { .. })
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(
            self,
            Self::InvalidNotANumber | Self::InvalidOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_edges_are_inclusive() {
        assert_eq!(Tier::classify(1), Tier::ExtremelyClose);
        assert_eq!(Tier::classify(2), Tier::ExtremelyClose);
        assert_eq!(Tier::classify(3), Tier::VeryClose);
        assert_eq!(Tier::classify(5), Tier::VeryClose);
        assert_eq!(Tier::classify(6), Tier::Close);
        assert_eq!(Tier::classify(10), Tier::Close);
        assert_eq!(Tier::classify(11), Tier::Far);
        assert_eq!(Tier::classify(u32::MAX), Tier::Far);
    }

    #[test]
    fn direction_follows_sign() {
        assert_eq!(Direction::between(3, 9), Some(Direction::Higher));
        assert_eq!(Direction::between(9, 3), Some(Direction::Lower));
        assert_eq!(Direction::between(4, 4), None);
    }

    #[test]
    fn evaluate_never_reports_direction_on_match() {
        assert_eq!(
            GuessOutcome::evaluate(50, 50, 3),
            GuessOutcome::Win {
                secret: 50,
                attempts: 3
            }
        );
        assert_eq!(
            GuessOutcome::evaluate(60, 50, 1),
            GuessOutcome::Progress {
                tier: Tier::Close,
                direction: Direction::Lower
            }
        );
    }

    #[test]
    fn evaluate_handles_extreme_distances() {
        let outcome = GuessOutcome::evaluate(i32::MIN, i32::MAX, 1);
        assert_eq!(
            outcome,
            GuessOutcome::Progress {
                tier: Tier::Far,
                direction: Direction::Higher
            }
        );
    }

    #[test]
    fn outcome_classification_helpers() {
        let win = GuessOutcome::Win {
            secret: 1,
            attempts: 1,
        };
        assert!(win.is_win() && win.is_accepted() && !win.is_invalid());
        assert!(GuessOutcome::InvalidNotANumber.is_invalid());
        let guarded = GuessOutcome::AlreadyWon {
            secret: 1,
            attempts: 1,
        };
        assert!(!guarded.is_accepted() && !guarded.is_invalid());
    }

    #[test]
    fn outcome_serializes_with_kind_tag() {
        let json = serde_json::to_string(&GuessOutcome::Progress {
            tier: Tier::VeryClose,
            direction: Direction::Higher,
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"kind":"progress","tier":"very_close","direction":"higher"}"#
        );
    }
}
