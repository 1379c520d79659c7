//! Player-facing copy for every outcome.
use serde::{Deserialize, Serialize};

use crate::outcome::{Direction, GuessOutcome, Tier};

/// Visual category of a message, matching the stylesheet's classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Neutral,
    Error,
    Success,
    Close,
    Low,
    High,
}

impl MessageKind {
    /// CSS modifier class; empty for neutral prompts.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Error => "error",
            Self::Success => "success",
            Self::Close => "close",
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

/// A rendered message line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Feedback {
    pub message: String,
    pub kind: MessageKind,
}

impl Feedback {
    fn new(message: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Prompt shown before the first guess.
    #[must_use]
    pub fn welcome() -> Self {
        Self::new("Enter a number and press Check.", MessageKind::Neutral)
    }

    /// Prompt shown after a restart.
    #[must_use]
    pub fn restarted() -> Self {
        Self::new("Game restarted. Make a guess!", MessageKind::Neutral)
    }

    /// Shown when Check is pressed with nothing typed.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new("Type a number before checking.", MessageKind::Error)
    }

    #[must_use]
    pub fn for_outcome(outcome: &GuessOutcome) -> Self {
        match *outcome {
            GuessOutcome::Win { secret, attempts } => Self::new(
                format!("Congratulations! You guessed {secret} in {attempts} attempts."),
                MessageKind::Success,
            ),
            GuessOutcome::Progress { tier, direction } => progress_feedback(tier, direction),
            GuessOutcome::InvalidNotANumber => {
                Self::new("Please enter a valid number.", MessageKind::Error)
            }
            GuessOutcome::InvalidOutOfRange { min, max } => Self::new(
                format!("Please enter a number between {min} and {max}."),
                MessageKind::Error,
            ),
            GuessOutcome::AlreadyWon { secret, .. } => Self::new(
                format!("You already found {secret}! Press restart to play again."),
                MessageKind::Success,
            ),
        }
    }

    /// Full class list for the message element.
    #[must_use]
    pub fn css_classes(&self) -> String {
        match self.kind.css_class() {
            "" => "message".to_string(),
            class => format!("message {class}"),
        }
    }
}

fn progress_feedback(tier: Tier, direction: Direction) -> Feedback {
    use Direction::{Higher, Lower};

    let (message, kind) = match (tier, direction) {
        (Tier::ExtremelyClose, Higher) => (
            "Extremely close — just a little higher!",
            MessageKind::Close,
        ),
        (Tier::ExtremelyClose, Lower) => (
            "Extremely close — just a little lower!",
            MessageKind::Close,
        ),
        (Tier::VeryClose, Higher) => ("Very close — try a bit higher!", MessageKind::Close),
        (Tier::VeryClose, Lower) => ("Very close — try a bit lower!", MessageKind::Close),
        (Tier::Close, Higher) => ("Close — you are within 10. Go higher!", MessageKind::Close),
        (Tier::Close, Lower) => ("Close — you are within 10. Go lower!", MessageKind::Close),
        (Tier::Far, Higher) => ("Too low — try a higher number.", MessageKind::Low),
        (Tier::Far, Lower) => ("Too high — try a lower number.", MessageKind::High),
    };
    Feedback::new(message, kind)
}

/// Guess history as shown in the meta panel.
#[must_use]
pub fn format_history(history: &[i32]) -> String {
    if history.is_empty() {
        return "—".to_string();
    }
    history
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_message_reports_secret_and_attempts() {
        let fb = Feedback::for_outcome(&GuessOutcome::Win {
            secret: 37,
            attempts: 5,
        });
        assert_eq!(fb.message, "Congratulations! You guessed 37 in 5 attempts.");
        assert_eq!(fb.kind, MessageKind::Success);
        assert_eq!(fb.css_classes(), "message success");
    }

    #[test]
    fn far_guesses_use_low_and_high_kinds() {
        let low = Feedback::for_outcome(&GuessOutcome::Progress {
            tier: Tier::Far,
            direction: Direction::Higher,
        });
        assert_eq!(low.message, "Too low — try a higher number.");
        assert_eq!(low.kind, MessageKind::Low);

        let high = Feedback::for_outcome(&GuessOutcome::Progress {
            tier: Tier::Far,
            direction: Direction::Lower,
        });
        assert_eq!(high.kind, MessageKind::High);
    }

    #[test]
    fn near_tiers_share_close_kind() {
        for tier in [Tier::ExtremelyClose, Tier::VeryClose, Tier::Close] {
            for direction in [Direction::Higher, Direction::Lower] {
                let fb = Feedback::for_outcome(&GuessOutcome::Progress { tier, direction });
                assert_eq!(fb.kind, MessageKind::Close);
                assert!(fb.message.ends_with(&format!("{}!", direction.label())));
            }
        }
    }

    #[test]
    fn extremely_close_wording() {
        let fb = Feedback::for_outcome(&GuessOutcome::Progress {
            tier: Tier::ExtremelyClose,
            direction: Direction::Lower,
        });
        assert_eq!(fb.message, "Extremely close — just a little lower!");
    }

    #[test]
    fn invalid_messages_are_errors() {
        let fb = Feedback::for_outcome(&GuessOutcome::InvalidOutOfRange { min: 0, max: 100 });
        assert_eq!(fb.message, "Please enter a number between 0 and 100.");
        assert_eq!(fb.kind, MessageKind::Error);
        assert_eq!(
            Feedback::for_outcome(&GuessOutcome::InvalidNotANumber).message,
            "Please enter a valid number."
        );
        assert_eq!(Feedback::empty_input().kind, MessageKind::Error);
    }

    #[test]
    fn prompts_are_neutral() {
        assert_eq!(Feedback::welcome().css_classes(), "message");
        assert_eq!(Feedback::restarted().message, "Game restarted. Make a guess!");
    }

    #[test]
    fn history_formatting() {
        assert_eq!(format_history(&[]), "—");
        assert_eq!(format_history(&[10, 45, 45]), "10, 45, 45");
    }
}
