//! Guessr Game Engine
//!
//! Platform-agnostic core of the Guessr number-guessing game: secret
//! sampling, session state, guess evaluation and the data the presentation
//! needs to render feedback and celebrate a win. Nothing here touches a DOM,
//! an audio device or a clock.

pub mod celebration;
pub mod config;
pub mod engine;
pub mod feedback;
pub mod numbers;
pub mod outcome;
pub mod range;
pub mod rng;
pub mod theme;

use rand::rngs::SmallRng;

// Re-export commonly used types
pub use celebration::{
    CelebrationConfig, CelebrationPlan, Chord, ChordVoice, ConfettiPiece, Envelope, Waveform,
};
pub use config::{ConfigError, GameConfig};
pub use engine::{GuessEngine, SessionPhase, SessionStats, parse_guess};
pub use feedback::{Feedback, MessageKind, format_history};
pub use outcome::{Direction, GuessOutcome, Tier};
pub use range::{GuessRange, RangeError};
pub use rng::{CountingRng, FixedSecrets, RngBundle, SecretSource};
pub use theme::{Theme, ThemePreference};

/// Engine driven by a standalone seeded secret stream.
pub type SeededEngine = GuessEngine<CountingRng<SmallRng>>;

/// Start a classic-range session whose secrets are reproducible from `seed`.
#[must_use]
pub fn seeded_engine(seed: u64) -> SeededEngine {
    GuessEngine::classic(CountingRng::for_secrets(seed))
}

/// Trait for abstracting user preference persistence.
/// Platform-specific implementations should provide this
pub trait PreferenceStore {
    type Error: std::error::Error + 'static;

    /// Read a stored value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be accessed.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}
