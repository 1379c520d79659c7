//! Inclusive bound pair the secret and every accepted guess live in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a [`GuessRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range minimum {min} is greater than maximum {max}")]
    Inverted { min: i32, max: i32 },
}

/// Immutable inclusive range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessRange {
    min: i32,
    max: i32,
}

impl GuessRange {
    /// The fixed range every session is played in.
    pub const CLASSIC: Self = Self { min: 0, max: 100 };

    /// Build a range, rejecting inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Inverted`] when `min > max`.
    pub const fn new(min: i32, max: i32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> i32 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Whether `value` falls inside the inclusive bounds.
    #[must_use]
    pub fn contains(self, value: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&value)
    }

    /// Number of distinct integers in the range.
    #[must_use]
    pub fn span(self) -> u64 {
        (i64::from(self.max) - i64::from(self.min)).unsigned_abs() + 1
    }
}

impl Default for GuessRange {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_range_is_zero_to_hundred() {
        let range = GuessRange::CLASSIC;
        assert_eq!(range.min(), 0);
        assert_eq!(range.max(), 100);
        assert_eq!(range.span(), 101);
        assert_eq!(GuessRange::default(), range);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert_eq!(
            GuessRange::new(10, 3),
            Err(RangeError::Inverted { min: 10, max: 3 })
        );
        let single = GuessRange::new(7, 7).unwrap();
        assert_eq!(single.span(), 1);
    }

    #[test]
    fn contains_is_inclusive_and_handles_wide_values() {
        let range = GuessRange::CLASSIC;
        assert!(range.contains(0));
        assert!(range.contains(100));
        assert!(!range.contains(-1));
        assert!(!range.contains(101));
        assert!(!range.contains(i64::MAX));

        let wide = GuessRange::new(i32::MIN, i32::MAX).unwrap();
        assert_eq!(wide.span(), u64::from(u32::MAX) + 1);
    }
}
