//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Truncate a whole-valued f64 into the i64 range, returning 0 for NaN.
#[must_use]
pub fn saturating_f64_to_i64(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    cast::<f64, i64>(value.clamp(min, max)).unwrap_or(if value > 0.0 { i64::MAX } else { i64::MIN })
}

/// Convert a count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Round a f64 into the u32 range, returning 0 for NaN or negative values.
#[must_use]
pub fn round_f64_to_u32(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let max = f64::from(u32::MAX);
    cast::<f64, u32>(value.min(max).round()).unwrap_or(u32::MAX)
}

/// Arithmetic mean of a slice of counts; 0.0 for an empty slice.
#[must_use]
pub fn mean_u32(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total: f64 = values.iter().map(|v| f64::from(*v)).sum();
    total / usize_to_f64(values.len())
}
