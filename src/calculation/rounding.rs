//! Money rounding.

/// Rounds to two decimal places, half away from zero on the scaled value.
///
/// This is the only rounding the engine performs. It works on binary
/// floating point, so values sitting on an exact `*.005` boundary round
/// according to their nearest `f64` representation.
///
/// # Examples
///
/// ```
/// use shift_rate_engine::calculation::round2;
///
/// assert_eq!(round2(37.499), 37.5);
/// assert_eq!(round2(2.0), 2.0);
/// assert_eq!(round2(-1.235), -1.24);
/// ```
pub fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}
