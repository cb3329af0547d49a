//! Interpolation and time conversion helpers.

use embassy_time::Duration;

/// Linear interpolation between `a` and `b`, clamped at the ends.
///
/// `s <= 0` yields `a`, `s >= 1` yields `b`. Holds for `a > b` as well,
/// which the pattern and rate math rely on for decreasing parameters.
pub fn interp(s: f32, a: f32, b: f32) -> f32 {
    if s <= 0.0 {
        return a;
    }
    if s >= 1.0 {
        return b;
    }
    s * b + (1.0 - s) * a
}

/// Convert float seconds to a [`Duration`] with microsecond resolution.
///
/// The single point where derived float timing meets `embassy_time`.
pub fn duration_from_secs(secs: f32) -> Duration {
    Duration::from_micros((secs * 1_000_000.0) as u64)
}
