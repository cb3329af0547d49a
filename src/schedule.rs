//! Beat-rate decay schedule.
//!
//! Maps cumulative elapsed session time to the duration of the next beat.
//! Beats start fast and slow down over the first third of the nominal
//! session length, then hold at the low rate for the remainder.

use crate::math::interp;

/// Beat rate at the start of a session.
pub const HIGH_BPM: f32 = 150.0;
/// Beat rate once the decay window has elapsed.
pub const LOW_BPM: f32 = 54.0;

/// Fraction of the session length that spans the full rate range.
const DECAY_FRACTION: f32 = 3.0;

/// Seconds the next beat should take, given elapsed session time.
pub fn beat_seconds(elapsed_secs: f32, length_mins: u16) -> f32 {
    let decay_mins = f32::from(length_mins) / DECAY_FRACTION;
    interp(
        elapsed_secs / (decay_mins * 60.0),
        60.0 / HIGH_BPM,
        60.0 / LOW_BPM,
    )
}
