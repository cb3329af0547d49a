//! Single-beat rendering.
//!
//! One beat ramps the pattern's brightness up over half the allotted
//! duration and back down over the other half, as discrete frames with a
//! sleep between each. Button state is sampled once per frame; control
//! input observed mid-beat is reported back through [`BeatOutcome`]
//! rather than mutating controller state from inside the animator.

use embassy_time::Duration;

use crate::pattern::Pattern;
use crate::state::SessionState;
use crate::{Button, ScrollDriver};

/// Frames per beat, split between the two halves by integer division.
pub const DEFAULT_STEPS: u16 = 25;

/// Pause after a discrete adjustment so one physical press does not
/// register across consecutive frames.
pub const DEBOUNCE: Duration = Duration::from_millis(200);

/// Control input observed while rendering one beat.
///
/// Transient; consumed by the session controller right after the beat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BeatOutcome {
    /// The stop button was seen; the display has already been blanked.
    pub stop_requested: bool,
    /// The brightness button was seen; the controller should apply one
    /// bump and rebuild its pattern.
    pub bump_requested: bool,
}

/// Renders one full beat as a sequence of frames.
#[derive(Clone, Copy, Debug)]
pub struct BeatAnimator {
    steps: u16,
}

impl Default for BeatAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl BeatAnimator {
    pub const fn new() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }

    /// Override the per-beat frame count.
    pub const fn with_steps(steps: u16) -> Self {
        Self { steps }
    }

    /// Play one beat of the given duration over `pattern`.
    ///
    /// `state` is a copy of the controller's state, used only to preview
    /// brightness bumps locally: when the brightness button is seen
    /// mid-beat, the remaining frames of this beat render from a locally
    /// regenerated oval while the controller applies the same bump once
    /// via the returned outcome. Frames already rendered are left as-is.
    ///
    /// A stop press blanks the display and raises `stop_requested`, but
    /// the frame loop deliberately keeps running to the end of the beat;
    /// only the final post-loop check re-blanks.
    pub fn play<D: ScrollDriver>(
        &self,
        driver: &mut D,
        pattern: &Pattern,
        duration: Duration,
        state: SessionState,
    ) -> BeatOutcome {
        let mut outcome = BeatOutcome::default();
        let mut local_state = state;
        let mut local_pattern: Option<Pattern> = None;

        driver.clear();
        driver.show();

        let half = self.steps / 2;
        let step_length = Duration::from_micros(duration.as_micros() / u64::from(self.steps));

        for i in 0..half {
            self.frame(driver, local_pattern.as_ref().unwrap_or(pattern), i);
            Self::poll(driver, &mut outcome, &mut local_state, &mut local_pattern);
            driver.delay(step_length);
        }
        for i in (1..=half).rev() {
            self.frame(driver, local_pattern.as_ref().unwrap_or(pattern), i);
            Self::poll(driver, &mut outcome, &mut local_state, &mut local_pattern);
            driver.delay(step_length);
        }

        // A press landing exactly on the last frame is still picked up
        // here, in the source's reversed order.
        if driver.is_pressed(Button::X) {
            Self::stop(driver, &mut outcome);
        }
        if driver.is_pressed(Button::B) {
            Self::bump(driver, &mut outcome, &mut local_state, &mut local_pattern);
        }

        driver.clear();
        driver.show();
        outcome
    }

    /// Stage and flush one frame at ramp position `i`.
    fn frame<D: ScrollDriver>(&self, driver: &mut D, pattern: &Pattern, i: u16) {
        for p in pattern.pixels() {
            let level = f32::from(i) * f32::from(p.max_brightness) / f32::from(self.steps);
            driver.set_pixel(p.x, p.y, level as u8);
        }
        driver.show();
    }

    /// Per-frame control sampling, brightness before stop.
    fn poll<D: ScrollDriver>(
        driver: &mut D,
        outcome: &mut BeatOutcome,
        local_state: &mut SessionState,
        local_pattern: &mut Option<Pattern>,
    ) {
        if driver.is_pressed(Button::B) {
            Self::bump(driver, outcome, local_state, local_pattern);
        }
        if driver.is_pressed(Button::X) {
            Self::stop(driver, outcome);
        }
    }

    fn bump<D: ScrollDriver>(
        driver: &mut D,
        outcome: &mut BeatOutcome,
        local_state: &mut SessionState,
        local_pattern: &mut Option<Pattern>,
    ) {
        outcome.bump_requested = true;
        local_state.bump_brightness();
        *local_pattern = Some(Pattern::oval(local_state.brightness));
        driver.delay(DEBOUNCE);
    }

    fn stop<D: ScrollDriver>(driver: &mut D, outcome: &mut BeatOutcome) {
        driver.clear();
        driver.show();
        outcome.stop_requested = true;
    }
}
