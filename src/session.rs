//! Session controller - the main orchestrator
//!
//! A two-state machine (idle / beating) over a [`ScrollDriver`]. While a
//! session runs it plays one beat per step, feeding elapsed time through
//! the rate schedule; when idle it polls the four buttons directly. Each
//! step is a single, self-contained poll so the machine can be driven
//! one transition at a time.

use core::fmt::Write;

use heapless::String;

use crate::beat::{BeatAnimator, DEBOUNCE};
use crate::math::duration_from_secs;
use crate::pattern::{Pattern, lower_corner_markers};
use crate::schedule::{HIGH_BPM, beat_seconds};
use crate::state::SessionState;
use crate::{Button, ScrollDriver};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Where numeric readouts are staged on the display.
const READOUT_X: u8 = 10;
const READOUT_Y: u8 = 0;

/// Number of full-grid beats played when a session runs to completion.
const FLOURISH_BEATS: u8 = 5;
/// Duration of each flourish beat, in seconds.
const FLOURISH_SECS: f32 = 0.2;
/// Brightness added over the session setting for the flourish.
const FLOURISH_EXTRA: u8 = 10;

/// Initial settings for a controller.
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub brightness: u8,
    pub length_mins: u16,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let state = SessionState::default();
        Self {
            brightness: state.brightness,
            length_mins: state.length_mins,
        }
    }
}

/// Top-level state machine coordinating sessions on one device.
pub struct SessionController<D: ScrollDriver> {
    driver: D,
    state: SessionState,
    pattern: Pattern,
    animator: BeatAnimator,
    /// Duration of the next beat, in seconds.
    beat_secs: f32,
}

impl<D: ScrollDriver> SessionController<D> {
    pub fn new(driver: D, config: SessionConfig) -> Self {
        let state = SessionState {
            brightness: config.brightness,
            length_mins: config.length_mins,
            ..SessionState::default()
        };
        Self {
            driver,
            pattern: Pattern::oval(state.brightness),
            state,
            animator: BeatAnimator::new(),
            beat_secs: 60.0 / HIGH_BPM,
        }
    }

    /// Current state, for external observation.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Get a reference to the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Run the controller forever.
    pub fn run(&mut self) {
        loop {
            self.step();
        }
    }

    /// One state-machine step: a beat while running, one poll pass
    /// otherwise.
    pub fn step(&mut self) {
        if self.state.running {
            self.beat_step();
        } else {
            self.idle_poll();
        }
    }

    /// Play one beat, advance the schedule, and apply whatever control
    /// input the beat observed.
    fn beat_step(&mut self) {
        let duration = duration_from_secs(self.beat_secs);
        let outcome = self
            .animator
            .play(&mut self.driver, &self.pattern, duration, self.state);

        self.state.elapsed_secs += self.beat_secs;
        self.beat_secs = beat_seconds(self.state.elapsed_secs, self.state.length_mins);

        if outcome.bump_requested {
            self.state.bump_brightness();
            self.pattern = Pattern::oval(self.state.brightness);
        }
        if outcome.stop_requested {
            // The animator already blanked the display.
            self.state.running = false;
            self.state.brightness_adjust_active = false;
            return;
        }
        if self.state.elapsed_secs > f32::from(self.state.length_mins) * 60.0 {
            self.finish();
        }
    }

    /// Session ran to completion: play the end flourish and go idle.
    fn finish(&mut self) {
        let flourish = Pattern::full_grid(self.state.brightness + FLOURISH_EXTRA);
        let duration = duration_from_secs(FLOURISH_SECS);
        for _ in 0..FLOURISH_BEATS {
            let _ = self
                .animator
                .play(&mut self.driver, &flourish, duration, self.state);
        }
        self.state.running = false;
    }

    /// One idle pass over all four buttons.
    fn idle_poll(&mut self) {
        if self.driver.is_pressed(Button::A) {
            self.state.begin();
            self.beat_secs = 60.0 / HIGH_BPM;
            self.pattern = Pattern::oval(self.state.brightness);
            #[cfg(feature = "esp32-log")]
            println!(
                "starting {} minute session at brightness {}",
                self.state.length_mins, self.state.brightness
            );
        }
        if self.driver.is_pressed(Button::X) {
            self.driver.clear();
            self.driver.show();
            self.state.brightness_adjust_active = false;
        }
        if self.driver.is_pressed(Button::B) {
            self.state.inc_brightness();
            self.draw_brightness_readout();
            self.state.brightness_adjust_active = true;
            self.driver.delay(DEBOUNCE);
        }
        if self.driver.is_pressed(Button::Y) {
            self.state.inc_length();
            self.draw_length_readout();
            self.state.length_adjust_active = true;
            self.driver.delay(DEBOUNCE);
        }
    }

    /// Brightness value on screen, plus the two corner markers lit at
    /// the configured brightness.
    fn draw_brightness_readout(&mut self) {
        self.driver.clear();
        let mut text: String<8> = String::new();
        let _ = write!(text, "{}", self.state.brightness);
        self.driver.show_text(&text, READOUT_X, READOUT_Y);
        for p in lower_corner_markers(self.state.brightness) {
            self.driver.set_pixel(p.x, p.y, p.max_brightness);
        }
        self.driver.show();
    }

    fn draw_length_readout(&mut self) {
        self.driver.clear();
        let mut text: String<8> = String::new();
        let _ = write!(text, "{}", self.state.length_mins);
        self.driver.show_text(&text, READOUT_X, READOUT_Y);
        self.driver.show();
    }
}
