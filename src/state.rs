//! Session state and the adjustment wrap/latch rules.

/// Lowest brightness setting; increments wrap back here.
pub const BRIGHTNESS_FLOOR: u8 = 20;
/// Highest brightness setting still considered valid.
pub const BRIGHTNESS_CEIL: u8 = 101;
/// Brightness added per adjustment press.
pub const BRIGHTNESS_STEP: u8 = 10;
/// Shortest session length, in minutes; increments wrap back here.
pub const LENGTH_FLOOR: u16 = 5;
/// Longest session length still considered valid.
pub const LENGTH_CEIL: u16 = 61;
/// Minutes added per adjustment press.
pub const LENGTH_STEP: u16 = 5;

const DEFAULT_BRIGHTNESS: u8 = 40;
const DEFAULT_LENGTH_MINS: u16 = 25;

/// The controller's whole mutable state.
///
/// Owned and mutated exclusively by the session controller;
/// [`BeatAnimator`](crate::BeatAnimator) only ever works on a copy.
#[derive(Clone, Copy, Debug)]
pub struct SessionState {
    /// Target brightness for the oval pattern.
    pub brightness: u8,
    /// Nominal session length in minutes.
    pub length_mins: u16,
    /// Whether a session is in progress.
    pub running: bool,
    /// Arming latch for brightness adjustment: the first press after a
    /// reset only arms, subsequent presses increment.
    pub brightness_adjust_active: bool,
    /// Arming latch for length adjustment.
    pub length_adjust_active: bool,
    /// Accumulated beat time of the current session.
    pub elapsed_secs: f32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            length_mins: DEFAULT_LENGTH_MINS,
            running: false,
            brightness_adjust_active: false,
            length_adjust_active: false,
            elapsed_secs: 0.0,
        }
    }
}

impl SessionState {
    /// Step the brightness setting by one press.
    ///
    /// Increments only while the latch is armed; walking past
    /// [`BRIGHTNESS_CEIL`] resets to the floor and disarms within the
    /// same call, so the overflowed value is never observable.
    pub fn inc_brightness(&mut self) {
        if self.brightness_adjust_active {
            self.brightness += BRIGHTNESS_STEP;
        }
        if self.brightness > BRIGHTNESS_CEIL {
            self.brightness = BRIGHTNESS_FLOOR;
            self.brightness_adjust_active = false;
        }
    }

    /// Step the session length by one press, with the same latch shape
    /// as [`inc_brightness`](Self::inc_brightness).
    pub fn inc_length(&mut self) {
        if self.length_adjust_active {
            self.length_mins += LENGTH_STEP;
        }
        if self.length_mins > LENGTH_CEIL {
            self.length_mins = LENGTH_FLOOR;
            self.length_adjust_active = false;
        }
    }

    /// Apply a mid-beat brightness bump request.
    ///
    /// The very first bump after a state reset is a no-op that arms the
    /// latch; later bumps increment.
    pub fn bump_brightness(&mut self) {
        self.inc_brightness();
        self.brightness_adjust_active = true;
    }

    /// Transition idle → running, resetting elapsed time and the
    /// brightness latch.
    pub fn begin(&mut self) {
        self.elapsed_secs = 0.0;
        self.running = true;
        self.brightness_adjust_active = false;
    }
}
