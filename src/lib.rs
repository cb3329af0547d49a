#![no_std]

pub mod beat;
pub mod math;
pub mod pattern;
pub mod schedule;
pub mod session;
pub mod state;

pub use beat::{BeatAnimator, BeatOutcome};
pub use math::{duration_from_secs, interp};
pub use pattern::{Pattern, Pixel, lower_corner_markers};
pub use session::{SessionConfig, SessionController};
pub use state::SessionState;

pub use embassy_time::{Duration, Instant};

/// Display width in pixels (Pico Scroll geometry).
pub const WIDTH: u8 = 17;
/// Display height in pixels.
pub const HEIGHT: u8 = 7;
/// Total cell count of the grid.
pub const PIXEL_COUNT: usize = WIDTH as usize * HEIGHT as usize;

/// The four physical buttons on the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// Start a session
    A,
    /// Adjust brightness
    B,
    /// Blank the display / stop the session
    X,
    /// Adjust session length
    Y,
}

/// Abstract scroll-display driver trait
///
/// Implement this trait to support different hardware platforms.
/// The pacing engine is generic over this trait. All calls are assumed
/// synchronous and blocking; hardware faults are fatal in the integration
/// layer and are not surfaced here.
pub trait ScrollDriver {
    /// Zero the staged frame buffer without flushing.
    fn clear(&mut self);

    /// Stage one cell's brightness in the frame buffer.
    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8);

    /// Flush the staged buffer to the physical display.
    fn show(&mut self);

    /// Stage a text string at the given position (numeric readouts).
    fn show_text(&mut self, text: &str, x: u8, y: u8);

    /// Sample the current state of one button (non-blocking).
    fn is_pressed(&mut self, button: Button) -> bool;

    /// Block for the given duration (e.g. `embassy_time::block_for`).
    ///
    /// This is the engine's only timing source; frame cadence drifts by
    /// however long staging and flushing take.
    fn delay(&mut self, duration: Duration);
}
