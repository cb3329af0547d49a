//! Per-pixel brightness patterns.
//!
//! A [`Pattern`] is the static maximum-brightness field one beat animates
//! over: the heartbeat "oval" (two overlapping parabolic lobes), or the
//! uniform full grid used by the session-end flourish. Patterns are
//! regenerated, never mutated, when the brightness setting changes.

use heapless::Vec;

use crate::math::interp;
use crate::{HEIGHT, PIXEL_COUNT, WIDTH};

/// One cell of a pattern with its own brightness ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub x: u8,
    pub y: u8,
    /// Peak brightness this cell reaches at the top of a beat.
    pub max_brightness: u8,
}

/// A maximum-brightness field covering the full display grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pixels: Vec<Pixel, PIXEL_COUNT>,
}

impl Pattern {
    /// Generate the heartbeat oval for a target brightness.
    ///
    /// The lobes are centered near the middle of the display and widen as
    /// brightness increases; the shape is asymmetric by axis because the
    /// device is wider than tall. Deterministic for a given input.
    pub fn oval(brightness: u8) -> Self {
        let target = f32::from(brightness);
        let control = (target - 20.0) / 80.0;
        // Both spans interpolate between strictly positive bounds, so the
        // division below cannot hit zero.
        let v_span = interp(control, 7.0, 17.0);
        let w_span = interp(control, 4.0, 7.0);

        let mut pixels = Vec::new();
        for x in 0..WIDTH {
            for y in 0..HEIGHT {
                let dx = f32::from(x) - 8.0;
                let dy = f32::from(y) - 3.0;
                let v = -(0.0f32.min(dx * dx / w_span - v_span));
                let w = -(0.0f32.min(dy * dy - w_span));
                let mut level = target.min(target * w * v / (v_span * w_span));
                if level < 1.5 {
                    // Suppress near-invisible cells.
                    level = 0.0;
                }
                if level > 1.5 && level < 2.1 {
                    // Floor visibility for the dimmest lit cells.
                    level = 2.0;
                }
                let _ = pixels.push(Pixel {
                    x,
                    y,
                    max_brightness: level as u8,
                });
            }
        }
        Self { pixels }
    }

    /// Every cell of the grid at one uniform brightness.
    pub fn full_grid(brightness: u8) -> Self {
        let mut pixels = Vec::new();
        for x in 0..WIDTH {
            for y in 0..HEIGHT {
                let _ = pixels.push(Pixel {
                    x,
                    y,
                    max_brightness: brightness,
                });
            }
        }
        Self { pixels }
    }

    /// The cells of this pattern, in x-major grid order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

/// The two right-edge corner pixels drawn beside the brightness readout.
pub fn lower_corner_markers(brightness: u8) -> [Pixel; 2] {
    [
        Pixel {
            x: WIDTH - 1,
            y: 0,
            max_brightness: brightness,
        },
        Pixel {
            x: WIDTH - 1,
            y: HEIGHT - 1,
            max_brightness: brightness,
        },
    ]
}
