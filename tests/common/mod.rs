#![allow(dead_code)]

use std::collections::VecDeque;

use scroll_pacer::{Button, Duration, HEIGHT, ScrollDriver, WIDTH};

pub const W: usize = WIDTH as usize;
pub const H: usize = HEIGHT as usize;

/// A flushed frame, indexed `[y][x]`.
pub type Frame = [[u8; W]; H];

/// In-memory scroll driver: records staged pixels, flushed frames, text
/// calls and accumulated delays, and replays scripted button samples.
pub struct TestScroll {
    buffer: Frame,
    pub frames: Vec<Frame>,
    pub texts: Vec<(String, u8, u8)>,
    pub slept: Duration,
    presses: [VecDeque<bool>; 4],
}

fn button_index(button: Button) -> usize {
    match button {
        Button::A => 0,
        Button::B => 1,
        Button::X => 2,
        Button::Y => 3,
    }
}

impl TestScroll {
    pub fn new() -> Self {
        Self {
            buffer: [[0; W]; H],
            frames: Vec::new(),
            texts: Vec::new(),
            slept: Duration::from_millis(0),
            presses: Default::default(),
        }
    }

    /// Queue scripted samples for one button. Each `is_pressed` call on
    /// that button consumes one sample; an exhausted script reads
    /// released.
    pub fn script(&mut self, button: Button, samples: &[bool]) {
        self.presses[button_index(button)].extend(samples.iter().copied());
    }

    pub fn is_blank(frame: &Frame) -> bool {
        frame.iter().all(|row| row.iter().all(|&b| b == 0))
    }

    /// The single level shared by every cell, if the frame is uniform.
    pub fn uniform_level(frame: &Frame) -> Option<u8> {
        let level = frame[0][0];
        frame
            .iter()
            .all(|row| row.iter().all(|&b| b == level))
            .then_some(level)
    }
}

impl ScrollDriver for TestScroll {
    fn clear(&mut self) {
        self.buffer = [[0; W]; H];
    }

    fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) {
        self.buffer[y as usize][x as usize] = brightness;
    }

    fn show(&mut self) {
        self.frames.push(self.buffer);
    }

    fn show_text(&mut self, text: &str, x: u8, y: u8) {
        self.texts.push((text.to_owned(), x, y));
    }

    fn is_pressed(&mut self, button: Button) -> bool {
        self.presses[button_index(button)]
            .pop_front()
            .unwrap_or(false)
    }

    fn delay(&mut self, duration: Duration) {
        self.slept += duration;
    }
}
