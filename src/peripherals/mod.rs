//! Narrow interfaces to the hardware collaborators: the LED matrix, the
//! score display and the speaker. The simulation only ever talks to these
//! traits; `console` holds the terminal stand-ins used by the binary.

use crate::error::Result;

pub use frame::{strip_index, Frame, Rgb, LED_COUNT};

pub mod console;
mod frame;

pub trait LedMatrix {
    fn render(&mut self, frame: &Frame) -> Result;

    fn blank(&mut self) -> Result {
        self.render(&Frame::BLANK)
    }
}

pub trait ScoreScreen {
    fn show_score(&mut self, score: usize) -> Result;
    fn show_paused(&mut self) -> Result;
    fn clear(&mut self) -> Result;
}

/// Fire-and-forget tone generation; `start` replaces any tone already
/// playing
pub trait Speaker {
    fn start(&mut self, tone_hz: u16) -> Result;
    fn stop(&mut self) -> Result;
}
