//! Terminal stand-ins for the real peripherals, enough to play the game
//! over a raw-mode terminal.

use super::{Frame, LedMatrix, Rgb, ScoreScreen, Speaker};
use crate::basic::{NUM_COLS, NUM_ROWS};
use crate::error::Result;
use crate::peripherals::strip_index;
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use log::debug;
use std::io::{Stdout, Write};

const STATUS_LINE: u16 = NUM_ROWS as u16 + 1;

pub struct ConsoleMatrix {
    out: Stdout,
}

impl ConsoleMatrix {
    pub fn new() -> Self {
        Self { out: std::io::stdout() }
    }
}

impl LedMatrix for ConsoleMatrix {
    fn render(&mut self, frame: &Frame) -> Result {
        queue!(self.out, MoveTo(0, 0))?;
        // board row 0 is the bottom of the matrix
        for row in (0..NUM_ROWS).rev() {
            for col in 0..NUM_COLS {
                let pixel = frame.0[strip_index(row, col)];
                let (color, glyph) = if pixel == Rgb::OFF {
                    (Color::DarkGrey, '·')
                } else if pixel.g > 0 {
                    (Color::Green, '●')
                } else {
                    (Color::Red, '●')
                };
                queue!(
                    self.out,
                    SetForegroundColor(color),
                    Print(glyph),
                    Print(' ')
                )?;
            }
            queue!(self.out, Print("\r\n"))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}

pub struct ConsoleScreen {
    out: Stdout,
}

impl ConsoleScreen {
    pub fn new() -> Self {
        Self { out: std::io::stdout() }
    }
}

impl ScoreScreen for ConsoleScreen {
    fn show_score(&mut self, score: usize) -> Result {
        queue!(
            self.out,
            MoveTo(0, STATUS_LINE),
            Clear(ClearType::CurrentLine),
            Print(format!("SCORE: {score}"))
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn show_paused(&mut self) -> Result {
        queue!(
            self.out,
            MoveTo(0, STATUS_LINE),
            Clear(ClearType::CurrentLine),
            Print("PAUSED")
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result {
        queue!(
            self.out,
            MoveTo(0, STATUS_LINE),
            Clear(ClearType::CurrentLine)
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// No tone generator on a terminal; the events land in the log instead
pub struct ConsoleSpeaker;

impl Speaker for ConsoleSpeaker {
    fn start(&mut self, tone_hz: u16) -> Result {
        debug!("tone on: {tone_hz} Hz");
        Ok(())
    }

    fn stop(&mut self) -> Result {
        debug!("tone off");
        Ok(())
    }
}
