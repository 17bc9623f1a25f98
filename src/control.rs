use crate::error::Result;
use crate::input::InputState;
use crate::peripherals::{Frame, LedMatrix, ScoreScreen, Speaker};
use crate::sfx;
use crate::snake::{Game, StepOutcome};
use log::info;
use rand::Rng;
use std::thread;
use std::time::Duration;

/// How long the move tone plays after a step
pub const TICK_MOVE: Duration = Duration::from_millis(200);
/// Silence between the tone cutting off and the next tick
pub const TICK_SETTLE: Duration = Duration::from_millis(300);

const BANNER_ON: Duration = Duration::from_millis(400);
const BANNER_OFF: Duration = Duration::from_millis(200);

const FLASH_CYCLES: usize = 5;
const FLASH_PERIOD: Duration = Duration::from_millis(100);

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    Paused,
    GameOver,
}

/// Drives the fixed-period tick loop: reads the latched input once per
/// iteration, advances the game and pushes the results out to the
/// peripherals. All blocking lives here; `Game` and everything below it is
/// synchronous state transitions only.
pub struct Simulation<M: LedMatrix, S: ScoreScreen, A: Speaker> {
    matrix: M,
    screen: S,
    speaker: A,
    state: State,
}

impl<M: LedMatrix, S: ScoreScreen, A: Speaker> Simulation<M, S, A> {
    pub fn new(matrix: M, screen: S, speaker: A) -> Self {
        Self {
            matrix,
            screen,
            speaker,
            state: State::Playing,
        }
    }

    /// Run the game to its terminal state and play out the terminal
    /// sequence. Returns the final snake size.
    pub fn run(
        &mut self,
        mut game: Game,
        input: &InputState,
        rng: &mut impl Rng,
    ) -> Result<usize> {
        let final_outcome = loop {
            if input.is_paused() {
                if self.state != State::Paused {
                    self.state = State::Paused;
                    info!("paused");
                }
                // blink the banner, leave the game untouched
                self.screen.show_paused()?;
                thread::sleep(BANNER_ON);
                self.screen.clear()?;
                thread::sleep(BANNER_OFF);
                continue;
            }
            if self.state == State::Paused {
                info!("resumed");
            }
            self.state = State::Playing;

            self.matrix.render(&Frame::from_board(game.board()))?;
            self.screen.show_score(game.size())?;

            let outcome = game.step(input.latched_dir(), rng)?;
            match outcome {
                StepOutcome::Continued => self.speaker.start(sfx::MOVE_TONE_HZ)?,
                StepOutcome::Grew => self.speaker.start(sfx::EAT_TONE_HZ)?,
                StepOutcome::Won | StepOutcome::GameOver => {
                    self.state = State::GameOver;
                    break outcome;
                }
            }

            thread::sleep(TICK_MOVE);
            self.speaker.stop()?;
            thread::sleep(TICK_SETTLE);
        };

        self.speaker.stop()?;
        let last_frame = Frame::from_board(game.board());
        self.matrix.render(&last_frame)?;
        self.screen.show_score(game.size())?;

        match final_outcome {
            StepOutcome::Won => {
                info!("board full, snake wins at size {}", game.size());
                self.speaker.start(sfx::EAT_TONE_HZ)?;
                thread::sleep(TICK_MOVE);
                self.speaker.stop()?;
            }
            StepOutcome::GameOver => {
                info!("game over at size {}", game.size());
                for &(tone_hz, duration_ms) in sfx::DEATH_SONG.iter() {
                    self.speaker.start(tone_hz)?;
                    thread::sleep(Duration::from_millis(duration_ms));
                }
                self.speaker.stop()?;
            }
            _ => unreachable!(),
        }

        for _ in 0..FLASH_CYCLES {
            self.matrix.blank()?;
            thread::sleep(FLASH_PERIOD);
            self.matrix.render(&last_frame)?;
            thread::sleep(FLASH_PERIOD);
        }

        Ok(game.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::{Dir, GridPoint};
    use crate::snake::Builder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct RecordingMatrix {
        renders: usize,
        blanks: usize,
    }

    impl LedMatrix for RecordingMatrix {
        fn render(&mut self, frame: &Frame) -> Result {
            if *frame == Frame::BLANK {
                self.blanks += 1;
            } else {
                self.renders += 1;
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingScreen {
        scores: Vec<usize>,
    }

    impl ScoreScreen for RecordingScreen {
        fn show_score(&mut self, score: usize) -> Result {
            self.scores.push(score);
            Ok(())
        }

        fn show_paused(&mut self) -> Result {
            Ok(())
        }

        fn clear(&mut self) -> Result {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSpeaker {
        tones: Vec<u16>,
    }

    impl Speaker for RecordingSpeaker {
        fn start(&mut self, tone_hz: u16) -> Result {
            self.tones.push(tone_hz);
            Ok(())
        }

        fn stop(&mut self) -> Result {
            Ok(())
        }
    }

    #[test]
    fn immediate_wall_hit_runs_terminal_sequence() {
        let mut rng = StdRng::seed_from_u64(3);
        // snake at the origin, fruit pinned out of the way, heading down
        // into the wall on the very first tick
        let game = Builder::default()
            .fruit(GridPoint::new(4, 4).unwrap())
            .build(&mut rng)
            .unwrap();
        let input = InputState::new(Dir::D);

        let mut sim = Simulation::new(
            RecordingMatrix::default(),
            RecordingScreen::default(),
            RecordingSpeaker::default(),
        );
        let final_size = sim.run(game, &input, &mut rng).unwrap();

        assert_eq!(final_size, 1);
        assert_eq!(sim.state, State::GameOver);
        // one render per tick plus the terminal render and five flash cycles
        assert_eq!(sim.matrix.renders, 1 + 1 + FLASH_CYCLES);
        assert_eq!(sim.matrix.blanks, FLASH_CYCLES);
        // the death song played all ten notes, no move tone was started
        assert_eq!(sim.speaker.tones.len(), sfx::DEATH_SONG.len());
        assert_eq!(sim.speaker.tones[0], sfx::DEATH_SONG[0].0);
        assert_eq!(sim.screen.scores, vec![1, 1]);
    }
}
