use crate::basic::Dir;
use crate::control::Simulation;
use crate::input::{Debounce, InputState, SAMPLE_INTERVAL};
use crate::peripherals::console::{ConsoleMatrix, ConsoleScreen, ConsoleSpeaker};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::execute;
use log::{info, warn, LevelFilter};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io;
use std::process;
use std::sync::Arc;
use std::thread;

mod basic;
mod board;
mod control;
mod error;
mod fruit;
mod input;
mod peripherals;
mod pool;
mod sfx;
mod snake;

fn restore_terminal() {
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Keyboard stand-in for the joystick and the pause button: polls on a fixed
/// cadence and overwrites the mailbox, last value wins
fn input_sampler(input: Arc<InputState>) {
    let mut debounce = Debounce::new();
    loop {
        match event::poll(SAMPLE_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                warn!("input poll failed: {e}");
                continue;
            }
        }
        let Ok(Event::Key(KeyEvent { code, modifiers, .. })) = event::read() else {
            continue;
        };
        match code {
            KeyCode::Up | KeyCode::Char('w') => input.latch_dir(Dir::U),
            KeyCode::Down | KeyCode::Char('s') => input.latch_dir(Dir::D),
            KeyCode::Left | KeyCode::Char('a') => input.latch_dir(Dir::L),
            KeyCode::Right | KeyCode::Char('d') => input.latch_dir(Dir::R),
            KeyCode::Char('p') => {
                if debounce.admit() {
                    input.toggle_pause();
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                info!("quit");
                restore_terminal();
                process::exit(0);
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                restore_terminal();
                process::exit(130);
            }
            _ => {}
        }
    }
}

fn main() -> error::Result {
    // stdout belongs to the board in raw mode, logs go to a file
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create("matrix-snake.log")?,
    )
    .expect("failed to initialize logger");
    info!("starting matrix-snake");

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;

    let input = Arc::new(InputState::new(Dir::U));
    {
        let input = Arc::clone(&input);
        thread::spawn(move || input_sampler(input));
    }

    let mut rng = rand::thread_rng();
    let game = snake::Builder::default().build(&mut rng)?;
    let mut sim = Simulation::new(ConsoleMatrix::new(), ConsoleScreen::new(), ConsoleSpeaker);
    let result = sim.run(game, &input, &mut rng);

    restore_terminal();
    match result {
        Ok(score) => {
            println!("final score: {score}");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
