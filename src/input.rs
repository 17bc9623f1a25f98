use crate::basic::Dir;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::time::{Duration, Instant};

/// How often the sampler thread polls for input
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

/// Minimum spacing between accepted pause toggles
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(120);

/// Single-slot mailbox between the input sampler thread and the simulation
/// thread: a latched direction and a pause flag, last value wins. The
/// simulation reads each exactly once per loop iteration; values written
/// between reads are dropped on purpose, this is a polling contract.
pub struct InputState {
    dir: AtomicU8,
    paused: AtomicBool,
}

impl InputState {
    pub fn new(initial: Dir) -> Self {
        Self {
            dir: AtomicU8::new(initial as u8),
            paused: AtomicBool::new(false),
        }
    }

    pub fn latch_dir(&self, dir: Dir) {
        self.dir.store(dir as u8, Ordering::Relaxed);
    }

    pub fn latched_dir(&self) -> Dir {
        Dir::from(self.dir.load(Ordering::Relaxed))
    }

    pub fn toggle_pause(&self) {
        self.paused.fetch_xor(true, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }
}

/// Edge filter for the pause key: admits a toggle only if the previous one
/// was at least [`DEBOUNCE_DELAY`] ago
pub struct Debounce {
    last: Option<Instant>,
}

impl Debounce {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn admit(&mut self) -> bool {
        self.admit_at(Instant::now())
    }

    fn admit_at(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < DEBOUNCE_DELAY => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_last_value_wins() {
    let input = InputState::new(Dir::U);
    assert_eq!(input.latched_dir(), Dir::U);

    input.latch_dir(Dir::L);
    input.latch_dir(Dir::R);
    assert_eq!(input.latched_dir(), Dir::R);
    // reading doesn't consume
    assert_eq!(input.latched_dir(), Dir::R);
}

#[test]
fn test_pause_toggles() {
    let input = InputState::new(Dir::U);
    assert!(!input.is_paused());
    input.toggle_pause();
    assert!(input.is_paused());
    input.toggle_pause();
    assert!(!input.is_paused());
}

#[test]
fn test_debounce() {
    let mut debounce = Debounce::new();
    let start = Instant::now();

    assert!(debounce.admit_at(start));
    assert!(!debounce.admit_at(start + Duration::from_millis(50)));
    // the rejected edge doesn't reset the window
    assert!(debounce.admit_at(start + DEBOUNCE_DELAY));
    assert!(!debounce.admit_at(start + DEBOUNCE_DELAY + Duration::from_millis(119)));
    assert!(debounce.admit_at(start + DEBOUNCE_DELAY + Duration::from_millis(120)));
}
