//! Tone constants for the three sound events. One short tone per move or
//! eat, a fixed note sequence on death.

/// C4, played on an ordinary move
pub const MOVE_TONE_HZ: u16 = 261;

/// Bb5, played when a fruit is eaten
pub const EAT_TONE_HZ: u16 = 932;

/// Death jingle: a descending chromatic run from B5 to D5, (hz, ms) pairs
/// played back-to-back
pub const DEATH_SONG: [(u16, u64); 10] = [
    (988, 150),
    (932, 150),
    (880, 150),
    (831, 150),
    (784, 150),
    (740, 150),
    (698, 150),
    (659, 150),
    (622, 150),
    (587, 300),
];
