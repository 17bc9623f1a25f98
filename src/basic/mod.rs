pub use dir::Dir;
pub use grid_point::GridPoint;

mod dir;
mod grid_point;

pub const NUM_ROWS: usize = 5;
pub const NUM_COLS: usize = 5;
pub const BOARD_SIZE: usize = NUM_ROWS * NUM_COLS;
