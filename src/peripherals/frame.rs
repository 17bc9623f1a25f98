use crate::basic::{GridPoint, BOARD_SIZE, NUM_COLS};
use crate::board::{Board, Cell};

pub const LED_COUNT: usize = BOARD_SIZE;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Self = Rgb { r: 0, g: 0, b: 0 };
    pub const SNAKE_GREEN: Self = Rgb { r: 0, g: 100, b: 0 };
    pub const FRUIT_RED: Self = Rgb { r: 100, g: 0, b: 0 };
}

/// Strip index for a board coordinate. The strip snakes through the matrix
/// boustrophedon-style; even rows run right-to-left.
pub fn strip_index(row: usize, col: usize) -> usize {
    if row % 2 == 0 {
        row * NUM_COLS + (NUM_COLS - 1 - col)
    } else {
        row * NUM_COLS + col
    }
}

/// One rendered frame: a pixel per strip LED, already in physical order
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Frame(pub [Rgb; LED_COUNT]);

impl Frame {
    pub const BLANK: Self = Frame([Rgb::OFF; LED_COUNT]);

    pub fn from_board(board: &Board) -> Self {
        let mut frame = Self::BLANK;
        for index in 0..BOARD_SIZE {
            let pos = GridPoint::from_cell_index(index);
            let pixel = match board.get(pos) {
                Cell::Snake => Rgb::SNAKE_GREEN,
                Cell::Fruit => Rgb::FRUIT_RED,
                Cell::Empty => continue,
            };
            frame.0[strip_index(pos.row(), pos.col())] = pixel;
        }
        frame
    }
}

#[test]
fn test_strip_index() {
    // even rows are inverted, odd rows run in board order
    assert_eq!(strip_index(0, 0), 4);
    assert_eq!(strip_index(0, 4), 0);
    assert_eq!(strip_index(1, 0), 5);
    assert_eq!(strip_index(1, 4), 9);
    assert_eq!(strip_index(2, 0), 14);
    assert_eq!(strip_index(4, 4), 20);
}

#[test]
fn test_strip_index_is_a_bijection() {
    let mut seen = [false; LED_COUNT];
    for index in 0..BOARD_SIZE {
        let pos = GridPoint::from_cell_index(index);
        let led = strip_index(pos.row(), pos.col());
        assert!(!seen[led]);
        seen[led] = true;
    }
}

#[test]
fn test_from_board_colors() {
    let mut board = Board::new();
    board.set(GridPoint::ORIGIN, Cell::Snake);
    board.set(GridPoint::new(1, 2).unwrap(), Cell::Fruit);

    let frame = Frame::from_board(&board);
    assert_eq!(frame.0[strip_index(0, 0)], Rgb::SNAKE_GREEN);
    assert_eq!(frame.0[strip_index(1, 2)], Rgb::FRUIT_RED);
    assert_eq!(
        frame.0.iter().filter(|&&px| px == Rgb::OFF).count(),
        LED_COUNT - 2
    );
}
