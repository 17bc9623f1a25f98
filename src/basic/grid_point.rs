use crate::basic::{Dir, BOARD_SIZE, NUM_COLS, NUM_ROWS};
use crate::error::{Error, Result};
use std::fmt::{Debug, Formatter};
use Dir::*;

// INVARIANT: row and col are always within the board
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GridPoint {
    row: u8,
    col: u8,
}

impl GridPoint {
    pub const ORIGIN: Self = GridPoint { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= NUM_ROWS || col >= NUM_COLS {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// One cell over in the given direction, `None` if that leaves the board.
    /// Row 0 is the bottom row, so `U` increments the row.
    #[must_use]
    pub fn translate(self, dir: Dir) -> Option<Self> {
        match dir {
            U if (self.row as usize) + 1 < NUM_ROWS => Some(Self { row: self.row + 1, ..self }),
            D if self.row > 0 => Some(Self { row: self.row - 1, ..self }),
            L if self.col > 0 => Some(Self { col: self.col - 1, ..self }),
            R if (self.col as usize) + 1 < NUM_COLS => Some(Self { col: self.col + 1, ..self }),
            _ => None,
        }
    }

    /// Position in the flat row-major cell ordering
    pub fn cell_index(self) -> usize {
        self.row as usize * NUM_COLS + self.col as usize
    }

    pub fn from_cell_index(index: usize) -> Self {
        assert!(index < BOARD_SIZE, "cell index out of range: {index}");
        Self {
            row: (index / NUM_COLS) as u8,
            col: (index % NUM_COLS) as u8,
        }
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.row, self.col)
    }
}

#[test]
fn test_new_bounds() {
    assert!(GridPoint::new(4, 4).is_ok());
    assert!(matches!(
        GridPoint::new(5, 0),
        Err(Error::OutOfBounds { row: 5, col: 0 })
    ));
    assert!(matches!(
        GridPoint::new(0, 17),
        Err(Error::OutOfBounds { row: 0, col: 17 })
    ));
}

#[test]
fn test_translate() {
    let origin = GridPoint::ORIGIN;
    assert_eq!(origin.translate(U), Some(GridPoint::new(1, 0).unwrap()));
    assert_eq!(origin.translate(R), Some(GridPoint::new(0, 1).unwrap()));
    assert_eq!(origin.translate(D), None);
    assert_eq!(origin.translate(L), None);

    let top_right = GridPoint::new(4, 4).unwrap();
    assert_eq!(top_right.translate(U), None);
    assert_eq!(top_right.translate(R), None);
    assert_eq!(top_right.translate(D), Some(GridPoint::new(3, 4).unwrap()));
}

#[test]
fn test_cell_index_round_trip() {
    for index in 0..BOARD_SIZE {
        assert_eq!(GridPoint::from_cell_index(index).cell_index(), index);
    }
}
