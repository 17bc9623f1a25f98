use crate::basic::{GridPoint, NUM_COLS, NUM_ROWS};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Snake,
    Fruit,
}

/// The single source of truth for cell occupancy. Bounds checking happens
/// when a [`GridPoint`] is constructed, so indexing can't go wrong here.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board([[Cell; NUM_COLS]; NUM_ROWS]);

impl Board {
    pub fn new() -> Self {
        Self([[Cell::Empty; NUM_COLS]; NUM_ROWS])
    }

    pub fn get(&self, pos: GridPoint) -> Cell {
        self.0[pos.row()][pos.col()]
    }

    pub fn set(&mut self, pos: GridPoint, cell: Cell) {
        self.0[pos.row()][pos.col()] = cell;
    }

    pub fn count_empty(&self) -> usize {
        self.count(Cell::Empty)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.0.iter().flatten().filter(|&&c| c == cell).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_starts_empty() {
    let board = Board::new();
    assert_eq!(board.count_empty(), crate::basic::BOARD_SIZE);
}

#[test]
fn test_set_get() {
    let mut board = Board::new();
    let pos = GridPoint::new(2, 3).unwrap();
    assert_eq!(board.get(pos), Cell::Empty);

    board.set(pos, Cell::Fruit);
    assert_eq!(board.get(pos), Cell::Fruit);
    assert_eq!(board.count(Cell::Fruit), 1);
    assert_eq!(board.count_empty(), crate::basic::BOARD_SIZE - 1);

    board.set(pos, Cell::Snake);
    assert_eq!(board.get(pos), Cell::Snake);
    assert_eq!(board.count(Cell::Fruit), 0);
}
