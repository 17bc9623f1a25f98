use crate::basic::{GridPoint, BOARD_SIZE};
use crate::board::{Board, Cell};
use rand::Rng;

/// Mark a uniformly random Empty cell as Fruit and return its position.
/// Rejection sampling over flat cell indices; the caller guarantees at least
/// one Empty cell exists (a full board is a terminal state, not a spawn).
pub fn spawn_fruit(board: &mut Board, rng: &mut impl Rng) -> GridPoint {
    debug_assert!(board.count_empty() > 0, "spawn_fruit on a full board");
    loop {
        let pos = GridPoint::from_cell_index(rng.gen_range(0..BOARD_SIZE));
        if board.get(pos) == Cell::Empty {
            board.set(pos, Cell::Fruit);
            return pos;
        }
    }
}

#[cfg(test)]
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_spawns_on_single_empty_cell() {
    // everything but (3, 1) is snake, sampling must land there eventually
    let mut board = Board::new();
    let hole = GridPoint::new(3, 1).unwrap();
    for index in 0..BOARD_SIZE {
        let pos = GridPoint::from_cell_index(index);
        if pos != hole {
            board.set(pos, Cell::Snake);
        }
    }

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(spawn_fruit(&mut board, &mut rng), hole);
    assert_eq!(board.get(hole), Cell::Fruit);
}

#[test]
fn test_changes_exactly_one_empty_cell() {
    for seed in 0..50 {
        let mut board = Board::new();
        board.set(GridPoint::ORIGIN, Cell::Snake);
        board.set(GridPoint::new(2, 2).unwrap(), Cell::Snake);

        let before = board.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        let pos = spawn_fruit(&mut board, &mut rng);

        assert_eq!(before.get(pos), Cell::Empty);
        assert_eq!(board.get(pos), Cell::Fruit);

        let changed = (0..BOARD_SIZE)
            .map(GridPoint::from_cell_index)
            .filter(|&p| before.get(p) != board.get(p))
            .count();
        assert_eq!(changed, 1);
    }
}
