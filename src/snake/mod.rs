use crate::basic::{Dir, GridPoint};
use crate::board::{Board, Cell};
use crate::error::Result;
use crate::fruit::spawn_fruit;
use crate::pool::{SegmentId, SegmentPool};
use log::debug;
use rand::Rng;

pub use builder::{Builder, BuilderError};

pub mod builder;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StepOutcome {
    /// Head moved into an empty cell, tail followed
    Continued,
    /// Fruit eaten, the chain grew by one
    Grew,
    /// The snake now fills the whole board
    Won,
    /// Off-grid move or self-collision
    GameOver,
}

impl StepOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::GameOver)
    }
}

/// The simulation state proper: board, segment pool and the chain ends.
/// Mutated exclusively by [`Game::step`], one move per tick.
pub struct Game {
    board: Board,
    pool: SegmentPool,
    head: SegmentId,
    tail: SegmentId,
    size: usize,
    finished: bool,
}

impl Game {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn head_pos(&self) -> GridPoint {
        self.pool[self.head].pos
    }

    /// Apply one directional move. Terminal outcomes are values, not errors;
    /// the only `Err` here is pool exhaustion, which means an invariant was
    /// already broken.
    ///
    /// A 180° turn is not rejected up front: at size >= 2 the cell behind the
    /// head holds the second segment and the self-collision check ends the
    /// game, at size 1 reversing is a legal move.
    pub fn step(&mut self, dir: Dir, rng: &mut impl Rng) -> Result<StepOutcome> {
        assert!(!self.finished, "called step() on a finished game");

        let candidate = match self.head_pos().translate(dir) {
            Some(pos) => pos,
            None => {
                debug!("snake hit the wall going {:?} from {:?}", dir, self.head_pos());
                self.finished = true;
                return Ok(StepOutcome::GameOver);
            }
        };

        let grow = match self.board.get(candidate) {
            Cell::Snake => {
                debug!("snake ran into itself at {:?}", candidate);
                self.finished = true;
                return Ok(StepOutcome::GameOver);
            }
            Cell::Fruit => true,
            Cell::Empty => false,
        };

        // new head in front, old head pushed toward the tail
        let new_head = self.pool.acquire()?;
        self.pool[new_head].pos = candidate;
        self.pool[new_head].next = Some(self.head);
        self.pool[self.head].prev = Some(new_head);
        self.head = new_head;
        self.board.set(candidate, Cell::Snake);

        if grow {
            self.size += 1;
            if self.board.count_empty() == 0 {
                // nowhere left for fruit
                self.finished = true;
                return Ok(StepOutcome::Won);
            }
            let fruit = spawn_fruit(&mut self.board, rng);
            debug!("fruit eaten at {:?}, next fruit at {:?}", candidate, fruit);
            Ok(StepOutcome::Grew)
        } else {
            let tail = self.tail;
            self.board.set(self.pool[tail].pos, Cell::Empty);
            let new_tail = self.pool[tail]
                .prev
                .expect("chain shorter than two segments after head push");
            self.pool[new_tail].next = None;
            self.tail = new_tail;
            self.pool.release(tail);
            Ok(StepOutcome::Continued)
        }
    }

    #[cfg(test)]
    fn free_count(&self) -> usize {
        self.pool.free_count()
    }

    /// Chain coordinates from head to tail
    #[cfg(test)]
    fn chain_positions(&self) -> Vec<GridPoint> {
        let mut out = Vec::with_capacity(self.size);
        let mut cursor = Some(self.head);
        while let Some(id) = cursor {
            out.push(self.pool[id].pos);
            cursor = self.pool[id].next;
        }
        out
    }

    /// Chain built directly from coordinates, head first. Test-only shortcut
    /// around having to eat fruit to reach a given configuration.
    #[cfg(test)]
    fn from_cells(chain: &[(usize, usize)], fruit: Option<(usize, usize)>) -> Self {
        assert!(!chain.is_empty());
        let mut board = Board::new();
        let mut pool = SegmentPool::new();
        let mut ids = Vec::new();
        for &(row, col) in chain {
            let id = pool.acquire().unwrap();
            pool[id].pos = GridPoint::new(row, col).unwrap();
            board.set(pool[id].pos, Cell::Snake);
            ids.push(id);
        }
        for pair in ids.windows(2) {
            pool[pair[0]].next = Some(pair[1]);
            pool[pair[1]].prev = Some(pair[0]);
        }
        if let Some((row, col)) = fruit {
            board.set(GridPoint::new(row, col).unwrap(), Cell::Fruit);
        }
        Self {
            board,
            pool,
            head: ids[0],
            tail: *ids.last().unwrap(),
            size: chain.len(),
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Dir::*;
    use crate::basic::BOARD_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn snake_cells(board: &Board) -> Vec<GridPoint> {
        (0..BOARD_SIZE)
            .map(GridPoint::from_cell_index)
            .filter(|&p| board.get(p) == Cell::Snake)
            .collect()
    }

    #[test]
    fn move_into_empty() {
        // size-1 snake at the origin, fruit pinned far away
        let mut game = Game::from_cells(&[(0, 0)], Some((4, 4)));
        let outcome = game.step(U, &mut rng()).unwrap();

        assert_eq!(outcome, StepOutcome::Continued);
        assert_eq!(game.size(), 1);
        assert_eq!(game.head_pos(), GridPoint::new(1, 0).unwrap());
        assert_eq!(game.board.get(GridPoint::ORIGIN), Cell::Empty);
        assert_eq!(game.board.get(game.head_pos()), Cell::Snake);
        assert_eq!(game.free_count(), BOARD_SIZE - 1);
    }

    #[test]
    fn move_into_fruit() {
        let mut game = Game::from_cells(&[(0, 0)], Some((1, 0)));
        let free_before = game.free_count();
        let outcome = game.step(U, &mut rng()).unwrap();

        assert_eq!(outcome, StepOutcome::Grew);
        assert_eq!(game.size(), 2);
        assert_eq!(game.free_count(), free_before - 1);
        assert_eq!(game.head_pos(), GridPoint::new(1, 0).unwrap());
        // old head stays on the board
        assert_eq!(game.board.get(GridPoint::ORIGIN), Cell::Snake);
        // exactly one replacement fruit, somewhere else
        assert_eq!(game.board.count(Cell::Fruit), 1);
        assert_eq!(game.board.get(GridPoint::new(1, 0).unwrap()), Cell::Snake);
    }

    #[test]
    fn reverse_into_body_is_game_over() {
        // head at (1, 0), second segment at (0, 0), going back down
        let mut game = Game::from_cells(&[(1, 0), (0, 0)], Some((4, 4)));
        let board_before = game.board.clone();
        let free_before = game.free_count();

        let outcome = game.step(D, &mut rng()).unwrap();

        assert_eq!(outcome, StepOutcome::GameOver);
        assert_eq!(game.board, board_before);
        assert_eq!(game.free_count(), free_before);
    }

    #[test]
    fn reverse_at_size_one_is_legal() {
        let mut game = Game::from_cells(&[(2, 2)], Some((4, 4)));
        assert_eq!(game.step(U, &mut rng()).unwrap(), StepOutcome::Continued);
        assert_eq!(game.step(D, &mut rng()).unwrap(), StepOutcome::Continued);
        assert_eq!(game.head_pos(), GridPoint::new(2, 2).unwrap());
    }

    #[test]
    fn off_grid_is_game_over() {
        let mut game = Game::from_cells(&[(0, 0)], Some((4, 4)));
        let board_before = game.board.clone();

        let outcome = game.step(D, &mut rng()).unwrap();

        assert_eq!(outcome, StepOutcome::GameOver);
        assert_eq!(game.board, board_before);
        assert_eq!(game.free_count(), BOARD_SIZE - 1);
    }

    #[test]
    #[should_panic(expected = "called step() on a finished game")]
    fn step_after_game_over_panics() {
        let mut game = Game::from_cells(&[(0, 0)], Some((4, 4)));
        game.step(D, &mut rng()).unwrap();
        let _ = game.step(U, &mut rng());
    }

    #[test]
    fn filling_the_board_wins() {
        // boustrophedon chain covering everything except (4, 4), which holds
        // the fruit; head at (4, 3) moving right
        let mut chain = Vec::new();
        for row in 0..5 {
            if row % 2 == 0 {
                for col in 0..5 {
                    chain.push((row, col));
                }
            } else {
                for col in (0..5).rev() {
                    chain.push((row, col));
                }
            }
        }
        // the sweep runs tail-to-head, from_cells wants the head first
        chain.reverse();
        assert_eq!(chain[0], (4, 4));
        chain.remove(0); // head is now (4, 3), fruit goes at (4, 4)

        let mut game = Game::from_cells(&chain, Some((4, 4)));
        assert_eq!(game.size(), BOARD_SIZE - 1);

        let outcome = game.step(R, &mut rng()).unwrap();
        assert_eq!(outcome, StepOutcome::Won);
        assert_eq!(game.size(), BOARD_SIZE);
        assert_eq!(game.board.count_empty(), 0);
        assert_eq!(game.board.count(Cell::Fruit), 0);
        assert_eq!(game.free_count(), 0);
    }

    #[test]
    fn invariants_hold_over_random_play() {
        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Builder::default().build(&mut rng).unwrap();

            loop {
                let outcome = game.step(Dir::random(&mut rng), &mut rng).unwrap();

                // pool partition: chain + free list account for every slot
                let chain = game.chain_positions();
                assert_eq!(chain.len(), game.size());
                assert_eq!(chain.len() + game.free_count(), BOARD_SIZE);

                // Snake cells on the board are exactly the chain coordinates
                let mut sorted = chain.clone();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), chain.len(), "duplicate chain coordinate");
                assert_eq!(sorted, snake_cells(&game.board));

                match outcome {
                    StepOutcome::GameOver => break,
                    StepOutcome::Won => {
                        assert_eq!(game.board.count(Cell::Fruit), 0);
                        break;
                    }
                    _ => assert_eq!(game.board.count(Cell::Fruit), 1),
                }
            }
        }
    }
}
