use super::Game;
use crate::basic::GridPoint;
use crate::board::{Board, Cell};
use crate::fruit::spawn_fruit;
use crate::pool::SegmentPool;
use log::info;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("game builder error: {1} (builder: {0:?})")]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

/// Initial configuration: a size-1 snake at `origin` and one fruit, placed
/// randomly unless pinned (tests pin it to get deterministic setups).
#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub origin: Option<GridPoint>,
    pub fruit: Option<GridPoint>,
}

impl Builder {
    #[must_use]
    pub fn origin(mut self, value: GridPoint) -> Self {
        self.origin = Some(value);
        self
    }

    #[must_use]
    pub fn fruit(mut self, value: GridPoint) -> Self {
        self.fruit = Some(value);
        self
    }

    pub fn build(&self, rng: &mut impl Rng) -> Result<Game, BuilderError> {
        let origin = self.origin.unwrap_or(GridPoint::ORIGIN);

        let mut board = Board::new();
        let mut pool = SegmentPool::new();

        let head = pool.acquire().expect("fresh pool with no free slots");
        pool[head].pos = origin;
        board.set(origin, Cell::Snake);

        let fruit = match self.fruit {
            Some(pos) if pos == origin => {
                return Err(BuilderError(
                    Box::new(self.clone()),
                    "fruit placed on the snake",
                ));
            }
            Some(pos) => {
                board.set(pos, Cell::Fruit);
                pos
            }
            None => spawn_fruit(&mut board, rng),
        };

        info!("snake starts at {:?}, fruit at {:?}", origin, fruit);

        Ok(Game {
            board,
            pool,
            head,
            tail: head,
            size: 1,
            finished: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::BOARD_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_build() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = Builder::default().build(&mut rng).unwrap();

        assert_eq!(game.size(), 1);
        assert_eq!(game.head_pos(), GridPoint::ORIGIN);
        assert_eq!(game.board().get(GridPoint::ORIGIN), Cell::Snake);
        assert_eq!(game.board().count(Cell::Fruit), 1);
        assert_eq!(game.board().count_empty(), BOARD_SIZE - 2);
    }

    #[test]
    fn fruit_on_snake_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = Builder::default()
            .fruit(GridPoint::ORIGIN)
            .build(&mut rng);
        assert!(result.is_err());
    }
}
