use crate::snake::BuilderError;
use std::{io, result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Coordinates outside the board, reachable only through a caller bug,
    /// never through normal play
    #[error("coordinates out of bounds: ({row}, {col})")]
    OutOfBounds { row: usize, col: usize },

    /// The free list ran dry, which means a pool invariant was violated
    /// somewhere else; never retried
    #[error("segment pool exhausted")]
    PoolExhausted,

    #[error(transparent)]
    Builder(#[from] BuilderError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T = ()> = result::Result<T, Error>;
