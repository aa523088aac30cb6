use std::fmt;

use gc_core::Position;
use gc_grid::GridError;
use thiserror::Error;

/// Which actor a placement error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Ghost,
    Target,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Ghost  => f.write_str("ghost"),
            Actor::Target => f.write_str("target"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("{actor} position {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        actor:  Actor,
        pos:    Position,
        width:  usize,
        height: usize,
    },

    #[error("{actor} position {pos} is a wall")]
    Blocked { actor: Actor, pos: Position },
}

pub type SimResult<T> = Result<T, SimError>;
