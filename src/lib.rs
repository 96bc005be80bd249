#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod board;
pub mod error;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod generate;
    pub mod score;
}

pub mod solver;
pub mod agent;
pub mod runner;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::engine::apply::next_board;
pub use crate::engine::generate::generate_moves;
pub use crate::engine::score::{mobility, LOSE, WIN};
pub use crate::error::IllegalMove;
pub use crate::rng::rng_for_agent;
pub use crate::types::{Dir, Move, Side};
