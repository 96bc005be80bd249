use rand::Rng;

use crate::types::{Move, Side};

pub mod alphabeta;
pub mod minimax;

/// Tie-break policy for equally valued sibling moves. Injected into the
/// searches so tests can make them reproducible.
pub trait TieBreak {
    /// True to replace the incumbent best move with the challenger.
    fn replace_on_tie(&mut self) -> bool;
}

/// Unbiased coin flip: on a tie, keep or replace with probability 1/2.
/// Tied branches are therefore not repeatable across differently seeded runs.
pub struct CoinFlip<R: Rng> {
    rng: R,
}

impl<R: Rng> CoinFlip<R> {
    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TieBreak for CoinFlip<R> {
    #[inline]
    fn replace_on_tie(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Deterministic policy: the first move reaching a value keeps it.
/// Under this policy minimax and alpha-beta agree move-for-move.
pub struct AlwaysFirst;

impl TieBreak for AlwaysFirst {
    #[inline]
    fn replace_on_tie(&mut self) -> bool {
        false
    }
}

/// Result of a root search.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Root value from the searching side's perspective, in [-1, 1].
    pub value: f32,
    /// Move to play; `None` means the root position is already lost
    /// (no legal move) and the agent must concede.
    pub best: Option<Move>,
    /// Recursive node entries, for comparing search effort.
    pub nodes: u64,
}

/// Utility of a terminal position (side to move has no legal move), from
/// the root side's perspective.
#[inline]
pub(crate) fn terminal_value(to_move: Side, root: Side) -> f32 {
    if to_move == root {
        crate::engine::score::LOSE
    } else {
        crate::engine::score::WIN
    }
}
