use serde::Serialize;

use crate::board::Board;
use crate::types::{Move, Side};

pub mod alphabeta;
pub mod greedy;
pub mod human;
pub mod minimax;
pub mod random;

pub use alphabeta::AlphaBetaAgent;
pub use greedy::GreedyAgent;
pub use human::HumanAgent;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

/// Per-instance win/loss record, accumulated by the match runner and
/// reset independently of the agent's side/depth configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

/// Common contract for every player variant.
///
/// An agent is created once, configured via [`initialize`](Agent::initialize),
/// and reused across many games. `decide` returning `None` is a concession.
pub trait Agent {
    /// Configure the side the agent plays and its search depth limit
    /// (ignored by non-searching agents).
    fn initialize(&mut self, side: Side, depth: u8);

    /// Choose a move for the current position, or concede with `None`.
    fn decide(&mut self, board: &Board) -> Option<Move>;

    fn name(&self) -> &'static str;

    fn tally(&self) -> Tally;
    fn tally_mut(&mut self) -> &mut Tally;

    fn record_win(&mut self) {
        self.tally_mut().wins += 1;
    }

    fn record_loss(&mut self) {
        self.tally_mut().losses += 1;
    }

    fn reset_tally(&mut self) {
        *self.tally_mut() = Tally::default();
    }
}
