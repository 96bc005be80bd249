use crate::agent::{Agent, Tally};
use crate::board::Board;
use crate::engine::generate::generate_moves;
use crate::types::{Move, Side};

/// Plays the first generated move. Deterministic baseline opponent.
#[derive(Debug, Default)]
pub struct GreedyAgent {
    side: Option<Side>,
    tally: Tally,
}

impl GreedyAgent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent for GreedyAgent {
    fn initialize(&mut self, side: Side, _depth: u8) {
        self.side = Some(side);
    }

    fn decide(&mut self, board: &Board) -> Option<Move> {
        let side = self.side?;
        generate_moves(board, side).into_iter().next()
    }

    fn name(&self) -> &'static str {
        "greedy"
    }

    fn tally(&self) -> Tally {
        self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}
