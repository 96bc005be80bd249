use rand_pcg::Pcg64;

use crate::agent::{Agent, Tally};
use crate::board::Board;
use crate::rng::rng_for_agent;
use crate::solver::{minimax, CoinFlip};
use crate::types::{Move, Side};

/// Depth-limited minimax player. Ties between equally valued root moves
/// are broken by a coin flip drawn from the agent's own seeded stream.
#[derive(Debug)]
pub struct MinimaxAgent {
    side: Option<Side>,
    depth: u8,
    tally: Tally,
    rng: Pcg64,
}

impl MinimaxAgent {
    pub fn new(seed: u64, slot: u64) -> Self {
        Self {
            side: None,
            depth: 1,
            tally: Tally::default(),
            rng: rng_for_agent(seed, slot),
        }
    }
}

impl Agent for MinimaxAgent {
    fn initialize(&mut self, side: Side, depth: u8) {
        self.side = Some(side);
        self.depth = depth;
    }

    fn decide(&mut self, board: &Board) -> Option<Move> {
        let side = self.side?;
        let mut tie = CoinFlip::new(&mut self.rng);
        minimax::search_root(board, side, self.depth, &mut tie).best
    }

    fn name(&self) -> &'static str {
        "minimax"
    }

    fn tally(&self) -> Tally {
        self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}
