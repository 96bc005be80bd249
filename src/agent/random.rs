use rand::Rng;
use rand_pcg::Pcg64;

use crate::agent::{Agent, Tally};
use crate::board::Board;
use crate::engine::generate::generate_moves;
use crate::rng::rng_for_agent;
use crate::types::{Move, Side};

/// Plays a uniformly random legal move from a seeded PCG stream, so a
/// whole batch replays from one seed.
#[derive(Debug)]
pub struct RandomAgent {
    side: Option<Side>,
    tally: Tally,
    rng: Pcg64,
}

impl RandomAgent {
    pub fn new(seed: u64, slot: u64) -> Self {
        Self {
            side: None,
            tally: Tally::default(),
            rng: rng_for_agent(seed, slot),
        }
    }
}

impl Agent for RandomAgent {
    fn initialize(&mut self, side: Side, _depth: u8) {
        self.side = Some(side);
    }

    fn decide(&mut self, board: &Board) -> Option<Move> {
        let side = self.side?;
        let moves = generate_moves(board, side);
        if moves.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..moves.len());
        Some(moves[pick])
    }

    fn name(&self) -> &'static str {
        "random"
    }

    fn tally(&self) -> Tally {
        self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}
