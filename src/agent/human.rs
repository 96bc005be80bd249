use std::io::{self, BufRead, Write};

use crate::agent::{Agent, Tally};
use crate::board::Board;
use crate::engine::generate::generate_moves;
use crate::types::{Move, Side};

/// Interactive player: lists the legal moves with indices and blocks on
/// stdin for a selection (`-1` concedes). Invalid input reprompts without
/// side effects; the prompt loop never errors to its caller, and EOF on
/// stdin is treated as a concession.
#[derive(Debug, Default)]
pub struct HumanAgent {
    side: Option<Side>,
    tally: Tally,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent for HumanAgent {
    fn initialize(&mut self, side: Side, _depth: u8) {
        self.side = Some(side);
    }

    fn decide(&mut self, board: &Board) -> Option<Move> {
        let side = self.side?;
        let moves = generate_moves(board, side);
        if moves.is_empty() {
            println!("You must concede");
            return None;
        }

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            println!("Possible moves:");
            for (i, mv) in moves.iter().enumerate() {
                println!("  {i}: {mv}");
            }
            print!(
                "Enter index of chosen move (0-{}) or -1 to concede: ",
                moves.len() - 1
            );
            let _ = io::stdout().flush();

            let Some(Ok(line)) = lines.next() else {
                // stdin closed
                return None;
            };
            match line.trim().parse::<i64>() {
                Ok(-1) => return None,
                Ok(i) if (0..moves.len() as i64).contains(&i) => {
                    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                    let mv = moves[i as usize];
                    println!("playing {mv}");
                    return Some(mv);
                }
                _ => println!("Invalid choice, try again."),
            }
        }
    }

    fn name(&self) -> &'static str {
        "human"
    }

    fn tally(&self) -> Tally {
        self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}
