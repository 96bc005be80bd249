use crate::board::Board;
use crate::engine::generate::generate_moves;
use crate::types::Side;

/// Utility of a won terminal position, from the root side's perspective.
pub const WIN: f32 = 1.0;
/// Utility of a lost terminal position.
pub const LOSE: f32 = -1.0;

/// Mobility heuristic for depth-cutoff evaluation, in [-1, 1]:
/// `(WIN * own + LOSE * opp) / (own + opp)` over legal-move counts.
///
/// The denominator is nonzero on every position the search evaluates:
/// a cutoff only happens on non-terminal positions, where the side to
/// move (one of the two counted here) has at least one move.
#[inline]
pub fn mobility(board: &Board, side: Side) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let own = generate_moves(board, side).len() as f32;
    #[allow(clippy::cast_precision_loss)]
    let opp = generate_moves(board, side.other()).len() as f32;
    (WIN * own + LOSE * opp) / (own + opp)
}
