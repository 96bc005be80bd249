use crate::board::Board;
use crate::types::{Dir, Move, Side};

/// All legal moves for `side` on `board`, in deterministic generation order.
///
/// During the opening phase (at most one empty cell) only the fixed
/// single-cell vacating moves are legal. Afterwards every chain of 2-cell
/// capture hops is enumerated, one candidate per valid prefix length.
/// An empty result means `side` has no legal move and must concede.
pub fn generate_moves(board: &Board, side: Side) -> Vec<Move> {
    if board.is_opening() {
        return match side {
            Side::First => first_moves(board),
            Side::Second => second_moves(board),
        };
    }

    let mut moves = Vec::new();
    for r in 0..board.size() {
        for c in 0..board.size() {
            if board.get(r, c) == Some(side) {
                for dir in Dir::all() {
                    push_chain_moves(board, side, r, c, dir, &mut moves);
                }
            }
        }
    }
    moves
}

/// First player's opening: vacate one of the two opposite corners or one
/// of the two central cells.
fn first_moves(board: &Board) -> Vec<Move> {
    let last = board.size() - 1;
    let half = board.size() / 2;
    vec![
        Move::vacate(0, 0),
        Move::vacate(last, last),
        Move::vacate(half, half),
        Move::vacate(half - 1, half - 1),
    ]
}

/// Second player's opening: vacate a cell orthogonally adjacent to the one
/// the first player emptied. A corner opening leaves 2 responses, a central
/// one leaves 4.
fn second_moves(board: &Board) -> Vec<Move> {
    let last = board.size() - 1;
    let half = board.size() / 2;
    if board.get(0, 0).is_none() {
        return vec![Move::vacate(0, 1), Move::vacate(1, 0)];
    }
    if board.get(last, last).is_none() {
        return vec![Move::vacate(last, last - 1), Move::vacate(last - 1, last)];
    }
    let pos = if board.get(half - 1, half - 1).is_none() {
        half - 1
    } else {
        half
    };
    vec![
        Move::vacate(pos, pos - 1),
        Move::vacate(pos + 1, pos),
        Move::vacate(pos, pos + 1),
        Move::vacate(pos - 1, pos),
    ]
}

/// Extend a capture chain from `(r, c)` along `dir`, emitting every valid
/// prefix as its own candidate. A hop at odd factor `f` is valid when the
/// cell `f` steps away holds the opponent and the cell `f + 1` steps away
/// is empty. The loop is bounded by the board edge through `contains`.
fn push_chain_moves(board: &Board, side: Side, r: u8, c: u8, dir: Dir, out: &mut Vec<Move>) {
    let (dr, dc) = dir.delta();
    let opp = side.other();
    let (r0, c0) = (i32::from(r), i32::from(c));
    let mut factor = 1i32;
    loop {
        let (mr, mc) = (r0 + factor * dr, c0 + factor * dc);
        let (lr, lc) = (r0 + (factor + 1) * dr, c0 + (factor + 1) * dc);
        if board.contains(mr, mc, Some(opp)) && board.contains(lr, lc, None) {
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            out.push(Move::new(r, c, lr as u8, lc as u8));
            factor += 2;
        } else {
            return;
        }
    }
}
