use crate::board::Board;
use crate::error::IllegalMove;
use crate::types::{Move, Side};

/// Apply a move as a pure transform: returns a new board on success and
/// never mutates the input.
///
/// A degenerate move vacates its cell and is only legal during the opening
/// phase. A chain move walks the straight line from source to destination
/// in 2-cell hops; each hop must jump exactly one opposing stone onto an
/// empty cell. Every hop vacates the previous position and the captured
/// midpoint, so only the final landing square ends up occupied by the mover.
pub fn next_board(board: &Board, side: Side, mv: Move) -> Result<Board, IllegalMove> {
    for (r, c) in [(mv.r1, mv.c1), (mv.r2, mv.c2)] {
        if !board.in_bounds(i32::from(r), i32::from(c)) {
            return Err(IllegalMove::OutOfBounds {
                r: i32::from(r),
                c: i32::from(c),
            });
        }
    }
    if board.get(mv.r1, mv.c1) != Some(side) {
        return Err(IllegalMove::SourceNotOwned { r: mv.r1, c: mv.c1 });
    }

    let mut next = board.clone();

    let dist = mv.distance();
    if dist == 0 {
        if board.is_opening() {
            next.set(mv.r1, mv.c1, None);
            return Ok(next);
        }
        return Err(IllegalMove::NotOpeningPhase);
    }

    if board.get(mv.r2, mv.c2).is_some() {
        return Err(IllegalMove::DestinationOccupied { r: mv.r2, c: mv.c2 });
    }

    // For the axis-aligned moves the generator emits, (dr, dc) is a unit
    // step; the truncating division ties off `Move::distance`'s latent gap
    // for non-axis-aligned external input.
    let jumps = dist / 2;
    let dr = (i32::from(mv.r2) - i32::from(mv.r1)) / dist;
    let dc = (i32::from(mv.c2) - i32::from(mv.c1)) / dist;

    let (mut r, mut c) = (i32::from(mv.r1), i32::from(mv.c1));
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    for _ in 0..jumps {
        let (mr, mc) = (r + dr, c + dc);
        if !next.contains(mr, mc, Some(side.other())) {
            return Err(IllegalMove::MidpointNotOpponent {
                r: mr as u8,
                c: mc as u8,
            });
        }
        next.set(r as u8, c as u8, None);
        next.set(mr as u8, mc as u8, None);
        r += 2 * dr;
        c += 2 * dc;
        next.set(r as u8, c as u8, Some(side));
    }
    Ok(next)
}
