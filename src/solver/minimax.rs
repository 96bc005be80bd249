use crate::board::Board;
use crate::engine::apply::next_board;
use crate::engine::generate::generate_moves;
use crate::engine::score::mobility;
use crate::solver::{terminal_value, SearchOutcome, TieBreak};
use crate::types::{Move, Side};

/// Depth-limited minimax from `root`'s perspective.
///
/// The root is always a maximizing node for `root`; levels alternate from
/// there. Terminal positions (side to move has no legal move) score
/// WIN/LOSE regardless of remaining depth; non-terminal positions at the
/// depth limit score by the mobility heuristic.
pub fn search_root(
    board: &Board,
    root: Side,
    depth_limit: u8,
    tie: &mut dyn TieBreak,
) -> SearchOutcome {
    let mut nodes = 0u64;
    let (value, best) = max_value(board, root, root, 0, depth_limit, tie, &mut nodes);
    SearchOutcome { value, best, nodes }
}

#[allow(clippy::too_many_arguments)]
fn max_value(
    board: &Board,
    to_move: Side,
    root: Side,
    depth: u8,
    limit: u8,
    tie: &mut dyn TieBreak,
    nodes: &mut u64,
) -> (f32, Option<Move>) {
    *nodes += 1;
    let moves = generate_moves(board, to_move);
    if moves.is_empty() {
        return (terminal_value(to_move, root), None);
    }
    if depth == limit {
        return (mobility(board, root), None);
    }

    let mut v = f32::NEG_INFINITY;
    let mut best = None;
    for mv in moves {
        // Generated moves always apply to the board they came from.
        let Ok(child) = next_board(board, to_move, mv) else {
            continue;
        };
        let (cv, _) = min_value(&child, to_move.other(), root, depth + 1, limit, tie, nodes);
        if cv > v {
            v = cv;
            best = Some(mv);
        } else if cv == v && tie.replace_on_tie() {
            best = Some(mv);
        }
    }
    (v, best)
}

#[allow(clippy::too_many_arguments)]
fn min_value(
    board: &Board,
    to_move: Side,
    root: Side,
    depth: u8,
    limit: u8,
    tie: &mut dyn TieBreak,
    nodes: &mut u64,
) -> (f32, Option<Move>) {
    *nodes += 1;
    let moves = generate_moves(board, to_move);
    if moves.is_empty() {
        return (terminal_value(to_move, root), None);
    }
    if depth == limit {
        return (mobility(board, root), None);
    }

    let mut v = f32::INFINITY;
    let mut best = None;
    for mv in moves {
        let Ok(child) = next_board(board, to_move, mv) else {
            continue;
        };
        let (cv, _) = max_value(&child, to_move.other(), root, depth + 1, limit, tie, nodes);
        if cv < v {
            v = cv;
            best = Some(mv);
        } else if cv == v && tie.replace_on_tie() {
            best = Some(mv);
        }
    }
    (v, best)
}
