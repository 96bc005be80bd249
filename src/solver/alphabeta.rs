use crate::board::Board;
use crate::engine::apply::next_board;
use crate::engine::generate::generate_moves;
use crate::engine::score::mobility;
use crate::solver::{terminal_value, SearchOutcome, TieBreak};
use crate::types::{Move, Side};

/// Alpha-beta pruned search with the same value semantics as
/// [`minimax::search_root`](crate::solver::minimax::search_root).
///
/// An `[alpha, beta]` window threads through the recursion: a maximizing
/// node returns as soon as its value reaches beta, a minimizing node as
/// soon as it falls to alpha, and each tightens its own bound otherwise.
/// Under a fixed tie-break policy the root value equals minimax's while
/// visiting at most as many nodes.
pub fn search_root(
    board: &Board,
    root: Side,
    depth_limit: u8,
    tie: &mut dyn TieBreak,
) -> SearchOutcome {
    let mut nodes = 0u64;
    let (value, best) = max_value(
        board,
        root,
        root,
        0,
        depth_limit,
        f32::NEG_INFINITY,
        f32::INFINITY,
        tie,
        &mut nodes,
    );
    SearchOutcome { value, best, nodes }
}

#[allow(clippy::too_many_arguments)]
fn max_value(
    board: &Board,
    to_move: Side,
    root: Side,
    depth: u8,
    limit: u8,
    mut alpha: f32,
    beta: f32,
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
        let Ok(child) = next_board(board, to_move, mv) else {
            continue;
        };
        let (cv, _) = min_value(
            &child,
            to_move.other(),
            root,
            depth + 1,
            limit,
            alpha,
            beta,
            tie,
            nodes,
        );
        if cv > v {
            v = cv;
            best = Some(mv);
        } else if cv == v && tie.replace_on_tie() {
            best = Some(mv);
        }
        if v >= beta {
            return (v, best);
        }
        alpha = alpha.max(v);
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
    alpha: f32,
    mut beta: f32,
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
        let (cv, _) = max_value(
            &child,
            to_move.other(),
            root,
            depth + 1,
            limit,
            alpha,
            beta,
            tie,
            nodes,
        );
        if cv < v {
            v = cv;
            best = Some(mv);
        } else if cv == v && tie.replace_on_tie() {
            best = Some(mv);
        }
        if v <= alpha {
            return (v, best);
        }
        beta = beta.min(v);
    }
    (v, best)
}
