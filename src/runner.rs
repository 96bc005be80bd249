use std::ops::RangeInclusive;
use std::time::Instant;

use indicatif::ProgressBar;
use serde::Serialize;

use crate::agent::Agent;
use crate::board::Board;
use crate::engine::apply::next_board;
use crate::types::Side;

/// One agent's half-turn. Returns the winner once the game has ended:
/// a `None` decision is a concession, and an illegal externally supplied
/// move is caught here and loses the game for the offender on the spot.
fn take_turn(board: &mut Board, side: Side, agent: &mut dyn Agent, show: bool) -> Option<Side> {
    if show {
        println!("{board}");
        println!("player {} ({}) to move", side.symbol(), agent.name());
    }
    let Some(mv) = agent.decide(board) else {
        if show {
            println!("{} concedes", agent.name());
        }
        return Some(side.other());
    };
    match next_board(board, side, mv) {
        Ok(nb) => {
            *board = nb;
            if show {
                println!("{} plays {mv}", agent.name());
            }
            None
        }
        Err(e) => {
            eprintln!("illegal move {mv} by {}: {e}", agent.name());
            Some(side.other())
        }
    }
}

/// Play a single game on a fresh board, `first` moving first.
/// Returns the winning side.
pub fn play_one_game(
    size: u8,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    show: bool,
) -> Side {
    let mut board = Board::new(size);
    loop {
        if let Some(winner) = take_turn(&mut board, Side::First, first, show) {
            return winner;
        }
        if let Some(winner) = take_turn(&mut board, Side::Second, second, show) {
            return winner;
        }
    }
}

/// Play `games` games, accumulating each agent's tally. `progress` is
/// ticked once per game when present.
pub fn play_series(
    size: u8,
    games: u32,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    show: bool,
    progress: Option<&ProgressBar>,
) {
    for _ in 0..games {
        match play_one_game(size, first, second, show) {
            Side::First => {
                first.record_win();
                second.record_loss();
            }
            Side::Second => {
                first.record_loss();
                second.record_win();
            }
        }
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
}

/// Aggregate outcome of a timed series.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeriesReport {
    pub games: u32,
    pub secs_per_game: f64,
    pub first_win_rate: f64,
}

/// Timed batch: resets both tallies, plays `games` games and reports
/// elapsed time per game and the first agent's win rate.
pub fn run_series(
    size: u8,
    games: u32,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    show: bool,
    progress: Option<&ProgressBar>,
) -> SeriesReport {
    first.reset_tally();
    second.reset_tally();
    let start = Instant::now();
    play_series(size, games, first, second, show, progress);
    let elapsed = start.elapsed().as_secs_f64();
    SeriesReport {
        games,
        secs_per_game: elapsed / f64::from(games.max(1)),
        first_win_rate: f64::from(first.tally().wins) / f64::from(games.max(1)),
    }
}

/// One cell of a parameter sweep.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepEntry {
    pub size: u8,
    pub depth: u8,
    #[serde(flatten)]
    pub report: SeriesReport,
}

/// Grid of timed series over board sizes and search depths. `build` makes
/// a fresh pair of agents per cell; the runner initializes them as
/// First/Second with the cell's depth.
pub fn sweep<F>(
    sizes: RangeInclusive<u8>,
    depths: RangeInclusive<u8>,
    games: u32,
    mut build: F,
    progress: Option<&ProgressBar>,
) -> Vec<SweepEntry>
where
    F: FnMut() -> (Box<dyn Agent>, Box<dyn Agent>),
{
    let mut entries = Vec::new();
    for size in sizes {
        for depth in depths.clone() {
            let (mut first, mut second) = build();
            first.initialize(Side::First, depth);
            second.initialize(Side::Second, depth);
            let report = run_series(size, games, &mut *first, &mut *second, false, progress);
            entries.push(SweepEntry { size, depth, report });
        }
    }
    entries
}
