use konane::agent::{Agent, GreedyAgent, RandomAgent, Tally};
use konane::runner::{play_one_game, play_series, run_series};
use konane::{Board, Move, Side};

/// Always concedes.
#[derive(Default)]
struct Conceder {
    tally: Tally,
}

impl Agent for Conceder {
    fn initialize(&mut self, _side: Side, _depth: u8) {}

    fn decide(&mut self, _board: &Board) -> Option<Move> {
        None
    }

    fn name(&self) -> &'static str {
        "conceder"
    }

    fn tally(&self) -> Tally {
        self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}

/// Always proposes the same externally supplied (and illegal) move.
#[derive(Default)]
struct BadMover {
    tally: Tally,
}

impl Agent for BadMover {
    fn initialize(&mut self, _side: Side, _depth: u8) {}

    fn decide(&mut self, _board: &Board) -> Option<Move> {
        // On a fresh board (0,2) is occupied, so the applier rejects this.
        Some(Move::new(0, 0, 0, 2))
    }

    fn name(&self) -> &'static str {
        "bad-mover"
    }

    fn tally(&self) -> Tally {
        self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}

fn greedy_pair() -> (GreedyAgent, GreedyAgent) {
    let mut first = GreedyAgent::new();
    let mut second = GreedyAgent::new();
    first.initialize(Side::First, 0);
    second.initialize(Side::Second, 0);
    (first, second)
}

#[test]
fn concession_loses_the_game() {
    let (mut first, _) = greedy_pair();
    let mut second = Conceder::default();
    second.initialize(Side::Second, 0);
    assert_eq!(play_one_game(6, &mut first, &mut second, false), Side::First);
}

#[test]
fn illegal_move_loses_the_game_immediately() {
    let mut first = BadMover::default();
    first.initialize(Side::First, 0);
    let (_, mut second) = greedy_pair();
    assert_eq!(play_one_game(4, &mut first, &mut second, false), Side::Second);
}

#[test]
fn greedy_self_play_finishes_and_fills_tallies() {
    let (mut first, mut second) = greedy_pair();
    play_series(6, 4, &mut first, &mut second, false, None);
    let (f, s) = (first.tally(), second.tally());
    assert_eq!(f.wins + f.losses, 4);
    assert_eq!(s.wins + s.losses, 4);
    assert_eq!(f.wins, s.losses);
    assert_eq!(f.losses, s.wins);
}

#[test]
fn run_series_resets_tallies_and_reports_rates() {
    let (mut first, mut second) = greedy_pair();
    // Pre-existing counts must not leak into the report.
    first.record_win();
    first.record_win();
    let report = run_series(6, 3, &mut first, &mut second, false, None);
    assert_eq!(report.games, 3);
    assert_eq!(first.tally().wins + first.tally().losses, 3);
    assert!((0.0..=1.0).contains(&report.first_win_rate));
    assert!(report.secs_per_game >= 0.0);
}

#[test]
fn seeded_random_series_replays_identically() {
    let run = || {
        let mut first = RandomAgent::new(99, 1);
        let mut second = RandomAgent::new(99, 2);
        first.initialize(Side::First, 0);
        second.initialize(Side::Second, 0);
        play_series(6, 5, &mut first, &mut second, false, None);
        (first.tally(), second.tally())
    };
    assert_eq!(run(), run());
}
