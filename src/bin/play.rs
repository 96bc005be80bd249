use clap::{Parser, ValueEnum};

use konane::agent::{Agent, AlphaBetaAgent, GreedyAgent, HumanAgent, MinimaxAgent, RandomAgent};
use konane::runner::play_one_game;
use konane::types::Side;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpponentKind {
    Greedy,
    Random,
    Minimax,
    Alphabeta,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideOpt {
    First,
    Second,
}

#[derive(Debug, Parser)]
#[command(name = "play", about = "Play one interactive Konane game against an agent")]
struct Args {
    /// Board size (N for an NxN board)
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(3..=26))]
    size: u8,

    /// Opponent agent
    #[arg(long, value_enum, default_value_t = OpponentKind::Alphabeta)]
    opponent: OpponentKind,

    /// Opponent search depth
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Which side you play (first moves first)
    #[arg(long, value_enum, default_value_t = SideOpt::First)]
    side: SideOpt,

    /// Seed for the opponent's randomized behavior
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,
}

fn main() {
    let args = Args::parse();

    let mut human: Box<dyn Agent> = Box::new(HumanAgent::new());
    let mut machine: Box<dyn Agent> = match args.opponent {
        OpponentKind::Greedy => Box::new(GreedyAgent::new()),
        OpponentKind::Random => Box::new(RandomAgent::new(args.seed, 1)),
        OpponentKind::Minimax => Box::new(MinimaxAgent::new(args.seed, 1)),
        OpponentKind::Alphabeta => Box::new(AlphaBetaAgent::new(args.seed, 1)),
    };

    let (human_side, winner) = match args.side {
        SideOpt::First => {
            human.initialize(Side::First, 0);
            machine.initialize(Side::Second, args.depth);
            (
                Side::First,
                play_one_game(args.size, &mut *human, &mut *machine, true),
            )
        }
        SideOpt::Second => {
            machine.initialize(Side::First, args.depth);
            human.initialize(Side::Second, 0);
            (
                Side::Second,
                play_one_game(args.size, &mut *machine, &mut *human, true),
            )
        }
    };

    if winner == human_side {
        println!("You win!");
    } else {
        println!("{} wins.", machine.name());
    }
}
