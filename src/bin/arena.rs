use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use konane::agent::{Agent, AlphaBetaAgent, GreedyAgent, MinimaxAgent, RandomAgent};
use konane::runner::{run_series, sweep};
use konane::types::Side;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AgentKind {
    Greedy,
    Random,
    Minimax,
    Alphabeta,
}

fn build_agent(kind: AgentKind, seed: u64, slot: u64) -> Box<dyn Agent> {
    match kind {
        AgentKind::Greedy => Box::new(GreedyAgent::new()),
        AgentKind::Random => Box::new(RandomAgent::new(seed, slot)),
        AgentKind::Minimax => Box::new(MinimaxAgent::new(seed, slot)),
        AgentKind::Alphabeta => Box::new(AlphaBetaAgent::new(seed, slot)),
    }
}

#[derive(Debug, Parser)]
#[command(name = "arena", about = "Konane batch match runner and statistics harness")]
struct Args {
    /// Board size (N for an NxN board)
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(3..=26))]
    size: u8,

    /// Games per series
    #[arg(long, default_value_t = 20)]
    games: u32,

    /// Agent playing first (B)
    #[arg(long, value_enum, default_value_t = AgentKind::Alphabeta)]
    first: AgentKind,

    /// Agent playing second (W)
    #[arg(long, value_enum, default_value_t = AgentKind::Alphabeta)]
    second: AgentKind,

    /// Search depth for the first agent
    #[arg(long, default_value_t = 4)]
    depth_first: u8,

    /// Search depth for the second agent
    #[arg(long, default_value_t = 1)]
    depth_second: u8,

    /// Seed for all randomized behavior (replayable batches)
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,

    /// Print boards and moves as games run (disables the progress bar)
    #[arg(long)]
    show: bool,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Run a (size x depth) sweep with the `--first` agent on both sides
    #[arg(long)]
    sweep: bool,

    #[arg(long, default_value_t = 4)]
    min_size: u8,

    #[arg(long, default_value_t = 8)]
    max_size: u8,

    #[arg(long, default_value_t = 1)]
    min_depth: u8,

    #[arg(long, default_value_t = 3)]
    max_depth: u8,
}

fn progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] games {bar:40.cyan/blue} {pos}/{len}")
            .unwrap()
            .progress_chars("=>-"),
    );
    pb
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.sweep {
        let sizes = args.min_size..=args.max_size;
        let depths = args.min_depth..=args.max_depth;
        let cells = (sizes.clone().count() * depths.clone().count()) as u64;
        let pb = progress_bar(cells * u64::from(args.games));

        let mut slot = 0u64;
        let entries = sweep(
            sizes,
            depths,
            args.games,
            || {
                slot += 2;
                (
                    build_agent(args.first, args.seed, slot),
                    build_agent(args.first, args.seed, slot + 1),
                )
            },
            Some(&pb),
        );
        pb.finish_and_clear();

        if args.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            println!("[arena] sweep: {} agent vs itself, {} games per cell", format!("{:?}", args.first).to_lowercase(), args.games);
            for e in &entries {
                println!(
                    "[arena] size {:2} depth {} | {:.4} s/game | first wins {:.0}%",
                    e.size,
                    e.depth,
                    e.report.secs_per_game,
                    e.report.first_win_rate * 100.0
                );
            }
        }
        return Ok(());
    }

    let mut first = build_agent(args.first, args.seed, 1);
    let mut second = build_agent(args.second, args.seed, 2);
    first.initialize(Side::First, args.depth_first);
    second.initialize(Side::Second, args.depth_second);

    let pb = if args.show {
        None
    } else {
        Some(progress_bar(u64::from(args.games)))
    };
    let report = run_series(
        args.size,
        args.games,
        &mut *first,
        &mut *second,
        args.show,
        pb.as_ref(),
    );
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "[arena] {} (depth {}) vs {} (depth {}) on {size}x{size} board",
            first.name(),
            args.depth_first,
            second.name(),
            args.depth_second,
            size = args.size,
        );
        println!(
            "[arena] {} games | {:.4} s/game | {} wins {}/{} ({:.0}%)",
            report.games,
            report.secs_per_game,
            first.name(),
            first.tally().wins,
            report.games,
            report.first_win_rate * 100.0
        );
    }
    Ok(())
}
