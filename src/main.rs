// Command line front end: prints the selected move for one position

use chess_simulator::{EngineResult, NegamaxPlayer, SearchConfig};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position in Forsyth-Edwards Notation
    fen: String,

    /// Time budget for the move in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    time_ms: u64,

    /// Stop iterative deepening after this depth
    #[arg(long)]
    max_depth: Option<u8>,

    /// Share of the time budget spent searching, in (0, 1]
    #[arg(long)]
    safety_fraction: Option<f64>,

    /// Abort the search after this many nodes
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Enable debug logging (per-depth search info)
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    match run(&args) {
        Ok(mv) => println!("{mv}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> EngineResult<String> {
    let mut config = SearchConfig::default().with_max_nodes(args.max_nodes);
    if let Some(max_depth) = args.max_depth {
        config = config.with_max_depth(max_depth);
    }
    if let Some(safety_fraction) = args.safety_fraction {
        config = config.with_safety_fraction(safety_fraction);
    }

    NegamaxPlayer::new(config).select_move(&args.fen, args.time_ms)
}
