//! adaptive-quiz — reference console driver for the quiz engine.

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use adaptive_quiz::quiz_engine::DEFAULT_TOTAL_PUZZLES;
use adaptive_quiz::DifficultyTier;

mod driver;

use driver::{Console, DriverOptions};

#[derive(Parser)]
#[command(name = "adaptive-quiz", version, about = "Adaptive arithmetic quiz")]
struct Cli {
    /// Player name (prompted for when omitted)
    #[arg(long)]
    name: Option<String>,

    /// Starting tier: Easy, Medium or Hard (prompted for when omitted)
    #[arg(long)]
    tier: Option<DifficultyTier>,

    /// Number of puzzles in the session
    #[arg(long, default_value_t = DEFAULT_TOTAL_PUZZLES)]
    rounds: usize,

    /// RNG seed for a reproducible puzzle sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON report after the summary
    #[arg(long)]
    json: bool,

    /// Explain each difficulty adjustment
    #[arg(long)]
    explain: bool,

    /// Log engine decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "adaptive_quiz=debug" } else { "adaptive_quiz=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = DriverOptions {
        name: cli.name,
        tier: cli.tier,
        rounds: cli.rounds,
        seed: cli.seed,
        json: cli.json,
        explain: cli.explain,
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    if let Err(e) = driver::run(&options, &mut console) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
