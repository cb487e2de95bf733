//! Binary target for the polling-place simulation.
//!
//! Simulates every precinct in a precincts file for one day and prints a
//! summary per precinct. With `--target-wait-time` it instead searches for
//! the share of split-ticket voters that pushes the median average wait
//! above the target.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use pollbooth::{
    find_percent_split_ticket, Experiment, Precinct, PrecinctSummary, PrecinctsFile, SimulationError,
    SimulationResult, SplitTicketReport, VoterTable,
};

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Simulate voters waiting at polling places")]
struct Args {
    /// Precincts JSON file.
    precincts_file: PathBuf,

    /// Find the share of split-ticket voters that exceeds this average wait.
    #[arg(long)]
    target_wait_time: Option<f64>,

    /// Print every voter instead of a summary.
    #[arg(long)]
    print_voters: bool,

    /// Run `--trials` trials per precinct and report the median average wait.
    #[arg(long, conflicts_with = "print_voters")]
    experiment: bool,

    /// Only simulate the precinct with this name.
    #[arg(long)]
    precinct: Option<String>,

    /// Trials per voter mix for `--target-wait-time` and `--experiment`.
    #[arg(long, default_value_t = 20)]
    trials: usize,

    /// Log simulation progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = run(&args) {
        eprintln!("ERROR: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> SimulationResult<()> {
    let file = PrecinctsFile::load(&args.precincts_file)?;
    let precincts = file.select(args.precinct.as_deref())?;

    match args.target_wait_time {
        Some(target_wait_time) => {
            let precinct = precincts.first().ok_or_else(|| {
                SimulationError::InvalidConfiguration("precincts file is empty".to_string())
            })?;
            let outcome =
                find_percent_split_ticket(precinct, target_wait_time, args.trials, file.seed)?;
            print!(
                "{}",
                SplitTicketReport::new(&precinct.name, target_wait_time, outcome)
            );
        }
        None if args.experiment => {
            for config in precincts {
                let report = Experiment::new(config)
                    .set_iterations(args.trials)
                    .set_seed(file.seed)
                    .run()?;
                println!("{report}");
            }
        }
        None => {
            println!();
            for config in precincts {
                let voters = Precinct::from_config(config)?.simulate(
                    config.percent_straight_ticket,
                    config.straight_ticket_duration,
                    file.seed,
                )?;
                if args.print_voters {
                    println!("PRECINCT '{}'", config.name);
                    print!("{}", VoterTable(&voters));
                } else {
                    print!(
                        "{}",
                        PrecinctSummary::new(&config.name, config.closing_time(), &voters)
                    );
                }
                println!();
            }
        }
    }
    Ok(())
}
