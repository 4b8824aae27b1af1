//! # sortbench
//!
//! Times the library sort, a comparator-driven sort and the in-place radix sort over the same
//! seeded input, printing `<strategy> <microseconds>` per trial.
//!
//! ```text
//! cargo run --release --bin sortbench -- 10000000
//! ```
//!
//! Exit status is 111 if `N` is missing or invalid, 255 if a sort leaves the array out of order
//! and 87 if the platform's `int` is not 32 bits wide.

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use log::{error, log_enabled, Level, LevelFilter};
use msd_radix::bench_harness::{check_environment, run, BenchConfig, Strategy};
use msd_radix::BenchError;
use std::process::ExitCode;

/// Benchmark comparison sorts against an in-place MSD radix sort.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of elements to sort
    n: usize,

    /// Seed for the pseudo-random fill
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Strategy to run; repeat to run several, in order. Defaults to all three
    #[arg(short, long, value_enum)]
    strategy: Vec<Strategy>,

    /// How many times to repeat the full set of trials
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// Log more; repeat for debug output. RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> BenchConfig {
        let strategies = if self.strategy.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.strategy.clone()
        };

        BenchConfig {
            size: self.n,
            seed: self.seed,
            rounds: self.rounds as usize,
            strategies,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn fail(e: BenchError) -> ExitCode {
    // Errors before argument parsing happen without a logger
    if log_enabled!(Level::Error) {
        error!("{}", e);
    } else {
        eprintln!("{}", e);
    }

    ExitCode::from(e.exit_code())
}

fn main() -> ExitCode {
    if let Err(e) = check_environment() {
        return fail(e);
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => return fail(BenchError::Argument(e.render().to_string())),
    };

    init_logging(args.verbose);

    match run(&args.config(), |report| println!("{}", report)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}
