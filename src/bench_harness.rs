//! The timing harness behind `sortbench`.
//!
//! Each trial refills the same buffer from a seeded generator, so every strategy sees exactly the
//! same input, sorts it, checks the result is ascending and reports the elapsed wall-clock time.

use crate::error::BenchError;
use crate::sorts::{comparative_sort, comparator_sort, int_cmp, radix_sort};
use crate::tuning_parameters::DEFAULT_START_SHIFT;
use crate::utils::find_unsorted;
use log::{debug, info};
use nanorand::{Rng, WyRand};
use std::fmt;
use std::os::raw::c_int;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Eq, PartialEq, clap::ValueEnum)]
pub enum Strategy {
    /// The standard library's unstable sort
    Library,
    /// A comparison sort driven through an opaque comparator
    Comparator,
    /// In-place MSD radix sort
    Radix,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Library, Strategy::Comparator, Strategy::Radix];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Library => "library_sort",
            Strategy::Comparator => "comparator_sort",
            Strategy::Radix => "radix_sort",
        }
    }

    pub fn sort(self, array: &mut [i32]) {
        match self {
            Strategy::Library => comparative_sort(array),
            Strategy::Comparator => comparator_sort(array, &int_cmp),
            Strategy::Radix => {
                let len = array.len();
                radix_sort(array, 0, len, DEFAULT_START_SHIFT);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub size: usize,
    pub seed: u64,
    pub rounds: usize,
    pub strategies: Vec<Strategy>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: 0,
            seed: 1,
            rounds: 1,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TrialReport {
    pub strategy: Strategy,
    pub len: usize,
    pub elapsed: Duration,
}

impl fmt::Display for TrialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.strategy.name(), self.elapsed.as_micros())
    }
}

/// The keys are 32 bits wide; refuse to run where the platform's `int` is not.
pub fn check_environment() -> Result<(), BenchError> {
    let width = std::mem::size_of::<c_int>();
    if width != 4 {
        return Err(BenchError::Environment { width });
    }

    Ok(())
}

/// Fills `array` with non-negative 31-bit values. The same seed always produces the same values.
pub fn fill_seeded(array: &mut [i32], seed: u64) {
    let mut rng = WyRand::new_seed(seed);

    array
        .iter_mut()
        .for_each(|v| *v = (rng.generate::<u32>() >> 1) as i32);
}

pub fn verify_ascending(strategy: Strategy, array: &[i32]) -> Result<(), BenchError> {
    match find_unsorted(array) {
        Some(index) => Err(BenchError::Correctness {
            strategy: strategy.name(),
            index,
        }),
        None => Ok(()),
    }
}

pub fn run_trial(strategy: Strategy, array: &mut [i32], seed: u64) -> Result<TrialReport, BenchError> {
    fill_seeded(array, seed);

    let time = Instant::now();
    strategy.sort(array);
    let elapsed = time.elapsed();

    verify_ascending(strategy, array)?;

    debug!(
        "{} sorted {} elements in {:?}",
        strategy.name(),
        array.len(),
        elapsed
    );

    Ok(TrialReport {
        strategy,
        len: array.len(),
        elapsed,
    })
}

/// Runs every configured strategy once per round over one shared buffer, handing each report to
/// `on_report` as soon as its trial has been verified.
pub fn run<F>(config: &BenchConfig, mut on_report: F) -> Result<Vec<TrialReport>, BenchError>
where
    F: FnMut(&TrialReport),
{
    info!(
        "sorting {} elements, seed {}, {} round(s) of {:?}",
        config.size, config.seed, config.rounds, config.strategies
    );

    let mut array = vec![0i32; config.size];
    let mut reports = Vec::with_capacity(config.rounds * config.strategies.len());

    for _ in 0..config.rounds {
        for strategy in config.strategies.iter() {
            let report = run_trial(*strategy, &mut array, config.seed)?;
            on_report(&report);
            reports.push(report);
        }
    }

    Ok(reports)
}
