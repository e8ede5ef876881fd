//! Benchmark harness
//!
//! Runs the function under test `rounds` times between two reads of a
//! monotonic clock and reports the last result, the total elapsed time and the
//! mean time per call.
//!
//! Only the result of the final call is kept. The loop exists to generate
//! timing load; correctness of the function itself is checked separately.

use crate::clock::{Clock, MonotonicClock};
use crate::error::Result;
use crate::eval::{Evaluator, Strategy};
use log::debug;
use std::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::Duration;

/// Left operand of the reference run
pub const DEFAULT_A: i32 = 9;
/// Right operand of the reference run
pub const DEFAULT_B: i32 = 10;
/// Iteration count of the reference run
pub const DEFAULT_ROUNDS: u64 = 100_000;

/// Sentinel printed for the per-iteration average when no iterations ran
pub const AVERAGE_UNDEFINED: &str = "N/A";

/// Inputs of a single benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub a: i32,
    pub b: i32,
    pub rounds: u64,
    pub strategy: Strategy,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
            rounds: DEFAULT_ROUNDS,
            strategy: Strategy::Direct,
        }
    }
}

/// Outcome of a benchmark run
///
/// Durations are kept at full precision; rounding only happens in
/// [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchReport {
    /// Result of the last call, or 0 when no call was made
    pub result: i32,
    /// Time between the two clock reads
    pub elapsed: Duration,
    pub rounds: u64,
    pub strategy: Strategy,
}

impl BenchReport {
    /// Total elapsed time in milliseconds
    pub fn total_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Total elapsed time in nanoseconds
    pub fn total_ns(&self) -> f64 {
        self.elapsed.as_nanos() as f64
    }

    /// Mean nanoseconds per call, `None` when `rounds` is zero
    pub fn average_ns(&self) -> Option<f64> {
        (self.rounds > 0).then(|| self.total_ns() / self.rounds as f64)
    }

    /// Write the three report lines followed by a newline and flush
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Result: {}", self.result)?;
        writeln!(f, "Total time: {:.4} ms", self.total_ms())?;
        match self.average_ns() {
            Some(avg) => write!(f, "Average per iteration: {avg:.2} ns"),
            None => write!(f, "Average per iteration: {AVERAGE_UNDEFINED}"),
        }
    }
}

/// Run the benchmark against the system monotonic clock
pub fn run_benchmark(config: BenchConfig) -> Result<BenchReport> {
    run_benchmark_with_clock(config, &MonotonicClock)
}

/// Run the benchmark reading time from `clock`
pub fn run_benchmark_with_clock<C: Clock>(config: BenchConfig, clock: &C) -> Result<BenchReport> {
    debug!(
        "benchmark: strategy={} a={} b={} rounds={}",
        config.strategy, config.a, config.b, config.rounds
    );

    let mut evaluator = Evaluator::new(config.strategy, config.a, config.b);
    let mut result = 0;

    let start = clock.now();
    for _ in 0..config.rounds {
        result = black_box(evaluator.eval());
    }
    let end = clock.now();

    let elapsed = clock.elapsed_between(start, end)?;
    debug!("benchmark: {} rounds finished in {elapsed:?}", config.rounds);

    Ok(BenchReport {
        result,
        elapsed,
        rounds: config.rounds,
        strategy: config.strategy,
    })
}
