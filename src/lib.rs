//! eval-bench library
//!
//! A latency harness for a small arithmetic function: it calls the function a
//! fixed number of times between two reads of a monotonic clock and reports
//! the last result, the total time and the mean time per call.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use eval_bench::{run_benchmark, BenchConfig};
//!
//! let report = run_benchmark(BenchConfig {
//!     rounds: 1_000,
//!     ..BenchConfig::default()
//! })?;
//!
//! assert_eq!(report.result, 38);
//! println!("{report}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod eval;
pub mod harness;

pub use clock::{Clock, MonotonicClock};
pub use config::{AppConfig, CliArgs, ConfigError};
pub use error::{Error, Result};
pub use eval::{eval_direct, Evaluator, Strategy};
pub use harness::{run_benchmark, run_benchmark_with_clock, BenchConfig, BenchReport};
