//! Configuration module for eval-bench
//!
//! This module turns command-line input into the [`BenchConfig`] record the
//! harness runs with.
//!
//! # Architecture
//!
//! - [`values`] - validation of raw argument strings
//! - [`app_config`] - high-level application configuration with CLI integration
//!
//! # Priority Logic
//!
//! 1. CLI parameters (highest priority)
//! 2. Reference-run defaults: `a = 9`, `b = 10`, `rounds = 100_000`,
//!    `strategy = direct`
//!
//! There are no environment variables or configuration files.
//!
//! # Usage
//!
//! ```rust
//! use eval_bench::config::{AppConfig, CliArgs, ConfigError};
//!
//! let cli_args = CliArgs {
//!     rounds: Some("1_000".to_owned()),
//!     ..CliArgs::default()
//! };
//!
//! match AppConfig::from_cli(cli_args) {
//!     Ok(config) => assert_eq!(config.bench_config().rounds, 1_000),
//!     Err(ConfigError::InvalidCliArgument { argument, .. }) => {
//!         panic!("rejected {argument}");
//!     }
//! }
//! ```
//!
//! [`BenchConfig`]: crate::harness::BenchConfig

pub mod app_config;
pub mod values;

pub use app_config::{AppConfig, CliArgs, ConfigBuilder};
pub use values::{parse_operand, parse_rounds, parse_strategy, ConfigError};
