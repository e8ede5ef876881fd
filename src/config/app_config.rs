//! Application configuration module
//!
//! This module provides the main application configuration structure that
//! resolves CLI arguments against the reference-run defaults.

use super::values::{parse_operand, parse_rounds, parse_strategy};
use super::ConfigError;
use crate::eval::Strategy;
use crate::harness::{BenchConfig, DEFAULT_A, DEFAULT_B, DEFAULT_ROUNDS};
use log::LevelFilter;

/// CLI arguments structure
///
/// Every field is optional; an absent value falls back to the reference run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Raw left operand, validated by [`parse_operand`]
    pub a: Option<String>,
    /// Raw right operand, validated by [`parse_operand`]
    pub b: Option<String>,
    /// Raw iteration count, validated by [`parse_rounds`]
    pub rounds: Option<String>,
    /// Raw strategy name, validated by [`parse_strategy`]
    pub strategy: Option<String>,
    /// Raise the log level to debug
    pub verbose: bool,
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    bench: BenchConfig,
    verbose: bool,
}

/// Configuration builder for functional composition
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    a: Option<i32>,
    b: Option<i32>,
    rounds: Option<u64>,
    strategy: Option<Strategy>,
    verbose: bool,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: None,
            b: None,
            rounds: None,
            strategy: None,
            verbose: false,
        }
    }

    /// Set the operands; `None` keeps the default for that side
    #[must_use]
    pub const fn with_operands(mut self, a: Option<i32>, b: Option<i32>) -> Self {
        self.a = a;
        self.b = b;
        self
    }

    #[must_use]
    pub const fn with_rounds(mut self, rounds: Option<u64>) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub const fn with_strategy(mut self, strategy: Option<Strategy>) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the final AppConfig
    pub fn build(self) -> AppConfig {
        AppConfig {
            bench: BenchConfig {
                a: self.a.unwrap_or(DEFAULT_A),
                b: self.b.unwrap_or(DEFAULT_B),
                rounds: self.rounds.unwrap_or(DEFAULT_ROUNDS),
                strategy: self.strategy.unwrap_or_default(),
            },
            verbose: self.verbose,
        }
    }
}

impl AppConfig {
    /// Create AppConfig from CLI arguments
    ///
    /// Priority order:
    /// 1. CLI parameters
    /// 2. Reference-run defaults
    pub fn from_cli(cli_args: CliArgs) -> Result<Self, ConfigError> {
        let a = cli_args
            .a
            .as_deref()
            .map(|raw| parse_operand("--a", raw))
            .transpose()?;
        let b = cli_args
            .b
            .as_deref()
            .map(|raw| parse_operand("--b", raw))
            .transpose()?;
        let rounds = cli_args.rounds.as_deref().map(parse_rounds).transpose()?;
        let strategy = cli_args
            .strategy
            .as_deref()
            .map(parse_strategy)
            .transpose()?;

        Ok(ConfigBuilder::new()
            .with_operands(a, b)
            .with_rounds(rounds)
            .with_strategy(strategy)
            .with_verbose(cli_args.verbose)
            .build())
    }

    /// Benchmark inputs
    pub fn bench_config(&self) -> BenchConfig {
        self.bench
    }

    /// Whether debug logging was requested
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Log level to use when `RUST_LOG` is not set
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}
