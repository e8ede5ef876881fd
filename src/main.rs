//! CLI entry point for eval-bench
//!
//! Times the function under test and prints three lines to stdout. Logging
//! goes to stderr so the report stays machine-readable.

use anyhow::Context;
use clap::Parser;
use std::io;
use std::process;

use eval_bench::{run_benchmark, AppConfig, ConfigError};

/// Measure the per-call latency of a small arithmetic function
#[derive(Parser)]
#[command(name = "eval-bench")]
#[command(version, about, long_about = None)]
struct Args {
    /// Left operand [default: 9]
    #[arg(short, long, value_name = "INT", allow_negative_numbers = true)]
    a: Option<String>,

    /// Right operand [default: 10]
    #[arg(short, long, value_name = "INT", allow_negative_numbers = true)]
    b: Option<String>,

    /// Number of timed calls [default: 100_000]
    #[arg(
        short,
        long,
        value_name = "N",
        long_help = "Number of timed calls. Accepts '_' digit separators (e.g. 100_000). \
                     Zero performs no calls and reports the average as N/A."
    )]
    rounds: Option<String>,

    /// Evaluation strategy: direct, tree or vm [default: direct]
    #[arg(short, long, value_name = "STRATEGY")]
    strategy: Option<String>,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// Convert CLI args to CliArgs struct for AppConfig
impl From<Args> for eval_bench::CliArgs {
    fn from(args: Args) -> Self {
        Self {
            a: args.a,
            b: args.b,
            rounds: args.rounds,
            strategy: args.strategy,
            verbose: args.verbose,
        }
    }
}

/// Report configuration errors with a one-line message and exit code 1
fn handle_config_error(error: ConfigError) -> ! {
    eprintln!("eval-bench: {error}");
    process::exit(1);
}

/// Initialise env_logger; an explicit RUST_LOG wins over the CLI level
fn init_logging(config: &AppConfig) {
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_cli(Args::parse().into())
        .unwrap_or_else(|error| handle_config_error(error));

    init_logging(&config);

    let report = run_benchmark(config.bench_config()).context("benchmark run failed")?;

    report
        .write_to(io::stdout().lock())
        .context("failed to write report to stdout")
}
