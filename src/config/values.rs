//! Configuration value parsing
//!
//! Validation of the raw strings that reach the configuration layer from the
//! command line.

use crate::eval::Strategy;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid CLI argument value
    #[error("Invalid CLI argument: {argument}='{value}' (expected: {expected})")]
    InvalidCliArgument {
        argument: String,
        value: String,
        expected: String,
    },
}

impl ConfigError {
    fn invalid(argument: &str, value: &str, expected: &str) -> Self {
        ConfigError::InvalidCliArgument {
            argument: argument.to_owned(),
            value: value.to_owned(),
            expected: expected.to_owned(),
        }
    }
}

/// Parse an iteration count, allowing `_` as a digit separator
///
/// ```rust
/// use eval_bench::config::parse_rounds;
///
/// assert_eq!(parse_rounds("100_000"), Ok(100_000));
/// assert!(parse_rounds("-1").is_err());
/// ```
pub fn parse_rounds(raw: &str) -> Result<u64, ConfigError> {
    let trimmed = raw.trim();
    let well_formed = trimmed.starts_with(|c: char| c.is_ascii_digit())
        && !trimmed.ends_with('_')
        && !trimmed.contains("__");

    well_formed
        .then(|| trimmed.replace('_', ""))
        .and_then(|digits| digits.parse::<u64>().ok())
        .ok_or_else(|| {
            ConfigError::invalid(
                "--rounds",
                raw,
                "non-negative integer, optionally with '_' separators",
            )
        })
}

/// Parse an `i32` operand given to `argument` (`--a` or `--b`)
///
/// ```rust
/// use eval_bench::config::parse_operand;
///
/// assert_eq!(parse_operand("--a", "-7"), Ok(-7));
/// assert!(parse_operand("--b", "99999999999").is_err());
/// ```
pub fn parse_operand(argument: &str, raw: &str) -> Result<i32, ConfigError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ConfigError::invalid(argument, raw, "integer in i32 range"))
}

/// Parse a strategy name
pub fn parse_strategy(raw: &str) -> Result<Strategy, ConfigError> {
    raw.parse::<Strategy>().map_err(|_| {
        let names = Strategy::ALL.map(Strategy::name).join(", ");
        ConfigError::invalid("--strategy", raw, &format!("one of: {names}"))
    })
}
