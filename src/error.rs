//! Error handling module
//!
//! This module provides unified error handling for the eval-bench harness.

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum Error {
    /// IO-related errors, in practice a failed write of the report
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The clock reported an end timestamp earlier than the start timestamp
    #[error("Clock fault: end timestamp precedes start timestamp by {behind_ns} ns")]
    ClockWentBackwards { behind_ns: u128 },
    /// A bytecode program referenced a register outside the register file
    #[error("Invalid program: instruction {pc} references register {register} (register file has {size} slots)")]
    InvalidProgram {
        pc: usize,
        register: usize,
        size: usize,
    },
    /// A bytecode jump that does not move strictly forward
    #[error("Invalid program: instruction {pc} jumps backwards to {target}")]
    BackwardJump { pc: usize, target: usize },
}
