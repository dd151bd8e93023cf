//! Parse and navigation error types

use std::num::ParseIntError;
use thiserror::Error;

use crate::command::Command;

/// Errors from parsing a single `<direction> <amount>` command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("expected \"<direction> <amount>\", found {0} token(s)")]
    TokenCount(usize),

    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    #[error("invalid amount {amount:?}: {source}")]
    InvalidAmount {
        amount: String,
        #[source]
        source: ParseIntError,
    },
}

impl CommandError {
    /// Check if this error is an unrecognized direction token
    pub fn is_unknown_direction(&self) -> bool {
        matches!(self, CommandError::UnknownDirection(_))
    }
}

/// A command error pinned to the input line it came from
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid command on line {line}: {text:?}")]
pub struct ParseError {
    /// 1-based line number
    pub line: usize,
    /// The offending line, untrimmed
    pub text: String,
    #[source]
    pub source: CommandError,
}

/// Errors from replaying commands whose totals do not fit in an `i64`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("arithmetic overflow at command {step}: {command}")]
    Overflow { step: usize, command: Command },

    #[error("arithmetic overflow multiplying x={x} by depth={depth}")]
    ProductOverflow { x: i64, depth: i64 },
}
