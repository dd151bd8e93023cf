//! Turn puzzle input into a command list

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::command::Command;
use crate::error::ParseError;

/// What to do with a line whose direction is not forward/down/up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionPolicy {
    /// Fail the whole parse
    #[default]
    Reject,
    /// Drop the line and keep going
    Skip,
}

/// Parse newline-separated commands
///
/// Lines are numbered from 1 and whitespace-only lines are ignored. The first
/// malformed line aborts the parse; nothing is returned for the lines before it.
pub fn parse_commands(text: &str, policy: DirectionPolicy) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(cmd) => commands.push(cmd),
            Err(e) if e.is_unknown_direction() && policy == DirectionPolicy::Skip => {
                warn!(line = idx + 1, text = line, "Skipping command with unknown direction");
                skipped += 1;
            }
            Err(source) => {
                return Err(ParseError {
                    line: idx + 1,
                    text: line.to_string(),
                    source,
                });
            }
        }
    }

    debug!(count = commands.len(), skipped, "Parsed commands");
    Ok(commands)
}

/// Read and parse a command file
pub fn load_commands(path: impl AsRef<Path>, policy: DirectionPolicy) -> Result<Vec<Command>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).context(format!("Failed to read input file: {}", path.display()))?;
    let commands = parse_commands(&text, policy).context(format!("Failed to parse {}", path.display()))?;
    Ok(commands)
}
