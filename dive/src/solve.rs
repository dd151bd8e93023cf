//! Running the puzzle parts with timing

use std::time::{Duration, Instant};
use tracing::debug;

use crate::command::Command;
use crate::error::NavigationError;
use crate::navigation::{part1, part2};

/// Which half of the puzzle to answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub fn solve(self, commands: &[Command]) -> Result<i64, NavigationError> {
        match self {
            Self::One => part1(commands),
            Self::Two => part2(commands),
        }
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Part {}", self.number())
    }
}

impl TryFrom<u8> for Part {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(format!("Unknown part: {}", n)),
        }
    }
}

/// One computed result
#[derive(Debug, Clone, Copy)]
pub struct Answer {
    pub part: Part,
    pub value: i64,
    pub elapsed: Duration,
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.part, self.value)
    }
}

/// Solve the requested parts in the order given
///
/// Every part is computed before anything is returned, so a failing part
/// leaves no partial answers behind.
pub fn solve(commands: &[Command], parts: &[Part]) -> Result<Vec<Answer>, NavigationError> {
    parts
        .iter()
        .map(|&part| {
            let start = Instant::now();
            let value = part.solve(commands)?;
            let elapsed = start.elapsed();
            debug!(%part, value, ?elapsed, "Solved");
            Ok(Answer { part, value, elapsed })
        })
        .collect()
}
