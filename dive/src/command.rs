//! Movement commands

use crate::error::CommandError;

/// Which way a command moves the submarine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Down,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Forward, Direction::Down, Direction::Up];
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Down => write!(f, "down"),
            Self::Up => write!(f, "up"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Self::Forward),
            "down" => Ok(Self::Down),
            "up" => Ok(Self::Up),
            _ => Err(CommandError::UnknownDirection(s.to_string())),
        }
    }
}

/// One parsed line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    pub direction: Direction,
    pub amount: u32,
}

impl Command {
    pub fn new(direction: Direction, amount: u32) -> Self {
        Self { direction, amount }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.direction, self.amount)
    }
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [direction, amount] = tokens[..] else {
            return Err(CommandError::TokenCount(tokens.len()));
        };

        let direction = direction.parse()?;
        let amount = amount.parse().map_err(|source| CommandError::InvalidAmount {
            amount: amount.to_string(),
            source,
        })?;

        Ok(Self { direction, amount })
    }
}
