//! Dive - submarine course plotter
//!
//! Reads a list of `<direction> <amount>` movement commands and replays them
//! under two steering models, reporting horizontal position times depth for
//! each.
//!
//! # Modules
//!
//! - [`command`] - Direction and Command types with text round-tripping
//! - [`parser`] - Line-numbered parsing of a whole input file
//! - [`navigation`] - The two steering models and their reductions
//! - [`solve`] - Part selection and timing
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use dive::{DirectionPolicy, parse_commands, part1, part2};
//!
//! let commands = parse_commands("forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n", DirectionPolicy::Reject)?;
//! assert_eq!(part1(&commands)?, 150);
//! assert_eq!(part2(&commands)?, 900);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod navigation;
pub mod parser;
pub mod solve;

pub use command::{Command, Direction};
pub use config::Config;
pub use error::{CommandError, NavigationError, ParseError};
pub use navigation::{AimedCourse, Course, Navigator, Position, navigate, part1, part2};
pub use parser::{DirectionPolicy, load_commands, parse_commands};
pub use solve::{Answer, Part, solve};

/// Input file read when neither the CLI nor config names one
pub const DEFAULT_INPUT: &str = "input.txt";
