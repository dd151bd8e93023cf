//! CLI argument parsing for dive

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dive")]
#[command(author, version, about = "Replay submarine movement commands and report the final position", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Command file (default: input.txt)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Which part to run (both if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Print how long each part took to stderr
    #[arg(short, long)]
    pub timing: bool,
}
