use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dive::cli::Cli;
use dive::config::Config;
use dive::{Part, load_commands, solve};

fn setup_logging(verbose: bool) -> Result<()> {
    // RUST_LOG, when set, wins over --verbose
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    // stdout carries only the answers
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let input = cli.input.unwrap_or(config.input);
    let parts = match cli.part {
        Some(n) => vec![Part::try_from(n).map_err(|e| eyre::eyre!(e))?],
        None => Part::ALL.to_vec(),
    };

    info!(input = %input.display(), policy = ?config.unknown_directions, "dive starting");

    let commands = load_commands(&input, config.unknown_directions)?;

    let answers = solve(&commands, &parts).context(format!("Failed to plot course from {}", input.display()))?;

    for answer in answers {
        println!("{}", answer);
        if cli.timing {
            eprintln!("{}", format!("{} took {:?}", answer.part, answer.elapsed).dimmed());
        }
    }

    Ok(())
}
