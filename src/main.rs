//! PulseGroove - tempo and color data for music visuals.
//!
//! Follows what is playing on Spotify, finds the track's tempo through a
//! chain of public tempo databases, and extracts a color palette from the
//! artwork. Everything is driven from CLI commands.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod palette;
pub mod session;
pub mod spotify;
pub mod tempo;
#[cfg(test)]
pub mod test_utils;
pub mod visuals;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("pulsegroove=info".parse()?))
        .init();

    if cli::run_command(&args)? {
        return Ok(());
    }

    // No command specified, show usage
    cli::Cli::command().print_help()?;
    println!();
    Ok(())
}
