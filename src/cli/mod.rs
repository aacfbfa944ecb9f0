//! Command-line interface for pulsegroove.
//!
//! This module provides CLI commands for tempo lookup, Spotify login,
//! palette extraction and following live playback.

mod commands;

pub use commands::{Cli, Commands, Overrides, run_command};
