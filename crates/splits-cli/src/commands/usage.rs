//! Missing game string handling.

use clap::CommandFactory;

use crate::cli::Args;

pub const MISSING_GAME_MESSAGE: &str = "Please supply a game string as your command line argument";

/// Print the missing-input message and usage line to stderr.
pub fn run() {
    eprintln!("{}", MISSING_GAME_MESSAGE);
    eprintln!();
    eprintln!("{}", Args::command().render_usage());
}
