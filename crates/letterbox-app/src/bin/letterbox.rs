//! Letterbox command-line application.
//!
//! Generates solvable Letter Boxed boards, checks words, and runs an
//! interactive game on the terminal.

use std::{io, process::ExitCode};

use clap::Parser as _;
use letterbox_app::{AppError, cli::Cli, commands};

fn main() -> Result<ExitCode, AppError> {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    commands::run(&cli, io::stdin().lock(), &mut io::stdout().lock())
}
