use std::{
    io::{BufRead, Write},
    process::ExitCode,
};

use crate::{
    AppError,
    cli::{Cli, Command},
    config::AppConfig,
};

pub mod check;
pub mod generate;
pub mod play;

/// Runs the parsed command line against the given input and output.
pub fn run<R, W>(cli: &Cli, input: R, out: &mut W) -> Result<ExitCode, AppError>
where
    R: BufRead,
    W: Write,
{
    let config = AppConfig::from(&cli.global);
    let dictionary = config.dictionary_cache().get()?;
    if dictionary.is_empty() {
        log::warn!(
            "no usable words in {} for alphabet {}",
            config.dictionary_path.display(),
            config.alphabet
        );
    }

    match &cli.command {
        Command::Generate(args) => generate::run(args, &dictionary, config.generator, out)?,
        Command::Check(args) => {
            if !check::run(args, &dictionary, out)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Play(args) => play::run(args, &dictionary, config.generator, input, out)?,
    }
    Ok(ExitCode::SUCCESS)
}
