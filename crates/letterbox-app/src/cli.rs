use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use letterbox_core::{
    Board,
    alphabet::{DEFAULT_CONSONANTS, DEFAULT_VOWELS},
};
use letterbox_generator::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_ROUNDS, PuzzleSeed};

/// Letter Boxed puzzle generator and word checker.
#[derive(Debug, Parser)]
#[command(name = "letterbox", author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Word list, one word per line.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "LETTERBOX_DICTIONARY",
        default_value = "words.txt"
    )]
    pub dictionary: PathBuf,

    /// Letters treated as vowels.
    #[arg(long, global = true, env = "LETTERBOX_VOWELS", default_value = DEFAULT_VOWELS)]
    pub vowels: String,

    /// Letters treated as consonants.
    #[arg(
        long,
        global = true,
        env = "LETTERBOX_CONSONANTS",
        default_value = DEFAULT_CONSONANTS
    )]
    pub consonants: String,

    /// Attempts per chain search.
    #[arg(long, global = true, value_name = "COUNT", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Chain searches before generation gives up.
    #[arg(long, global = true, value_name = "COUNT", default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: usize,

    /// Wall-clock limit for generation, in milliseconds.
    #[arg(long, global = true, value_name = "MS")]
    pub time_limit_ms: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a solvable board.
    Generate(GenerateArgs),
    /// Check a word against a board.
    Check(CheckArgs),
    /// Play interactively on stdin.
    Play(SeedArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct SeedArgs {
    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    pub seed: Option<PuzzleSeed>,

    /// Phrase hashed into a seed.
    #[arg(long, value_name = "TEXT")]
    pub phrase: Option<String>,
}

impl SeedArgs {
    /// Returns the requested seed, or a fresh random one.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
            .or_else(|| self.phrase.as_deref().map(PuzzleSeed::from_phrase))
            .unwrap_or_else(PuzzleSeed::random)
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub seed: SeedArgs,

    /// Also print the word chain the board was built from.
    #[arg(long)]
    pub show_chain: bool,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Word to check.
    pub word: String,

    /// Board as four sides separated by '/', e.g. ABC/DEF/GHI/IAB.
    #[arg(long, value_name = "BOARD")]
    pub board: Board,

    /// Last letter of the previously accepted word.
    #[arg(long, value_name = "LETTER")]
    pub last_letter: Option<char>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
