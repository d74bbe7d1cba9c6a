use std::{path::PathBuf, time::Duration};

use letterbox_core::{Alphabet, DictionaryCache};
use letterbox_generator::GeneratorConfig;

use crate::cli::GlobalArgs;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub dictionary_path: PathBuf,
    pub alphabet: Alphabet,
    pub generator: GeneratorConfig,
}

impl AppConfig {
    /// Creates a dictionary cache for the configured word list.
    #[must_use]
    pub fn dictionary_cache(&self) -> DictionaryCache {
        DictionaryCache::new(self.dictionary_path.clone(), self.alphabet.clone())
    }
}

impl From<&GlobalArgs> for AppConfig {
    fn from(args: &GlobalArgs) -> Self {
        let alphabet = Alphabet::new(&args.vowels, &args.consonants);
        log::debug!("alphabet: {alphabet}");
        Self {
            dictionary_path: args.dictionary.clone(),
            alphabet,
            generator: GeneratorConfig {
                max_attempts: args.max_attempts,
                max_rounds: args.max_rounds,
                time_limit: args.time_limit_ms.map(Duration::from_millis),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;
    use crate::cli::Cli;

    fn config(args: &[&str]) -> AppConfig {
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        AppConfig::from(&cli.global)
    }

    #[test]
    fn test_generator_limits() {
        let config = config(&[
            "letterbox",
            "--max-attempts",
            "7",
            "--time-limit-ms",
            "250",
            "generate",
        ]);
        assert_eq!(config.generator.max_attempts, 7);
        assert_eq!(config.generator.time_limit, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_custom_alphabet() {
        let config = config(&[
            "letterbox",
            "generate",
            "--vowels",
            "aeiou",
            "--consonants",
            "bcdfg",
            "--dictionary",
            "latin.txt",
        ]);
        assert_eq!(config.alphabet, Alphabet::new("AEIOU", "BCDFG"));
        assert_eq!(config.dictionary_path, PathBuf::from("latin.txt"));
        assert_eq!(config.dictionary_cache().path(), config.dictionary_path.as_path());
    }
}
