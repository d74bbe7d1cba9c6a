//! Fixtures shared by tests, doc-tests, and benchmarks.
//!
//! The sample word list is small but contains many words and word pairs that
//! cover exactly nine distinct letters, so generation over it succeeds
//! quickly for any seed.
//!
//! # Example
//!
//! ```
//! use letterbox_core::testing;
//!
//! let dictionary = testing::sample_dictionary();
//! assert!(dictionary.contains("AUTHORIZE"));
//! assert_eq!(dictionary.len(), testing::SAMPLE_WORDS.len());
//! ```

use crate::{Alphabet, Dictionary};

/// Words of the sample dictionary, already uppercase and valid.
pub const SAMPLE_WORDS: &[&str] = &[
    // nine distinct letters on their own
    "AUTHORIZE",
    "BLUEPRINT",
    "COUNTRIES",
    "DANGEROUS",
    "FLOUNDERS",
    "HARMONICS",
    "PATHOGENS",
    "WORKPLACE",
    // pairs covering nine letters together
    "CROWN",
    "NIGHT",
    "BLACK",
    "KNIFE",
    "STORM",
    "MIGHTY",
    // filler
    "CAT",
    "TEA",
    "APPLE",
    "EAGLE",
    "EMBER",
    "ROBIN",
    "NEST",
    "TOAST",
    "JUMP",
    "PLANK",
    "KITE",
    "ELBOW",
    "WHEAT",
    "TIGER",
    "RIVER",
    "ZEBRA",
];

/// Builds a [`Dictionary`] from [`SAMPLE_WORDS`] with the default alphabet.
#[must_use]
pub fn sample_dictionary() -> Dictionary {
    Dictionary::from_words(SAMPLE_WORDS, &Alphabet::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LetterSet, REQUIRED_LETTERS_COUNT};

    #[test]
    fn test_sample_words_survive_filtering() {
        assert_eq!(sample_dictionary().words(), SAMPLE_WORDS);
    }

    #[test]
    fn test_sample_has_single_word_chains() {
        let singles = SAMPLE_WORDS
            .iter()
            .filter(|word| LetterSet::from_word(word).len() == REQUIRED_LETTERS_COUNT)
            .count();
        assert_eq!(singles, 8);
    }
}
