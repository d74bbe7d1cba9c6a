//! The set of letters a puzzle may use.

use std::fmt::{self, Display};

/// Default vowels: basic Latin plus umlauted vowels.
pub const DEFAULT_VOWELS: &str = "AEIOUÄÖÜ";

/// Default consonants: basic Latin plus caron consonants.
pub const DEFAULT_CONSONANTS: &str = "BCDFGHJKLMNPQRSTVWXYZČŽŠ";

/// An alphabet made of two enumerated letter groups, vowels and consonants.
///
/// Every word in a [`Dictionary`](crate::Dictionary) consists solely of
/// letters from its alphabet. Letters are stored uppercase; the alphabet is
/// not limited to ASCII.
///
/// # Examples
///
/// ```
/// use letterbox_core::Alphabet;
///
/// let alphabet = Alphabet::default();
/// assert!(alphabet.contains('Č'));
/// assert!(alphabet.is_vowel('Ö'));
/// assert!(!alphabet.contains('1'));
///
/// let latin = Alphabet::new("aeiou", "b, c, d");
/// assert_eq!(latin.len(), 8);
/// assert!(latin.contains('C'));
/// assert!(!latin.contains('F'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    vowels: Vec<char>,
    consonants: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from vowel and consonant strings.
    ///
    /// Whitespace and commas are ignored, letters are uppercased, and
    /// repeated letters are kept once (first occurrence wins, vowels first).
    #[must_use]
    pub fn new(vowels: &str, consonants: &str) -> Self {
        let vowels = parse_letters(vowels, &[]);
        let consonants = parse_letters(consonants, &vowels);
        Self { vowels, consonants }
    }

    /// Returns the vowels in configuration order.
    #[must_use]
    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    /// Returns the consonants in configuration order.
    #[must_use]
    pub fn consonants(&self) -> &[char] {
        &self.consonants
    }

    /// Iterates over every letter, vowels first.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.vowels.iter().chain(&self.consonants).copied()
    }

    /// Returns the total number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vowels.len() + self.consonants.len()
    }

    /// Returns `true` if the alphabet has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `letter` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.is_vowel(letter) || self.consonants.contains(&letter)
    }

    /// Returns `true` if `letter` is one of the vowels.
    #[must_use]
    pub fn is_vowel(&self, letter: char) -> bool {
        self.vowels.contains(&letter)
    }

    /// Returns `true` if every character of `word` belongs to the alphabet.
    #[must_use]
    pub fn spells(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_VOWELS, DEFAULT_CONSONANTS)
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vowels: String = self.vowels.iter().collect();
        let consonants: String = self.consonants.iter().collect();
        write!(f, "vowels: {vowels}, consonants: {consonants}")
    }
}

fn parse_letters(text: &str, taken: &[char]) -> Vec<char> {
    let mut letters = Vec::new();
    for c in text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .flat_map(char::to_uppercase)
    {
        if !taken.contains(&c) && !letters.contains(&c) {
            letters.push(c);
        }
    }
    letters
}
