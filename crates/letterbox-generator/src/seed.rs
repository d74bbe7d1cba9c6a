use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Generating with the same seed, dictionary, and configuration always yields
/// the same board. The text form is 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use letterbox_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff".parse()?;
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>()?, seed);
///
/// // Phrases hash to seeds, e.g. for a shared daily puzzle
/// let daily = PuzzleSeed::from_phrase("2026-10-19");
/// assert_eq!(daily, PuzzleSeed::from_phrase("2026-10-19"));
/// assert_ne!(daily, PuzzleSeed::from_phrase("2026-10-20"));
/// # Ok::<(), letterbox_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Creates the random number generator driven by this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text was not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character was not a hexadecimal digit.
    #[display("invalid hex digit {ch:?} at position {position}")]
    InvalidDigit {
        /// Offending character.
        ch: char,
        /// Zero-based character position.
        position: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 64 {
            return Err(SeedParseError::InvalidLength { len: chars.len() });
        }
        let mut bytes = [0_u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let high = hex_digit(chars[2 * i], 2 * i)?;
            let low = hex_digit(chars[2 * i + 1], 2 * i + 1)?;
            *byte = (high << 4) | low;
        }
        Ok(Self(bytes))
    }
}

fn hex_digit(ch: char, position: usize) -> Result<u8, SeedParseError> {
    ch.to_digit(16)
        .and_then(|digit| u8::try_from(digit).ok())
        .ok_or(SeedParseError::InvalidDigit { ch, position })
}

impl From<PuzzleSeed> for String {
    fn from(seed: PuzzleSeed) -> Self {
        seed.to_string()
    }
}

impl TryFrom<String> for PuzzleSeed {
    type Error = SeedParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom as _;

    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: PuzzleSeed = HEX.parse().expect("valid seed");
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), HEX);

        let upper: PuzzleSeed = HEX.to_uppercase().parse().expect("valid seed");
        assert_eq!(upper, seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let bad = format!("{}x", &HEX[..63]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidDigit {
                ch: 'x',
                position: 63
            })
        );
        let multibyte = format!("{}é", &HEX[..63]);
        assert!(matches!(
            multibyte.parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidDigit { ch: 'é', .. })
        ));
    }

    #[test]
    fn test_from_phrase_is_sha256() {
        let seed = PuzzleSeed::from_phrase("");
        assert_eq!(
            seed.to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_rng_is_deterministic() {
        let seed = PuzzleSeed::from_bytes([7; 32]);
        let mut a: Vec<u32> = (0..100).collect();
        let mut b = a.clone();
        a.shuffle(&mut seed.rng());
        b.shuffle(&mut seed.rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
