//! The four-sided letter board.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng, seq::SliceRandom as _};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{LetterSet, SIDE_COUNT, SIDE_LENGTH};

/// One side of a board.
pub type Side = [char; SIDE_LENGTH];

/// A Letter Boxed board: four sides of three letters each.
///
/// Boards produced by the generator use nine distinct letters in twelve
/// slots; the last side repeats letters from the first and third sides.
/// Boards supplied by a caller are accepted as-is.
///
/// The text form lists the sides separated by `/`, and the serialized form is
/// a list of four lists of three one-letter strings. Both forms uppercase
/// letters when read.
///
/// # Examples
///
/// ```
/// use letterbox_core::Board;
///
/// let board: Board = "CRO/WNI/GHT/TCR".parse()?;
/// assert_eq!(board.sides()[1], ['W', 'N', 'I']);
/// assert_eq!(board.letters().len(), 9);
/// assert_eq!(board.to_string(), "CRO/WNI/GHT/TCR");
/// # Ok::<(), letterbox_core::BoardParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    #[serde(deserialize_with = "deserialize_sides")]
    sides: [Side; SIDE_COUNT],
}

fn deserialize_sides<'de, D>(deserializer: D) -> Result<[Side; SIDE_COUNT], D::Error>
where
    D: Deserializer<'de>,
{
    let mut sides = <[Side; SIDE_COUNT]>::deserialize(deserializer)?;
    for letter in sides.iter_mut().flatten() {
        *letter = uppercase_letter(*letter);
    }
    Ok(sides)
}

// Letters whose uppercase form is several characters are kept as given.
fn uppercase_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

impl Board {
    /// Creates a board from its four sides.
    #[must_use]
    pub const fn from_sides(sides: [Side; SIDE_COUNT]) -> Self {
        Self { sides }
    }

    /// Returns the four sides in order.
    #[must_use]
    pub const fn sides(&self) -> &[Side; SIDE_COUNT] {
        &self.sides
    }

    /// Returns the letter at `side`, `index`, if both are in range.
    #[must_use]
    pub fn letter_at(&self, side: usize, index: usize) -> Option<char> {
        self.sides.get(side)?.get(index).copied()
    }

    /// Iterates over all twelve slots, side by side.
    pub fn slots(&self) -> impl Iterator<Item = char> + '_ {
        self.sides.iter().flatten().copied()
    }

    /// Returns the distinct letters on the board.
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.slots().collect()
    }

    /// Returns `true` if `letter` appears in any slot.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.slots().any(|c| c == letter)
    }

    /// Returns a board with the twelve slot letters randomly permuted.
    ///
    /// This only changes how the board is displayed; the set of letters is
    /// unchanged.
    #[must_use]
    pub fn shuffled<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut slots: Vec<char> = self.slots().collect();
        slots.shuffle(rng);
        let mut sides = self.sides;
        for (slot, letter) in sides.iter_mut().flatten().zip(slots) {
            *slot = letter;
        }
        Self { sides }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, side) in self.sides.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for letter in side {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The text did not have exactly four sides.
    #[display("expected {SIDE_COUNT} sides separated by '/', found {count}")]
    SideCount {
        /// Number of sides found.
        count: usize,
    },
    /// A side did not have exactly three letters.
    #[display("side {side} has {count} letters, expected {SIDE_LENGTH}")]
    SideLength {
        /// Zero-based side index.
        side: usize,
        /// Number of letters found.
        count: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `ABC/DEF/GHI/IAB`; letters are uppercased and surrounding
    /// whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() != SIDE_COUNT {
            return Err(BoardParseError::SideCount { count: parts.len() });
        }
        let mut sides = [[' '; SIDE_LENGTH]; SIDE_COUNT];
        for (i, (side, part)) in sides.iter_mut().zip(parts).enumerate() {
            let letters: Vec<char> = part.trim().chars().flat_map(char::to_uppercase).collect();
            *side = letters
                .try_into()
                .map_err(|letters: Vec<char>| BoardParseError::SideLength {
                    side: i,
                    count: letters.len(),
                })?;
        }
        Ok(Self { sides })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn sample_board() -> Board {
        Board::from_sides([
            ['C', 'R', 'O'],
            ['W', 'N', 'I'],
            ['G', 'H', 'T'],
            ['T', 'C', 'R'],
        ])
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = " cro / wni/GHT/tcr ".parse().expect("valid board");
        assert_eq!(board, sample_board());
        assert_eq!(board.to_string(), "CRO/WNI/GHT/TCR");
    }

    #[test]
    fn test_parse_extended_letters() {
        let board: Board = "äöü/čžš/ABC/CÄÖ".parse().expect("valid board");
        assert_eq!(board.sides()[1], ['Č', 'Ž', 'Š']);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "ABC/DEF/GHI".parse::<Board>(),
            Err(BoardParseError::SideCount { count: 3 })
        );
        assert_eq!(
            "ABC/DEF/GH/IAB".parse::<Board>(),
            Err(BoardParseError::SideLength { side: 2, count: 2 })
        );
        assert_eq!(
            "ABC/DEFG/GHI/IAB".parse::<Board>(),
            Err(BoardParseError::SideLength { side: 1, count: 4 })
        );
    }

    #[test]
    fn test_letters_and_contains() {
        let board = sample_board();
        assert_eq!(board.letters().to_string(), "CGHINORTW");
        assert!(board.contains('W'));
        assert!(!board.contains('Z'));
        assert_eq!(board.letter_at(3, 0), Some('T'));
        assert_eq!(board.letter_at(4, 0), None);
        assert_eq!(board.letter_at(0, 3), None);
        assert_eq!(board.slots().count(), 12);
    }

    #[test]
    fn test_shuffled_keeps_slot_multiset() {
        let board = sample_board();
        let mut rng = Pcg64::seed_from_u64(7);
        let shuffled = board.shuffled(&mut rng);

        let mut before: Vec<char> = board.slots().collect();
        let mut after: Vec<char> = shuffled.slots().collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
        assert_eq!(board.letters(), shuffled.letters());
    }

    #[test]
    fn test_serde_shape() {
        let board = sample_board();
        let json = serde_json::to_string(&board).expect("serializable");
        assert_eq!(
            json,
            r#"[["C","R","O"],["W","N","I"],["G","H","T"],["T","C","R"]]"#
        );
        let back: Board = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, board);
    }

    #[test]
    fn test_deserialize_uppercases_letters() {
        let json = r#"[["c","r","o"],["w","n","i"],["g","h","t"],["t","c","r"]]"#;
        let board: Board = serde_json::from_str(json).expect("deserializable");
        assert_eq!(board, sample_board());

        let json = r#"[["ä","ß","č"],["A","B","C"],["D","E","F"],["F","ä","ß"]]"#;
        let board: Board = serde_json::from_str(json).expect("deserializable");
        assert_eq!(board.sides()[0], ['Ä', 'ß', 'Č']);
    }

    proptest! {
        #[test]
        fn test_shuffled_is_permutation(
            slots in prop::array::uniform12(prop::char::range('A', 'Z')),
            seed in any::<u64>(),
        ) {
            let board = Board::from_sides([
                [slots[0], slots[1], slots[2]],
                [slots[3], slots[4], slots[5]],
                [slots[6], slots[7], slots[8]],
                [slots[9], slots[10], slots[11]],
            ]);
            let shuffled = board.shuffled(&mut Pcg64::seed_from_u64(seed));

            let mut before: Vec<char> = board.slots().collect();
            let mut after: Vec<char> = shuffled.slots().collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
            prop_assert_eq!(board.letters(), shuffled.letters());
        }

        #[test]
        fn test_text_form_round_trips(slots in prop::array::uniform12(prop::char::range('a', 'z'))) {
            let text: String = slots
                .chunks(SIDE_LENGTH)
                .map(|side| side.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("/");
            let board: Board = text.parse().unwrap();
            prop_assert_eq!(board.to_string(), text.to_uppercase());
            prop_assert!(slots.iter().all(|c| board.contains(c.to_ascii_uppercase())));
        }
    }
}
