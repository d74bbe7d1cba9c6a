use letterbox_core::{Board, LetterSet, REQUIRED_LETTERS_COUNT};
use rand::{Rng, seq::SliceRandom as _};

/// Errors that can occur when building a board from a letter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardBuildError {
    /// The letter set did not have exactly [`REQUIRED_LETTERS_COUNT`] letters.
    #[display("board needs exactly {REQUIRED_LETTERS_COUNT} distinct letters, got {count}")]
    LetterCount {
        /// Number of letters supplied.
        count: usize,
    },
}

/// Lays out nine distinct letters on a four-sided board.
///
/// The letters are shuffled and split into three sides of three. The fourth
/// side wraps around: the last letter of the third side followed by the first
/// two letters of the first side. Twelve slots therefore hold nine distinct
/// letters, three of them twice.
///
/// # Errors
///
/// Returns [`BoardBuildError::LetterCount`] if `letters` does not contain
/// exactly [`REQUIRED_LETTERS_COUNT`] letters.
///
/// # Examples
///
/// ```
/// use letterbox_core::LetterSet;
/// use letterbox_generator::build_board;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let letters = LetterSet::from_word("AUTHORIZE");
/// let board = build_board(&letters, &mut Pcg64::seed_from_u64(0))?;
///
/// let [first, _, third, fourth] = *board.sides();
/// assert_eq!(fourth, [third[2], first[0], first[1]]);
/// assert_eq!(board.letters(), letters);
///
/// assert!(build_board(&LetterSet::from_word("CAT"), &mut Pcg64::seed_from_u64(0)).is_err());
/// # Ok::<(), letterbox_generator::BoardBuildError>(())
/// ```
pub fn build_board<R>(letters: &LetterSet, rng: &mut R) -> Result<Board, BoardBuildError>
where
    R: Rng + ?Sized,
{
    if letters.len() != REQUIRED_LETTERS_COUNT {
        return Err(BoardBuildError::LetterCount {
            count: letters.len(),
        });
    }
    let mut e = letters.to_vec();
    e.shuffle(rng);
    Ok(Board::from_sides([
        [e[0], e[1], e[2]],
        [e[3], e[4], e[5]],
        [e[6], e[7], e[8]],
        [e[8], e[0], e[1]],
    ]))
}
