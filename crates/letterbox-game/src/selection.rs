use std::fmt::{self, Display};

use letterbox_core::{Board, SIDE_COUNT, SIDE_LENGTH};

/// A letter position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Side index, `0..4`.
    pub side: usize,
    /// Position within the side, `0..3`.
    pub index: usize,
}

impl Slot {
    /// Creates a slot.
    #[must_use]
    pub const fn new(side: usize, index: usize) -> Self {
        Self { side, index }
    }

    /// Returns `true` if the slot lies on the board.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.side < SIDE_COUNT && self.index < SIDE_LENGTH
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.side, self.index)
    }
}

/// Errors that can occur when selecting a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectionError {
    /// The slot is not on the board.
    #[display("slot {slot} is outside the board")]
    OutOfRange {
        /// The rejected slot.
        slot: Slot,
    },
    /// The slot is on the same side as the previous letter.
    #[display("consecutive letters must come from different sides")]
    SameSide,
    /// The slot holds the same letter as the previous one.
    #[display("the same letter cannot be used twice in a row")]
    RepeatedLetter,
}

/// Result of toggling a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectOutcome {
    /// The letter was appended to the word.
    Selected(char),
    /// The slot was already selected and has been removed.
    Unselected(char),
}

/// A word being built by picking letters off the board.
///
/// Consecutive letters must come from different sides and must differ, which
/// matters on boards where the wraparound side repeats letters.
///
/// # Examples
///
/// ```
/// use letterbox_core::Board;
/// use letterbox_game::{Selection, SelectionError, Slot};
///
/// let board: Board = "CRO/WNI/GHT/TCR".parse()?;
/// let mut selection = Selection::new(board);
///
/// selection.toggle(Slot::new(0, 0))?;
/// selection.toggle(Slot::new(2, 2))?;
/// assert_eq!(selection.word(), "CT");
///
/// // Same side as the previous letter
/// assert_eq!(selection.toggle(Slot::new(2, 0)), Err(SelectionError::SameSide));
///
/// selection.delete_last();
/// assert_eq!(selection.word(), "C");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    board: Board,
    slots: Vec<Slot>,
}

impl Selection {
    /// Creates an empty selection on `board`.
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self {
            board,
            slots: Vec::new(),
        }
    }

    /// Returns the board letters are picked from.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Selects `slot`, or unselects it if it is already part of the word.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot is off the board, on the same side as the
    /// last selected slot, or holds the same letter as the last selected slot.
    pub fn toggle(&mut self, slot: Slot) -> Result<SelectOutcome, SelectionError> {
        let letter = self
            .board
            .letter_at(slot.side, slot.index)
            .ok_or(SelectionError::OutOfRange { slot })?;

        if let Some(pos) = self.slots.iter().position(|s| *s == slot) {
            self.slots.remove(pos);
            return Ok(SelectOutcome::Unselected(letter));
        }

        if let Some(last) = self.slots.last() {
            if last.side == slot.side {
                return Err(SelectionError::SameSide);
            }
            if self.board.letter_at(last.side, last.index) == Some(letter) {
                return Err(SelectionError::RepeatedLetter);
            }
        }

        self.slots.push(slot);
        Ok(SelectOutcome::Selected(letter))
    }

    /// Removes the most recently selected letter.
    pub fn delete_last(&mut self) -> Option<Slot> {
        self.slots.pop()
    }

    /// Removes every selected letter.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns the selected slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the number of selected letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the word spelled by the selected slots.
    #[must_use]
    pub fn word(&self) -> String {
        self.slots
            .iter()
            .filter_map(|slot| self.board.letter_at(slot.side, slot.index))
            .collect()
    }
}
