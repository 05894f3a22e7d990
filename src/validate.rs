use crate::{BonusKind, Cell, CellId, Direction, Grid, Occupancy, Placement, SetLetterError};
use itertools::Itertools;
use std::iter;
use thiserror::Error;

/// A letter on a cell as seen by a [placement](Placement).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PlacedCell {
    /// The id of the cell.
    pub cell_id: CellId,
    /// The letter on the cell after the placement.
    pub letter: char,
    /// The bonus printed on the cell.
    pub bonus: BonusKind,
}

/// An ordered run of letters forming one word on the [grid](Grid).
pub type Chain = Vec<PlacedCell>;

/// Everything a legal [placement](Placement) touches.
///
/// # See Also
///
/// * [validate_placement]
/// * [score](fn@crate::score)
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct PlacementOutcome {
    /// Every cell of the placed word in order, including overlaps.
    pub placed_cells: Chain,
    /// The letters which must come from the rack, in word order. Overlaps are excluded.
    pub letters_spent: Vec<char>,
    /// The perpendicular words formed through newly placed letters.
    pub cross_words: Vec<Chain>,
}

/// Describes the reason why a word cannot be placed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum PlacementError {
    /// Attempting to place a word without letters.
    #[error("word must have at least one letter")]
    EmptyWord,
    /// Attempting to place a character which is not a letter from `A` to `Z`.
    #[error("{letter:?} is not a letter")]
    InvalidLetter {
        /// The first character which is not a letter.
        letter: char,
    },
    /// Attempting to continue a horizontal word onto another row.
    #[error("word starting at cell {origin} cannot continue onto the next row at cell {cell_id}")]
    InvalidRange {
        /// The id of the first letter.
        origin: CellId,
        /// The id that left the row.
        cell_id: CellId,
    },
    /// Attempting to place a letter off the grid.
    #[error("word does not fit on the grid at cell {cell_id}")]
    DoesNotFit {
        /// The id that is not on the grid.
        cell_id: CellId,
    },
    /// Attempting to place a letter on a cell holding a different letter.
    #[error("invalid overlap, {letter} cannot be placed on {existing}")]
    InvalidOverlap {
        /// The id of the occupied cell.
        cell_id: CellId,
        /// The letter from the word.
        letter: char,
        /// The letter already on the cell.
        existing: char,
    },
    /// Attempting to place a word which runs into another word along its own axis.
    #[error("word {side} {letter} is too close")]
    TooClose {
        /// The id of the first or last letter.
        cell_id: CellId,
        /// The first or last letter.
        letter: char,
        /// The side with the occupied neighbor.
        side: Direction,
    },
    /// Attempting to place a word entirely on existing letters.
    #[error("word completely overlaps another word")]
    CompleteOverlap,
    /// Attempting to place a word which neither overlaps nor touches another word.
    #[error("word must overlap or touch at least one other word")]
    NotConnected,
    /// Attempting to place the first word away from the center.
    #[error("first word must overlap the center of the board (cell {center})")]
    CenterNotCovered {
        /// The id of the center cell.
        center: CellId,
    },
}

/// Checks whether `word` can be written at `placement` without changing the grid.
///
/// Each letter must land on an empty cell or on a cell holding the same letter (ignoring ASCII
/// case). The cells just before the first letter and just after the last letter along the
/// axis must be empty. Every newly placed letter with a perpendicular neighbor forms a cross
/// word from the run before it, the letter, and the run after it.
///
/// # Arguments
///
/// * `grid`: The grid before the placement.
/// * `placement`: Where the word starts and its axis.
/// * `word`: The letters to place.
/// * `first_word`: Whether this is the first word of the game, which must cover the
/// [center](Grid::center_cell_id) instead of touching another word.
///
/// # Errors
///
/// * [PlacementError::EmptyWord] When `word` is empty.
/// * [PlacementError::InvalidLetter] When some character of `word` is not an ASCII letter.
/// * [PlacementError::InvalidRange] or [PlacementError::DoesNotFit] When some letter would
/// land outside its row or off the grid.
/// * [PlacementError::InvalidOverlap] When some letter lands on a different letter.
/// * [PlacementError::CompleteOverlap] When every letter is already on the grid.
/// * [PlacementError::TooClose] When the word runs into another word along its own axis.
/// * [PlacementError::NotConnected] When a later word neither overlaps nor forms a cross word.
/// * [PlacementError::CenterNotCovered] When the first word does not cover the center.
pub fn validate_placement(
    grid: &Grid,
    placement: Placement,
    word: &str,
    first_word: bool,
) -> Result<PlacementOutcome, PlacementError> {
    let letters = word.chars().collect_vec();
    let last_step = letters
        .len()
        .checked_sub(1)
        .ok_or(PlacementError::EmptyWord)?;
    check_letters(word)?;
    let (before, after) = placement.axis.directions();
    let (cross_before, cross_after) = placement.axis.perpendicular().directions();
    let center = grid.center_cell_id();

    let mut outcome = PlacementOutcome {
        placed_cells: Chain::with_capacity(letters.len()),
        ..PlacementOutcome::default()
    };
    let mut overlaps = 0;
    let mut covers_center = false;
    let mut too_close = None;

    for (step, &letter) in letters.iter().enumerate() {
        let cell_id = placement.cell_id_at(grid.size(), step)?;
        let cell = grid
            .cell_at(cell_id, Occupancy::Any)
            .ok_or(PlacementError::DoesNotFit { cell_id })?;

        let placed = match cell.letter {
            Some(existing) if existing.eq_ignore_ascii_case(&letter) => {
                overlaps += 1;
                PlacedCell {
                    cell_id,
                    letter: existing,
                    bonus: cell.bonus,
                }
            }
            Some(existing) => {
                return Err(PlacementError::InvalidOverlap {
                    cell_id,
                    letter,
                    existing,
                })
            }
            None => {
                outcome.letters_spent.push(letter);
                PlacedCell {
                    cell_id,
                    letter,
                    bonus: cell.bonus,
                }
            }
        };

        let neighbors = grid.neighbor_occupancy(cell_id);
        for (is_endpoint, side) in [(step == 0, before), (step == last_step, after)] {
            if is_endpoint && neighbors.is_occupied(side) && too_close.is_none() {
                too_close = Some(PlacementError::TooClose {
                    cell_id,
                    letter,
                    side,
                });
            }
        }

        // overlapping letters already belong to whatever crosses them
        if cell.letter.is_none()
            && (neighbors.is_occupied(cross_before) || neighbors.is_occupied(cross_after))
        {
            let run_before = grid
                .neighboring_run(cell_id, cross_before)
                .filter_map(|cell| cell.placed())
                .collect_vec();
            let cross_word: Chain = run_before
                .into_iter()
                .rev()
                .chain(iter::once(placed))
                .chain(
                    grid.neighboring_run(cell_id, cross_after)
                        .filter_map(|cell| cell.placed()),
                )
                .collect();
            if cross_word.len() > 1 {
                outcome.cross_words.push(cross_word);
            }
        }

        covers_center |= cell_id == center;
        outcome.placed_cells.push(placed);
    }

    if overlaps == letters.len() {
        return Err(PlacementError::CompleteOverlap);
    }
    if let Some(error) = too_close {
        return Err(error);
    }
    if !first_word && overlaps == 0 && outcome.cross_words.is_empty() {
        return Err(PlacementError::NotConnected);
    }
    if first_word && !covers_center {
        return Err(PlacementError::CenterNotCovered { center });
    }

    Ok(outcome)
}

/// Writes `word` at `placement` into the grid. Every cell id is resolved before any letter is
/// written, so an error leaves the grid unchanged.
///
/// Intended to follow a successful [validate_placement] on the same grid. The returned outcome
/// holds the placed cells and the newly written letters but no cross words, since those are
/// only discovered before the letters are written.
///
/// # Errors
///
/// * [PlacementError::EmptyWord] When `word` is empty.
/// * [PlacementError::InvalidLetter] When some character of `word` is not an ASCII letter.
/// * [PlacementError::InvalidRange] or [PlacementError::DoesNotFit] When some letter would
/// land outside its row or off the grid.
/// * [PlacementError::InvalidOverlap] When some letter lands on a different letter.
pub fn commit_placement(
    grid: &mut Grid,
    placement: Placement,
    word: &str,
) -> Result<PlacementOutcome, PlacementError> {
    if word.is_empty() {
        return Err(PlacementError::EmptyWord);
    }
    check_letters(word)?;
    let cells: Vec<(CellId, char)> = word
        .chars()
        .enumerate()
        .map(|(step, letter)| {
            let cell_id = placement.cell_id_at(grid.size(), step)?;
            match grid.cell_at(cell_id, Occupancy::Occupied) {
                Some(&Cell {
                    letter: Some(existing),
                    ..
                }) if !existing.eq_ignore_ascii_case(&letter) => {
                    Err(PlacementError::InvalidOverlap {
                        cell_id,
                        letter,
                        existing,
                    })
                }
                _ => Ok((cell_id, letter)),
            }
        })
        .collect::<Result<_, _>>()?;

    let mut outcome = PlacementOutcome {
        placed_cells: Chain::with_capacity(cells.len()),
        ..PlacementOutcome::default()
    };
    for (cell_id, letter) in cells {
        let (cell, newly_occupied) =
            grid.set_letter(cell_id, letter)
                .map_err(|error| match error {
                    SetLetterError::Absent { cell_id } => PlacementError::DoesNotFit { cell_id },
                    SetLetterError::Occupied {
                        cell_id,
                        letter,
                        existing,
                    } => PlacementError::InvalidOverlap {
                        cell_id,
                        letter,
                        existing,
                    },
                })?;
        if newly_occupied {
            outcome.letters_spent.push(letter);
        }
        outcome.placed_cells.extend(cell.placed());
    }

    Ok(outcome)
}

/// Lowercase letters are allowed since they mark letters supplied by a wildcard.
fn check_letters(word: &str) -> Result<(), PlacementError> {
    match word.chars().find(|letter| !letter.is_ascii_alphabetic()) {
        Some(letter) => Err(PlacementError::InvalidLetter { letter }),
        None => Ok(()),
    }
}
