use crate::{
    commit_placement, refill, remove_letters, spend_plan, validate_placement, Bag, Grid,
    Occupancy, Placement, PlacementError, Rack, Spend,
};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

/// Describes the reason why a word could not be placed by the current player.
///
/// # See Also
///
/// * [FirstState::first_place](crate::FirstState::first_place)
/// * [NextState::next_place](crate::NextState::next_place)
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum PlaceError {
    /// The word breaks a placement rule.
    #[error(transparent)]
    Placement(#[from] PlacementError),
    /// The current player's rack cannot supply every new letter.
    #[error("rack is missing {}", letters(.missing))]
    MissingLetters {
        /// The letters which neither the rack nor its wildcards can supply.
        missing: Vec<char>,
    },
}

fn letters(missing: &[char]) -> String {
    missing.iter().collect()
}

/// Validates `word` at `placement`, checks that `rack` holds every new letter, writes the word
/// into `grid`, and only then removes the spent letters from `rack` and refills it from `bag`.
///
/// The word is uppercased first and must only hold letters from `A` to `Z`. Letters the rack
/// can only supply with a wildcard are written in lowercase so they score `0`.
///
/// # Returns
///
/// The points earned by the placement.
///
/// # Errors
///
/// Nothing is changed when an error is returned.
///
/// * [PlaceError::Placement] When the word breaks a placement rule or holds a character which
/// is not a letter.
/// * [PlaceError::MissingLetters] When the rack cannot supply every new letter.
pub(crate) fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    rack: &mut Rack,
    bag: &mut Bag,
    placement: Placement,
    word: &str,
    first_word: bool,
    rng: &mut R,
) -> Result<usize, PlaceError> {
    let word = word.to_uppercase();
    let outcome = validate_placement(grid, placement, &word, first_word).map_err(|error| {
        trace!(%placement, %word, %error, "placement rejected");
        error
    })?;
    let plan = spend_plan(rack, &outcome.letters_spent).map_err(|missing| {
        trace!(%placement, %word, ?missing, "rack is missing letters");
        PlaceError::MissingLetters { missing }
    })?;

    let word = mark_wildcards(grid, placement, &word, &plan);
    // same cells as before, so only the letters' scores change
    let outcome = validate_placement(grid, placement, &word, first_word)?;
    commit_placement(grid, placement, &word)?;

    remove_letters(rack, &plan);
    refill(rack, bag, rng);

    let points = outcome.score();
    debug!(
        %placement,
        %word,
        points,
        letters_spent = outcome.letters_spent.len(),
        cross_words = outcome.cross_words.len(),
        "word placed"
    );
    Ok(points)
}

/// `word` with every new letter supplied by a wildcard in lowercase. New letters are matched
/// with `plan` in order.
fn mark_wildcards(grid: &Grid, placement: Placement, word: &str, plan: &[Spend]) -> String {
    let mut spends = plan.iter();
    word.chars()
        .enumerate()
        .map(|(step, letter)| {
            let is_new = placement
                .cell_id_at(grid.size(), step)
                .ok()
                .and_then(|cell_id| grid.cell_at(cell_id, Occupancy::Empty))
                .is_some();
            match is_new.then(|| spends.next()).flatten() {
                Some(Spend::Wildcard(_)) => letter.to_ascii_lowercase(),
                _ => letter,
            }
        })
        .collect()
}
