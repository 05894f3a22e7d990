use crate::{letter_score, PlacedCell, PlacementOutcome, BINGO_BONUS, RACK_CAPACITY};
use std::iter;

/// The points earned by a legal placement.
///
/// # Points Calculation
///
/// The placed word and each cross word longer than one letter are scored independently. Each
/// letter is worth its [letter score](letter_score) times the letter multiplier of its cell,
/// and the sum of a word is multiplied by the word multiplier of every cell in it. Bonuses
/// apply to every cell in a word, so a bonus cell shared by two words counts in both.
///
/// Spending exactly [RACK_CAPACITY] letters adds the [bingo bonus](BINGO_BONUS) once.
pub fn score(outcome: &PlacementOutcome) -> usize {
    let words_points: usize = iter::once(&outcome.placed_cells)
        .chain(&outcome.cross_words)
        .filter(|chain| chain.len() > 1)
        .map(|chain| chain_score(chain))
        .sum();
    let bingo_points = if outcome.letters_spent.len() == RACK_CAPACITY {
        BINGO_BONUS
    } else {
        0
    };
    words_points + bingo_points
}

fn chain_score(chain: &[PlacedCell]) -> usize {
    let (letters_points, word_multiplier) = chain.iter().fold(
        (0, 1),
        |(letters_points, word_multiplier), placed| {
            (
                letters_points + letter_score(placed.letter) * placed.bonus.letter_multiplier(),
                word_multiplier * placed.bonus.word_multiplier(),
            )
        },
    );
    letters_points * word_multiplier
}

impl PlacementOutcome {
    /// The points earned by this outcome. See [score](fn@score).
    pub fn score(&self) -> usize {
        score(self)
    }
}
