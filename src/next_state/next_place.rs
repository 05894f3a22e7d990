use crate::place::place_word;
use crate::{LastState, NextState, PlaceError, Placement};
use either::Either;
use tracing::debug;

impl NextState {
    /// Places a word after the first turn. The word must fit on the grid, agree with every
    /// letter it overlaps, place at least one new letter, and touch an existing word without
    /// running alongside one.
    ///
    /// The word is placed the same way as
    /// [FirstState::first_place](crate::FirstState::first_place): the current player's rack
    /// must supply every new letter, the spent letters are removed and refilled from the bag,
    /// the [points earned](fn@crate::score) are added to the current player, and the turn passes
    /// to the next player who still holds letters.
    ///
    /// # Arguments
    ///
    /// * `placement`: The first cell of the word and the axis it runs along.
    /// * `word`: The word to place. It is uppercased before validation.
    ///
    /// # Errors
    ///
    /// The unchanged state is returned with the error.
    ///
    /// * [PlaceError::Placement] When the word breaks a placement rule.
    /// * [PlaceError::MissingLetters] When the rack cannot supply every new letter.
    ///
    /// # Returns
    ///
    /// The [next state](NextState) of the game, or the [last state](LastState) when no player
    /// holds any letters after the word is placed.
    pub fn next_place(
        mut self,
        placement: Placement,
        word: &str,
    ) -> Result<Either<NextState, LastState>, (Self, PlaceError)> {
        let points = match place_word(
            &mut self.grid,
            &mut self.racks[self.current_player],
            &mut self.bag,
            placement,
            word,
            false,
            &mut rand::thread_rng(),
        ) {
            Ok(points) => points,
            Err(error) => return Err((self, error)),
        };

        self.points[self.current_player] += points;
        self.words_placed += 1;
        debug!(
            player = self.current_player,
            points,
            total = self.points[self.current_player],
            words_placed = self.words_placed,
            "next word placed"
        );

        Ok(self.advance())
    }
}
