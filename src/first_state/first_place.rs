use crate::place::place_word;
use crate::{FirstState, LastState, NextState, PlaceError, Placement, Points};
use either::Either;
use tracing::debug;

impl FirstState {
    /// Places the first word of the game. The word must cover the
    /// [center cell](crate::Grid::center_cell_id) and fit on the grid.
    ///
    /// Validates the word, checks that the current player's rack can supply every letter
    /// (a [wildcard](crate::BLANK) stands in for any missing letter and scores `0`), writes
    /// the word into the grid, removes the spent letters from the rack, refills the rack from
    /// the bag, credits the current player with the [points earned](fn@crate::score), and
    /// advances to the next player who still holds letters.
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
    /// * [PlaceError::MissingLetters] When the rack cannot supply every letter.
    ///
    /// # Returns
    ///
    /// The [next state](NextState) of the game, or the [last state](LastState) when no player
    /// holds any letters after the word is placed.
    pub fn first_place(
        mut self,
        placement: Placement,
        word: &str,
    ) -> Result<Either<NextState, LastState>, (Self, PlaceError)> {
        let first_place_points = match place_word(
            &mut self.grid,
            &mut self.racks[self.current_player],
            &mut self.bag,
            placement,
            word,
            true,
            &mut rand::thread_rng(),
        ) {
            Ok(points) => points,
            Err(error) => return Err((self, error)),
        };
        debug!(
            player = self.current_player,
            points = first_place_points,
            "first word placed"
        );

        let mut points: Points = self.racks.iter().map(|_| 0).collect();
        points[self.current_player] = first_place_points;

        let next_state =
            NextState::new(self.bag, self.grid, points, self.racks, self.current_player, 1);
        Ok(next_state.advance())
    }
}
