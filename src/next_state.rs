use crate::{Bag, Grid, LastState, Points, Racks};
use either::Either;
use tracing::info;

pub use next_exchange::*;
pub use next_view::*;

mod next_exchange;
mod next_place;
mod next_view;
#[cfg(test)]
mod test_setup;

/// Owns game state after the first turn and implements methods. Created from
/// [FirstState::first_place](crate::FirstState::first_place).
#[derive(Debug)]
pub struct NextState {
    /// This is a bag of all the letters that haven't been drawn yet.
    bag: Bag,
    /// The grid holding every word placed so far.
    grid: Grid,
    /// A vector of points for each player.
    points: Points,
    /// A vector of racks for each player.
    racks: Racks,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// The number of words placed so far, including the first word.
    words_placed: usize,
}

impl NextState {
    /// # Arguments
    ///
    /// * `bag`: This is a bag of all the letters that haven't been drawn yet.
    /// * `grid`: The grid holding every word placed so far.
    /// * `points`: A vector of points for each player.
    /// * `racks`: A vector of racks for each player.
    /// * `current_player`: The index of the player who placed the last word.
    /// * `words_placed`: The number of words placed so far.
    ///
    /// # Returns
    ///
    /// A [NextState] struct with properties owned from arguments.
    pub(crate) fn new(
        bag: Bag,
        grid: Grid,
        points: Points,
        racks: Racks,
        current_player: usize,
        words_placed: usize,
    ) -> NextState {
        NextState {
            bag,
            grid,
            points,
            racks,
            current_player,
            words_placed,
        }
    }

    /// # Returns
    ///
    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Passes the turn to the next player, in order and wrapping around, whose rack is not
    /// empty. The current player is considered last.
    ///
    /// # Returns
    ///
    /// The same state with the turn passed, or the [last state](LastState) when no player
    /// holds any letters.
    pub(crate) fn advance(mut self) -> Either<NextState, LastState> {
        match self.next_player_with_letters() {
            Some(next_player) => {
                self.current_player = next_player;
                Either::Left(self)
            }
            None => {
                info!(
                    points = ?self.points,
                    words_placed = self.words_placed,
                    "game ended"
                );
                Either::Right(LastState::new(self.grid, self.points, self.racks))
            }
        }
    }

    /// The index of the next player after the current player whose rack is not empty.
    fn next_player_with_letters(&self) -> Option<usize> {
        let players = self.racks.len();
        (1..=players)
            .map(|offset| (self.current_player + offset) % players)
            .find(|&player| !self.racks[player].is_empty())
    }
}
