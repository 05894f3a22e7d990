use crate::{Grid, Points, Racks};

pub use last_view::*;

mod last_view;
#[cfg(test)]
mod test_setup;

/// Owns game state after the last turn and implements methods. Created from either
/// [FirstState::first_place](crate::FirstState::first_place) or
/// [NextState::next_place](crate::NextState::next_place) once no player holds any letters.
#[derive(Debug)]
pub struct LastState {
    /// The grid holding every word placed in the game.
    grid: Grid,
    /// A vector of points for each player.
    points: Points,
    /// A vector of racks for each player.
    racks: Racks,
}

impl LastState {
    /// # Arguments
    ///
    /// * `grid`: The grid holding every word placed in the game.
    /// * `points`: A vector of points for each player.
    /// * `racks`: A vector of racks for each player.
    ///
    /// # Returns
    ///
    /// A [LastState] struct with properties owned from arguments.
    pub(crate) fn new(grid: Grid, points: Points, racks: Racks) -> LastState {
        LastState {
            grid,
            points,
            racks,
        }
    }
}
