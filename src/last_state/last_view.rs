use crate::{Grid, LastState, Points, Racks};

/// Immutably borrows properties from [LastState].
#[derive(Debug)]
pub struct LastView<'a> {
    /// The grid holding every word placed in the game.
    pub grid: &'a Grid,
    /// A vector of points for each player.
    pub points: &'a Points,
    /// A vector of racks for each player.
    pub racks: &'a Racks,
}

impl LastState {
    /// # Returns
    ///
    /// A new [LastView] struct, which immutably borrows properties from [LastState].
    #[inline]
    pub fn last_view(&self) -> LastView<'_> {
        LastView {
            grid: &self.grid,
            points: &self.points,
            racks: &self.racks,
        }
    }
}
