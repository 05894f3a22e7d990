use crate::{Grid, NextState, Points, Rack, RackLens};
use smallvec::SmallVec;

/// Immutably borrows properties from [NextState].
#[derive(Debug)]
pub struct NextView<'a> {
    /// The number of letters that haven't been drawn yet.
    pub bag_len: usize,
    /// The grid holding every word placed so far.
    pub grid: &'a Grid,
    /// A vector of points for each player.
    pub points: &'a Points,
    /// A vector of rack lengths.
    pub rack_lens: RackLens,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// The number of words placed so far.
    pub words_placed: usize,
}

impl NextState {
    /// # Returns
    ///
    /// A new [NextView] struct, which immutably borrows properties from [NextState], but
    /// with `bag` replaced by `bag.len()` and `racks` replaced by the number
    /// of letters in each rack.
    pub fn next_view(&self) -> NextView<'_> {
        NextView {
            bag_len: self.bag.len(),
            grid: &self.grid,
            points: &self.points,
            rack_lens: self.racks.iter().map(SmallVec::len).collect(),
            current_player: self.current_player,
            words_placed: self.words_placed,
        }
    }

    /// # Returns
    ///
    /// A vector of letters held by the requesting player or `None` if out of bounds.
    pub fn get_rack(&self, index: usize) -> Option<&Rack> {
        self.racks.get(index)
    }

    /// The rack of the player whose turn it is.
    pub(crate) fn current_rack(&self) -> &Rack {
        &self.racks[self.current_player]
    }
}
