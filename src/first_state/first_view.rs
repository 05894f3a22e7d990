use crate::{FirstState, Grid, Rack, RackLens};
use smallvec::SmallVec;

/// Immutably borrows properties from [FirstState].
#[derive(Debug)]
pub struct FirstView<'a> {
    /// The number of letters that haven't been drawn yet.
    pub bag_len: usize,
    /// The empty grid.
    pub grid: &'a Grid,
    /// A vector of rack lengths.
    pub rack_lens: RackLens,
    /// The index of the player whose turn it is.
    pub current_player: usize,
}

impl FirstState {
    /// # Returns
    ///
    /// A new [FirstView] struct, which immutably borrows properties from [FirstState], but
    /// with `bag` replaced by `bag.len()` and `racks` replaced by the number
    /// of letters in each rack.
    pub fn first_view(&self) -> FirstView<'_> {
        FirstView {
            bag_len: self.bag.len(),
            grid: &self.grid,
            rack_lens: self.racks.iter().map(SmallVec::len).collect(),
            current_player: self.current_player,
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
