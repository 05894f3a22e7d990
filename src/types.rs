use crate::{Placement, PLAYER_CAPACITY, RACK_CAPACITY};
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// The stable, 1-based, row-major id of a [cell](crate::Cell) in a [grid](crate::Grid).
///
/// # See Also
///
/// * [Grid::cell_at](crate::Grid::cell_at)
/// * [Placement]
pub type CellId = usize;
/// An ordered set of indexes of letters in the current player's rack to be exchanged.
///
/// # See Also
///
/// * [NextState::next_exchange](crate::NextState::next_exchange)
pub type Exchanges = BTreeSet<usize>;

/// This is a bag of all the letters that haven't been drawn yet.
///
/// # See Also
///
/// * [new_bag](crate::new_bag)
/// * [draw](crate::draw)
/// * [FirstState](crate::FirstState)
/// * [NextState](crate::NextState)
pub type Bag = Vec<char>;
/// A vector of points for each player.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [NextState](crate::NextState)
/// * [NextView](crate::NextView)
/// * [LastState](crate::LastState)
/// * [LastView](crate::LastView)
pub type Points = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of letters for one player, including [wildcards](crate::BLANK).
///
/// # See Also
///
/// * [RACK_CAPACITY]
/// * [Racks]
/// * [FirstState::get_rack](crate::FirstState::get_rack)
/// * [NextState::get_rack](crate::NextState::get_rack)
pub type Rack = SmallVec<[char; RACK_CAPACITY]>;
/// A vector of racks for each player.
///
/// # See Also
///
/// * [Rack]
/// * [PLAYER_CAPACITY]
/// * [FirstState](crate::FirstState)
/// * [NextState](crate::NextState)
/// * [LastView](crate::LastView)
pub type Racks = SmallVec<[Rack; PLAYER_CAPACITY]>;
/// A vector of rack lengths.
///
/// # See Also
///
/// * [Racks]
/// * [FirstView](crate::FirstView)
/// * [NextView](crate::NextView)
pub type RackLens = SmallVec<[usize; PLAYER_CAPACITY]>;

/// The move requested by the current player after the first turn.
///
/// # See Also
///
/// * [Player::next_get](crate::Player::next_get)
/// * [next_process_input](crate::next_process_input)
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum PlaceOrExchange {
    /// [Place](crate::NextState::next_place) a word starting at a [placement](Placement).
    Place(Placement, String),
    /// [Exchange](crate::NextState::next_exchange) letters with the bag.
    Exchange(Exchanges),
}
