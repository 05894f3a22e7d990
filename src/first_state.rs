use crate::{
    new_bag, refill, standard_bonus_layout, Bag, Grid, NewGridError, Rack, Racks, BAG_LEN,
    DEFAULT_GRID_SIZE, RACK_CAPACITY,
};
use map_macro::hash_set;
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

pub use first_view::*;

mod first_place;
mod first_view;
#[cfg(test)]
mod test_setup;

/// Owns game state on the first turn and implements methods. Created from [FirstState::new].
#[derive(Debug)]
pub struct FirstState {
    /// This is a bag of all the letters that haven't been drawn yet.
    bag: Bag,
    /// The empty grid the first word is placed on.
    grid: Grid,
    /// A vector of racks for each player.
    racks: Racks,
    /// The index of the player whose turn it is.
    current_player: usize,
}

/// Describes the reason why [FirstState] could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum NewError {
    /// Attempting [to start](FirstState::new) with empty players.
    #[error("game must have at least one player")]
    EmptyPlayers,
    /// Attempting [to start](FirstState::new) with an illegal grid size.
    #[error(transparent)]
    Grid(#[from] NewGridError),
    /// Attempting to request more letters for racks than letters in the bag.
    #[error("{requested_letters} letters requested for racks but the bag holds {letters_in_bag}")]
    NotEnoughLetters {
        /// The number of letters requested for racks.
        requested_letters: usize,
        /// The number of letters in a new bag.
        letters_in_bag: usize,
    },
    /// Attempting to select some current player who is not in the game.
    #[error("player {current_player} is not one of {players_len} players")]
    CurrentPlayerOutOfBounds {
        /// The index of the selected player.
        current_player: usize,
        /// The number of players in the game.
        players_len: usize,
    },
}

impl FirstState {
    /// Creates the game like [FirstState::new] and selects the first player at random.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyPlayers] Attempting [to start](FirstState::new_random_first_player)
    /// with empty players.
    /// * [NewError::Grid] Attempting [to start](FirstState::new_random_first_player) with an
    /// illegal grid size.
    /// * [NewError::NotEnoughLetters] Attempting to request more letters for racks
    /// than letters in the bag.
    ///
    /// # See Also
    ///
    /// * [FirstState::new]
    pub fn new_random_first_player(
        players_len: usize,
        grid_size: Option<usize>,
    ) -> Result<FirstState, HashSet<NewError>> {
        FirstState::new(players_len, grid_size, |players_len| {
            rand::thread_rng().gen_range(0..players_len)
        })
    }

    /// Checks that `players_len` is non-zero, that the grid size is legal, and that the
    /// number of letters requested (`players_len * `[RACK_CAPACITY]) fits in a
    /// [new bag](crate::new_bag).
    ///
    /// Creates a grid with the [standard bonus layout](standard_bonus_layout), a shuffled bag,
    /// and fills each player's rack from the bag. Then selects the first player with
    /// `first_player_selector`.
    ///
    /// When `grid_size` is [None], [DEFAULT_GRID_SIZE] is used.
    ///
    /// # Arguments
    ///
    /// * `players_len`: The number of players in the game.
    /// * `grid_size`: The number of cells along one side of the grid.
    /// * `first_player_selector`: Selects the index of the first player given the number of
    /// players.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyPlayers] Attempting [to start](FirstState::new) with empty players.
    /// * [NewError::Grid] Attempting [to start](FirstState::new) with an illegal grid size.
    /// * [NewError::NotEnoughLetters] Attempting to request more letters for racks
    /// than letters in the bag.
    /// * [NewError::CurrentPlayerOutOfBounds] Attempting to select some current player
    /// who is not in the game.
    ///
    /// # See Also
    ///
    /// * [FirstState::new_random_first_player]
    pub fn new(
        players_len: usize,
        grid_size: Option<usize>,
        first_player_selector: impl FnOnce(usize) -> usize,
    ) -> Result<FirstState, HashSet<NewError>> {
        let grid = FirstState::check(players_len, grid_size.unwrap_or(DEFAULT_GRID_SIZE))?;

        let (bag, racks) = FirstState::new_bag_and_racks(players_len);

        let current_player = first_player_selector(players_len);
        if current_player >= players_len {
            return Err(hash_set! { NewError::CurrentPlayerOutOfBounds {
                current_player,
                players_len,
            }});
        }

        Ok(FirstState {
            bag,
            grid,
            racks,
            current_player,
        })
    }

    /// The index of the player whose turn it is.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// Checks every argument of [FirstState::new] and collects all errors found.
    ///
    /// # Returns
    ///
    /// The empty grid.
    fn check(players_len: usize, grid_size: usize) -> Result<Grid, HashSet<NewError>> {
        let mut errors = HashSet::with_capacity(3);
        if players_len == 0 {
            errors.insert(NewError::EmptyPlayers);
        }

        let requested_letters = players_len.saturating_mul(RACK_CAPACITY);
        if requested_letters > BAG_LEN {
            errors.insert(NewError::NotEnoughLetters {
                requested_letters,
                letters_in_bag: BAG_LEN,
            });
        }

        match Grid::new(grid_size, &standard_bonus_layout()) {
            Ok(grid) if errors.is_empty() => Ok(grid),
            Ok(_) => Err(errors),
            Err(error) => {
                errors.insert(NewError::Grid(error));
                Err(errors)
            }
        }
    }

    /// Creates a shuffled bag, and then draws letters from the bag to fill a rack for each
    /// player.
    fn new_bag_and_racks(players_len: usize) -> (Bag, Racks) {
        let mut rng = rand::thread_rng();
        let mut bag = new_bag(&mut rng);
        let racks = (0..players_len)
            .map(|_| {
                let mut rack = Rack::with_capacity(RACK_CAPACITY);
                refill(&mut rack, &mut bag, &mut rng);
                rack
            })
            .collect();
        (bag, racks)
    }
}
