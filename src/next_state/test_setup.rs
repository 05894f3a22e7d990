use crate::{
    random_bag, random_current_player, random_players, random_points, random_racks, Bag, Grid,
    NextState, Points, Racks, BAG_LEN, DEFAULT_GRID_SIZE, PLAYER_CAPACITY,
};
use rand::Rng;

impl NextState {
    /// Generates an empty [NextState] with no players.
    ///
    /// # Returns
    ///
    /// A [NextState] struct with the properties set to the following:
    /// * `bag`: An empty bag.
    /// * `grid`: An empty grid of [DEFAULT_GRID_SIZE] without bonuses.
    /// * `points`: An empty points vector.
    /// * `racks`: An empty racks vector.
    /// * `current_player`: `0`.
    /// * `words_placed`: `0`.
    pub fn empty_next_state() -> NextState {
        // capacity hardcoded to highest expected demand during test cases
        NextState {
            bag: Bag::with_capacity(BAG_LEN),
            grid: Grid::plain(DEFAULT_GRID_SIZE),
            points: Points::with_capacity(PLAYER_CAPACITY),
            racks: Racks::with_capacity(PLAYER_CAPACITY),
            current_player: 0,
            words_placed: 0,
        }
    }

    /// A mutable reference to `self.grid`.
    pub fn mut_grid(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// A mutable reference to `self.points`.
    pub fn mut_points(&mut self) -> &mut Points {
        &mut self.points
    }

    /// A mutable reference to `self.racks`.
    pub fn mut_racks(&mut self) -> &mut Racks {
        &mut self.racks
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }

    /// A mutable reference to `self.words_placed`.
    pub fn mut_words_placed(&mut self) -> &mut usize {
        &mut self.words_placed
    }

    /// It inserts a random, small, non-zero number of empty racks into racks and
    /// `0`s into points.
    ///
    /// # Returns
    ///
    /// The number of additional points/racks.
    pub fn random_players<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_players(rng, &mut self.points, &mut self.racks)
    }

    /// It inserts a random, small, non-zero number of letters into the bag.
    ///
    /// # Returns
    ///
    /// The number of additional letters in the bag.
    pub fn random_bag<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_bag(rng, &mut self.bag)
    }

    /// Sets each player's points to a random, medium, non-zero number.
    pub fn random_points<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        random_points(rng, &mut self.points)
    }

    /// Pushes the same random, small, non-zero number of letters into
    /// each player's rack.
    ///
    /// # Returns
    ///
    /// The number of additional letters in each player's rack.
    pub fn random_racks<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_racks(rng, &mut self.racks)
    }

    /// Sets the current player to a random number between `0` inclusive and `players` exclusive.
    ///
    /// # Returns
    ///
    /// The index of the player whose turn it is.
    pub fn random_current_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_current_player(rng, &mut self.current_player, self.racks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rack;

    #[test]
    fn empty_next_state() {
        let next_state = NextState::empty_next_state();

        assert_eq!(Bag::new(), next_state.bag);
        assert_eq!(Grid::plain(DEFAULT_GRID_SIZE), next_state.grid);
        assert_eq!(Points::new(), next_state.points);
        assert_eq!(Racks::new(), next_state.racks);
        assert_eq!(0, next_state.current_player);
        assert_eq!(0, next_state.words_placed);
    }

    #[test]
    fn random_players() {
        let mut next_state = NextState::empty_next_state();

        let players = next_state.random_players(&mut rand::thread_rng());

        let racks: Racks = (0..players).map(|_| Rack::new()).collect();
        assert_eq!(racks, next_state.racks);
        assert_eq!(Points::from_elem(0, players), next_state.points);
    }
}
