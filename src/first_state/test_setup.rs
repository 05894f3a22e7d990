use crate::{
    random_bag, random_current_player, random_racks, Bag, FirstState, Grid, Rack, Racks,
    BAG_LEN, DEFAULT_GRID_SIZE, PLAYER_CAPACITY, RACK_CAPACITY,
};
use rand::Rng;

impl FirstState {
    /// Generates an empty [FirstState] with no players.
    ///
    /// # Returns
    ///
    /// A [FirstState] struct with the properties set to the following:
    /// * `bag`: An empty bag.
    /// * `grid`: An empty grid of [DEFAULT_GRID_SIZE] without bonuses.
    /// * `racks`: An empty racks vector.
    /// * `current_player`: `0`.
    pub fn empty_first_state() -> FirstState {
        // capacity hardcoded to highest expected demand during test cases
        FirstState {
            bag: Bag::with_capacity(BAG_LEN),
            grid: Grid::plain(DEFAULT_GRID_SIZE),
            racks: Racks::with_capacity(PLAYER_CAPACITY),
            current_player: 0,
        }
    }

    /// A mutable reference to `self.racks`.
    pub fn mut_racks(&mut self) -> &mut Racks {
        &mut self.racks
    }

    /// It inserts a random, small, non-zero number of empty racks into racks.
    ///
    /// # Returns
    ///
    /// The number of additional racks.
    pub fn random_players<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let players = rng.gen_range(2..=PLAYER_CAPACITY);
        for _ in 0..players {
            self.racks.push(Rack::with_capacity(RACK_CAPACITY));
        }

        players
    }

    /// It inserts a random, small, non-zero number of letters into the bag.
    ///
    /// # Returns
    ///
    /// The number of additional letters in the bag.
    pub fn random_bag<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_bag(rng, &mut self.bag)
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

    #[test]
    fn empty_first_state() {
        let first_state = FirstState::empty_first_state();

        assert_eq!(Bag::new(), first_state.bag);
        assert_eq!(Grid::plain(DEFAULT_GRID_SIZE), first_state.grid);
        assert_eq!(Racks::new(), first_state.racks);
        assert_eq!(0, first_state.current_player);
    }

    #[test]
    fn random_players() {
        let mut first_state = FirstState::empty_first_state();

        let players = first_state.random_players(&mut rand::thread_rng());

        let racks: Racks = (0..players).map(|_| Rack::new()).collect();
        assert_eq!(racks, first_state.racks);
    }

    #[test]
    fn random_current_player_in_bounds() {
        let mut rng = rand::thread_rng();
        let mut first_state = FirstState::empty_first_state();
        let players = first_state.random_players(&mut rng);

        let current_player = first_state.random_current_player(&mut rng);

        assert!(current_player < players);
    }
}
