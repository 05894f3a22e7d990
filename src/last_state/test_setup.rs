use crate::{
    random_center_word, random_players, random_points, Grid, LastState, Points, Racks,
    DEFAULT_GRID_SIZE, PLAYER_CAPACITY,
};
use rand::Rng;

impl LastState {
    /// Generates an empty [LastState] with no players.
    ///
    /// # Returns
    ///
    /// A [LastState] struct with the properties set to the following:
    /// * `grid`: An empty grid of [DEFAULT_GRID_SIZE] without bonuses.
    /// * `points`: An empty points vector.
    /// * `racks`: An empty racks vector.
    pub fn empty_last_state() -> LastState {
        // capacity hardcoded to highest expected demand during test cases
        LastState {
            grid: Grid::plain(DEFAULT_GRID_SIZE),
            points: Points::with_capacity(PLAYER_CAPACITY),
            racks: Racks::with_capacity(PLAYER_CAPACITY),
        }
    }

    /// Generates a last state with a random, small, non-zero number of players.
    /// The grid holds a random word at its center. All points are a random, medium,
    /// non-zero number. All racks are empty.
    ///
    /// # Returns
    ///
    /// A [LastState] struct with the properties set to the following:
    /// * `grid`: A grid with one random word right of the center.
    /// * `points`: A vector of length players of random, non-zero points.
    /// * `racks`: A vector of length players of empty racks.
    pub fn random_last_state<R: Rng + ?Sized>(rng: &mut R) -> LastState {
        let mut last_state = LastState::empty_last_state();
        random_center_word(rng, &mut last_state.grid);
        random_players(rng, &mut last_state.points, &mut last_state.racks);
        random_points(rng, &mut last_state.points);

        last_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_last_state() {
        let last_state = LastState::empty_last_state();

        assert_eq!(Grid::plain(DEFAULT_GRID_SIZE), last_state.grid);
        assert_eq!(Points::new(), last_state.points);
        assert_eq!(Racks::new(), last_state.racks);
    }

    #[test]
    fn random_last_state() {
        let last_state = LastState::random_last_state(&mut rand::thread_rng());

        assert_eq!(last_state.points.len(), last_state.racks.len());
        assert!(last_state.racks.iter().all(|rack| rack.is_empty()));
        assert!(last_state.points.iter().all(|&points| points > 0));
    }
}
