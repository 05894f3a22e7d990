use crate::{commit_placement, Axis, Bag, Grid, Placement, Points, Rack, Racks, RACK_CAPACITY};
use crate::{PLAYER_CAPACITY, BLANK};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// It inserts a random, small, non-zero number of empty racks into racks and
/// `0`s into points.
///
/// Intended to be used during the `Next` and `Last` phases but not during the `First` phase.
///
/// # Returns
///
/// The number of additional points/racks.
pub fn random_players<R: Rng + ?Sized>(
    rng: &mut R,
    points: &mut Points,
    racks: &mut Racks,
) -> usize {
    let players = rng.gen_range(2..=PLAYER_CAPACITY);
    for _ in 0..players {
        points.push(0);
        racks.push(Rack::with_capacity(RACK_CAPACITY));
    }

    players
}

/// An uppercase letter or [wildcard](BLANK) chosen uniformly.
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    let index = rng.gen_range(0..=26u8);
    if index == 26 {
        BLANK
    } else {
        char::from(b'A' + index)
    }
}

/// `len` [random letters](random_letter).
pub fn random_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<char> {
    (0..len).map(|_| random_letter(rng)).collect()
}

/// It inserts a random, small, non-zero number of letters into the bag.
///
/// # Returns
///
/// The number of additional letters in the bag.
pub fn random_bag<R: Rng + ?Sized>(rng: &mut R, bag: &mut Bag) -> usize {
    let bag_len = rng.gen_range(10..20);
    bag.extend(random_letters(rng, bag_len));

    bag_len
}

/// Sets each player's points to a random, medium, non-zero number.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, points: &mut Points) {
    let possible_points = Uniform::from(100..200);
    points.fill_with(|| possible_points.sample(rng));
}

/// Pushes the same random, small, non-zero number of letters into each player's rack
/// without exceeding [RACK_CAPACITY].
///
/// # Returns
///
/// The number of additional letters in each player's rack.
pub fn random_racks<R: Rng + ?Sized>(rng: &mut R, racks: &mut Racks) -> usize {
    let rack_len = rng.gen_range(1..=RACK_CAPACITY);
    for rack in racks {
        rack.extend(random_letters(rng, rack_len));
    }

    rack_len
}

/// If `players` is not `0`, sets the current player to a random number between `0` inclusive
/// and `players` exclusive. Otherwise, does nothing.
///
/// # Returns
///
/// The index of the player whose turn it is.
pub fn random_current_player<R: Rng + ?Sized>(
    rng: &mut R,
    current_player: &mut usize,
    players: usize,
) -> usize {
    if players > 0 {
        *current_player = rng.gen_range(0..players);
    }

    *current_player
}

/// Writes a random word of `2` to `5` uppercase letters horizontally from the
/// [center](Grid::center_cell_id) of a grid which is at least `9` cells wide.
///
/// # Returns
///
/// The word written.
pub fn random_center_word<R: Rng + ?Sized>(rng: &mut R, grid: &mut Grid) -> String {
    let word_len = rng.gen_range(2..=5);
    let word: String = (0..word_len)
        .map(|_| char::from(b'A' + rng.gen_range(0..26u8)))
        .collect();
    commit_placement(
        grid,
        Placement::new(grid.center_cell_id(), Axis::Horizontal),
        &word,
    )
    .expect("a short word should fit right of the center");

    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Occupancy;

    #[test]
    fn random_players_empty() {
        let mut points = Points::with_capacity(PLAYER_CAPACITY);
        let mut racks = Racks::with_capacity(PLAYER_CAPACITY);

        let players = random_players(&mut rand::thread_rng(), &mut points, &mut racks);

        assert_eq!(players, points.len());
        assert_eq!(players, racks.len());

        for player in 0..players {
            assert_eq!(0, points[player]);
            assert!(racks[player].is_empty());
        }
    }

    #[test]
    fn random_letters_in_alphabet() {
        for letter in random_letters(&mut rand::thread_rng(), 100) {
            assert!(letter.is_ascii_uppercase() || letter == BLANK);
        }
    }

    #[test]
    fn random_bag_empty() {
        let mut bag = Bag::new();

        let bag_len = random_bag(&mut rand::thread_rng(), &mut bag);

        assert_eq!(bag.len(), bag_len);
    }

    #[test]
    fn random_points_zeros() {
        let mut points = Points::with_capacity(PLAYER_CAPACITY);

        for _ in 0..points.capacity() {
            points.push(0);
        }

        random_points(&mut rand::thread_rng(), &mut points);

        for point in points {
            assert!(point > 0);
        }
    }

    #[test]
    fn random_racks_empty() {
        let mut racks = Racks::with_capacity(PLAYER_CAPACITY);

        for _ in 0..racks.capacity() {
            racks.push(Rack::with_capacity(RACK_CAPACITY));
        }

        let rack_len = random_racks(&mut rand::thread_rng(), &mut racks);

        for rack in &racks {
            assert_eq!(rack_len, rack.len());
        }
    }

    #[test]
    fn random_current_player_zero_players() {
        let mut rng = rand::thread_rng();
        let mut current_player = rng.gen();

        let unchanged = current_player;
        random_current_player(&mut rng, &mut current_player, 0);

        assert_eq!(unchanged, current_player);
    }

    #[test]
    fn random_current_player_some_players() {
        let mut current_player = 0;

        let random_current_player = random_current_player(
            &mut rand::thread_rng(),
            &mut current_player,
            PLAYER_CAPACITY,
        );

        assert!((0..PLAYER_CAPACITY).contains(&random_current_player));
        assert_eq!(random_current_player, current_player);
    }

    #[test]
    fn random_center_word_on_grid() {
        let mut grid = Grid::plain(15);

        let word = random_center_word(&mut rand::thread_rng(), &mut grid);

        let written: String = (113..113 + word.len())
            .filter_map(|cell_id| grid.cell_at(cell_id, Occupancy::Occupied))
            .filter_map(|cell| cell.letter)
            .collect();
        assert_eq!(word, written);
    }
}
