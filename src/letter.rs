use crate::Bag;
use rand::seq::SliceRandom;
use rand::Rng;
use std::iter;

/// The wildcard letter. Held in a [rack](crate::Rack), it can stand in for any letter and is
/// always worth `0` points.
///
/// A letter placed with a wildcard is written to the [grid](crate::Grid) in lowercase so that
/// it keeps scoring `0` in every later word that reuses it.
pub const BLANK: char = '_';

/// The number of distinct letters in the standard distribution, `26` letters and the
/// [wildcard](BLANK).
pub const LETTERS_LEN: usize = 27;

/// The standard letter distribution as `(letter, copies)` pairs.
///
/// # See Also
///
/// * [BAG_LEN]
/// * [new_bag]
pub const LETTER_DISTRIBUTION: [(char, usize); LETTERS_LEN] = [
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
    (BLANK, 2),
];

/// The number of letters in a [new bag](new_bag). `100` letters.
pub const BAG_LEN: usize = {
    let mut bag_len = 0;
    let mut index = 0;
    while index < LETTERS_LEN {
        bag_len += LETTER_DISTRIBUTION[index].1;
        index += 1;
    }
    bag_len
};
const _: () = assert!(BAG_LEN == 100);

/// The points earned for a letter before any [bonus](crate::BonusKind) is applied.
///
/// Uppercase letters have their standard value. The [wildcard](BLANK), lowercase letters
/// (placed with a wildcard), and any other character are worth `0`.
pub fn letter_score(letter: char) -> usize {
    match letter {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}

/// Creates a shuffled bag with every letter of the [standard distribution](LETTER_DISTRIBUTION).
pub fn new_bag<R: Rng + ?Sized>(rng: &mut R) -> Bag {
    let mut bag: Bag = LETTER_DISTRIBUTION
        .into_iter()
        .flat_map(|(letter, copies)| iter::repeat(letter).take(copies))
        .collect();
    bag.shuffle(rng);
    bag
}

/// Removes and returns the letter at a uniformly random position in the bag, or [None] when
/// the bag is empty.
pub fn draw<R: Rng + ?Sized>(bag: &mut Bag, rng: &mut R) -> Option<char> {
    if bag.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..bag.len());
    Some(bag.swap_remove(index))
}
