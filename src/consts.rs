use konst::primitive::parse_usize;
use konst::{option, result};

/// The amount of extra points given when a single [placement](crate::Placement) spends
/// exactly [RACK_CAPACITY] letters. `50` additional points, counted once per placement.
///
/// # See Also
///
/// * [score](fn@crate::score)
/// * [FirstState::first_place](crate::FirstState::first_place)
/// * [NextState::next_place](crate::NextState::next_place)
pub const BINGO_BONUS: usize = 50;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. When there are more than
/// `PLAYER_CAPACITY` players, player data will be heap allocated. If the environment variable
/// named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `4`.
///
/// # See Also
///
/// * [FirstState](crate::FirstState)
/// * [NextState](crate::NextState)
/// * [LastState](crate::LastState)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
/// The number of letters each player holds in their [rack](crate::Rack) after a refill.
/// Spending exactly this many letters in one [placement](crate::Placement) earns the
/// [bingo bonus](BINGO_BONUS). If the environment variable named `RACK_CAPACITY` is present at
/// compile time and is able to be parsed into a `usize`, set to the value of the environment
/// variable. Otherwise, it is set to `7`.
///
/// # Panics
///
/// * When the given value is `0`
///
/// # See Also
///
/// * [refill](crate::refill)
/// * [FirstState::new](crate::FirstState::new)
pub const RACK_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("RACK_CAPACITY"), |str| result::ok!(parse_usize(
        str
    ))),
    7
);
const _: () = assert!(RACK_CAPACITY > 0);
/// The largest number of cells along one side of a [grid](crate::Grid). If the environment
/// variable named `GRID_SIZE_LIMIT` is present at compile time and is able to be parsed into
/// a `usize`, set to the value of the environment variable. Otherwise, it is set to `101`.
///
/// Cells are allocated eagerly, so a grid costs `GRID_SIZE_LIMIT` squared cells at most.
///
/// # See Also
///
/// * [Grid::new](crate::Grid::new)
pub const GRID_SIZE_LIMIT: usize = option::unwrap_or!(
    option::and_then!(option_env!("GRID_SIZE_LIMIT"), |str| result::ok!(
        parse_usize(str)
    )),
    101
);
/// The number of cells along one side of the [grid](crate::Grid) when no size is given to
/// [FirstState::new](crate::FirstState::new). If the environment variable named
/// `DEFAULT_GRID_SIZE` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `15`.
///
/// # Panics
///
/// * When the given value is `0` or greater than [GRID_SIZE_LIMIT]
pub const DEFAULT_GRID_SIZE: usize = option::unwrap_or!(
    option::and_then!(option_env!("DEFAULT_GRID_SIZE"), |str| result::ok!(
        parse_usize(str)
    )),
    15
);
const _: () = assert!(DEFAULT_GRID_SIZE > 0);
const _: () = assert!(DEFAULT_GRID_SIZE <= GRID_SIZE_LIMIT);
// cells are addressed by usize ids up to the squared size
const _: () = assert!(usize::MAX / GRID_SIZE_LIMIT >= GRID_SIZE_LIMIT);
