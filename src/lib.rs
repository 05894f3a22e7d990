//! Concrete structs to represent and protect the state of a crossword-style word game with
//! methods to place words on a square grid and progress through the phases of the game.
//!
//! ## Summary
//!
//! Implemented through `3` different phases of the game: `First`, `Next`, and `Last`. The game
//! starts before and opens with the `First` phase, advances through one or more turns during
//! the `Next` phase, and ends at the `Last` phase. Each player takes turns to advance the game by
//! either [placing](NextState::next_place) a word or [exchanging](NextState::next_exchange)
//! letters. Players earn points for every word their letters form. Each phase of the game
//! offers a different view with some publicly visible and some privately visible properties
//! for each player. The game ends when no player holds any letters.
//! The player with the most points wins.
//!
//! ## What are the phases of the game?
//!
//! * `First`: The first turn of the game where the [grid](Grid) is empty and points
//! only contain `0`s. The first word must cover the [center cell](Grid::center_cell_id).
//! Represented by [FirstState](FirstState).
//! * `Next`: The turns after the first turn where every word must touch a word already on
//! the grid. Each player with letters takes turns being the current player.
//! Represented by [NextState](NextState).
//! * `Last`: The first turn where the game has ended. Represented by
//! [LastState](LastState).
//!
//! ## How is the game created?
//!
//! [FirstState](FirstState) offers the only public endpoint to create the game state.
//! [FirstState::new] and [FirstState::new_random_first_player] create
//! the game before the `First` phase, with a [standard bonus layout](standard_bonus_layout)
//! and a shuffled [bag](new_bag) of `100` letters.
//!
//! ## How is the game advanced?
//!
//! * `First`: The current player [places](FirstState::first_place) the first word to advance
//! the game to the `Next` phase.
//! * `Next`: The current player either [places](NextState::next_place) a word or
//! [exchanges](NextState::next_exchange) letters to advance the game to either the `Next`
//! or `Last` phase.
//! * `Last`: It is not possible to advance the game once the game has ended.
//!
//! The current player is represented as the index of the player whose turn it is in the range
//! `0`..(the number of players). After each turn, the next player in order whose rack is not
//! empty becomes the current player, looping back to `0` when necessary.
//!
//! ### How are words placed?
//!
//! A word is placed from a [placement](Placement) such as `A113` (across from cell `113`) or
//! `D99` (down from cell `99`). [Cell ids](CellId) count from `1` in row-major order.
//!
//! [validate_placement] checks the word against the grid: every letter must fit on the grid
//! without wrapping to another row, agree with any letter it overlaps, and place at least one
//! new letter without running alongside another word. The first word must cover the center
//! cell. Every later word must touch a word already on the grid.
//!
//! Then the current player's rack must supply every new letter. A [wildcard](BLANK) supplies
//! any letter. The word is [committed](commit_placement) to the grid, the spent letters are
//! removed from the rack, and the rack is [refilled](refill) from the bag.
//!
//! ### How are letters exchanged?
//!
//! [Exchange](NextState::next_exchange) letters from the current player's rack with letters
//! drawn at random from the bag, return the exchanged letters to the bag, ignore points, and
//! advance to the next player.
//!
//! ## How are points calculated?
//!
//! The number of points earned by a word is the [score](fn@score) of the word itself plus the
//! score of each perpendicular word formed by a new letter. A word of a single letter is not
//! scored.
//!
//! Each letter scores its [letter score](letter_score) times the
//! [letter multiplier](BonusKind::letter_multiplier) of its cell. The sum is multiplied by the
//! [word multiplier](BonusKind::word_multiplier) of every cell in the word. Letters supplied by
//! a wildcard score `0`. Spending a full rack of [RACK_CAPACITY] letters in one word earns an
//! extra [bingo bonus](BINGO_BONUS).
//!
//! ## How is the game viewed?
//!
//! To obtain an immutable representation of the current state of the game visible to all players,
//! call [FirstState::first_view](FirstState::first_view),
//! [NextState::next_view](NextState::next_view), or [LastState::last_view](LastState::last_view)
//! for the `First`, `Next`, or `Last` phase of the game respectively.
//!
//! [FirstState::get_rack](FirstState::get_rack) and
//! [NextState::get_rack](NextState::get_rack) share private information for each
//! individual player.
//!
//! ## How is the game run?
//!
//! [run] drives a whole game for a slice of [players](Player), asking the current player for
//! input until their move is accepted and sending every player a view at the start of each
//! turn.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. Each state struct
//! implements methods to get mutable references to their properties, helper methods to add
//! random data to specific properties, and methods to set properties for common scenarios.
//! Tests log through `tracing` when `TEST_LOG` or `RUST_LOG` is set.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bonus::*;
pub use consts::*;
pub use first_state::*;
pub use grid::*;
pub use last_state::*;
pub use letter::*;
pub use next_state::*;
pub use place::*;
pub use placement::*;
pub use rack::*;
#[cfg(test)]
pub use random::*;
pub use runtime::*;
pub use score::*;
#[cfg(test)]
pub use test_logging::*;
pub use types::*;
pub use validate::*;

mod bonus;
mod consts;
mod first_state;
mod grid;
mod last_state;
mod letter;
mod next_state;
mod place;
mod placement;
mod rack;
#[cfg(test)]
mod random;
mod runtime;
mod score;
#[cfg(test)]
mod test_logging;
mod types;
mod validate;
