use crate::{
    Exchanges, FirstState, FirstView, LastState, LastView, NextExchangeError, NextView,
    PlaceError, PlaceOrExchange, Placement, Rack,
};
use async_trait::async_trait;
use either::Either;
use std::collections::HashSet;
use thiserror::Error;

pub use first_runtime::*;
pub use last_runtime::*;
pub use next_runtime::*;

mod first_runtime;
mod last_runtime;
mod next_runtime;

/// Defines `(phase)_get` and `(phase)_update_(kind)` methods for each phase and error kind
/// of the game where appropriate. There are `first`, `next`, and `last` phases
/// and `view`, `place_error`, and `exchange_errors` kinds.
///
/// `(phase)_get` methods block execution until getting input.
/// `(phase)_update_(place_error|exchange_errors)` methods block execution until updating output.
/// `(phase)_update_view` methods may execute concurrently with other player updates.
///
/// # Errors
///
/// The implementor of [Player] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated invalid inputs. When a method
/// call fails, the runtime is stopped, and an error is returned and propagated out of the runtime
/// and back to the calling client code.
#[async_trait(?Send)]
pub trait Player<E> {
    /// On the first turn, gets a [placement](Placement) and a word from the current player.
    fn first_get(&self) -> Result<(Placement, String), E>;

    /// When a call to [FirstState::first_place] fails, updates `current_player` with
    /// the state of the game, their rack, their word, and the reason why their word could
    /// not be placed.
    fn first_update_place_error<'a>(
        &self,
        first_view: &'a FirstView<'a>,
        rack: &'a Rack,
        placement: Placement,
        word: String,
        place_error: PlaceError,
    ) -> Result<(), E>;

    /// During the first turn with game state [FirstState], updates each player with
    /// the state of the game and their rack.
    async fn first_update_view<'a>(
        &self,
        first_view: &'a FirstView<'a>,
        rack: &'a Rack,
    ) -> Result<(), E>;

    /// On the next turns, gets [PlaceOrExchange] from the current player.
    fn next_get(&self) -> Result<PlaceOrExchange, E>;

    /// When a call to [NextState::next_place](crate::NextState::next_place) fails, updates
    /// `current_player` with the state of the game, their rack, their word, and the reason
    /// why their word could not be placed.
    fn next_update_place_error<'a>(
        &self,
        next_view: &'a NextView<'a>,
        rack: &'a Rack,
        placement: Placement,
        word: String,
        place_error: PlaceError,
    ) -> Result<(), E>;

    /// When a call to [NextState::next_exchange](crate::NextState::next_exchange) fails,
    /// updates `current_player` with the state of the game, their rack, their exchange, and
    /// the reasons why their exchange could not be executed.
    fn next_update_exchange_errors<'a>(
        &self,
        next_view: &'a NextView<'a>,
        rack: &'a Rack,
        exchanges: Exchanges,
        exchange_errors: HashSet<NextExchangeError>,
    ) -> Result<(), E>;

    /// During the next turns with game state [NextState](crate::NextState), updates each
    /// player with the state of the game and their rack.
    async fn next_update_view<'a>(
        &self,
        next_view: &'a NextView<'a>,
        rack: &'a Rack,
    ) -> Result<(), E>;

    /// After the last turn with game state [LastState], updates each player with the final
    /// state of the game.
    async fn last_update_view<'a>(&self, last_view: &'a LastView<'a>) -> Result<(), E>;
}

/// Describes the reason why [run] stopped before the game ended.
#[derive(Debug, Error)]
pub enum RunError<E> {
    /// The number of players does not match the number of racks in the game.
    #[error("{players_len} players cannot play a game of {racks_len} racks")]
    PlayersMismatch {
        /// The number of players given to [run].
        players_len: usize,
        /// The number of racks in the game.
        racks_len: usize,
    },
    /// The current player failed to send input or receive an error update.
    #[error("current player failed")]
    Input(E),
    /// Some players failed to receive a view update.
    #[error("{} players failed to receive an update", .0.len())]
    Updates(Vec<E>),
}

/// Drives a game from `first_state` until it ends. Every player is sent a view at the start
/// of each turn, the current player is asked for input until their move is accepted, and
/// every player is sent the final view when no player holds any letters.
///
/// # Arguments
///
/// * `players`: A slice of players where each player's index matches their rack.
/// * `first_state`: The game before the first word is placed.
///
/// # Errors
///
/// * [RunError::PlayersMismatch] When `players` and the game's racks differ in length.
/// * [RunError::Input] When the current player fails to send input or receive an error update.
/// * [RunError::Updates] When any player fails to receive a view update.
///
/// # Returns
///
/// The last state of the game.
pub async fn run<P, E>(players: &[P], first_state: FirstState) -> Result<LastState, RunError<E>>
where
    P: Player<E>,
{
    let racks_len = first_state.first_view().rack_lens.len();
    if players.len() != racks_len {
        return Err(RunError::PlayersMismatch {
            players_len: players.len(),
            racks_len,
        });
    }

    first_send_updates(players, &first_state)
        .await
        .map_err(RunError::Updates)?;
    let mut next_or_last_state =
        first_process_input(players, first_state).map_err(RunError::Input)?;

    loop {
        let next_state = match next_or_last_state {
            Either::Left(next_state) => next_state,
            Either::Right(last_state) => {
                last_send_updates(players, &last_state)
                    .await
                    .map_err(RunError::Updates)?;
                return Ok(last_state);
            }
        };

        next_send_updates(players, &next_state)
            .await
            .map_err(RunError::Updates)?;
        next_or_last_state = next_process_input(players, next_state).map_err(RunError::Input)?;
    }
}
