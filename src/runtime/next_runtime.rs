use crate::{LastState, NextState, PlaceOrExchange, Player};
use either::Either;
use futures::future;
use itertools::Itertools;
use tracing::trace;

/// It repeatedly asks `current_player` for a word or an exchange, and if it is invalid,
/// it tells the player about the error and asks again. If the word is placed or the letters
/// are exchanged, stops asking and produces the next state of the game.
///
/// Calls [Player::next_get] for an input. Attempts either [NextState::next_place]
/// or [NextState::next_exchange] depending on the input, and if the input is invalid, calls
/// [Player::next_update_place_error] or [Player::next_update_exchange_errors] respectively.
///
/// # Arguments
///
/// * `players`: A slice of players.
/// * `next_state`: The current state of the game.
///
/// # Errors
///
/// When `current_player` fails to send input or receive an error update.
///
/// # Returns
///
/// The next state of the game, or the last state if the move ended it.
pub fn next_process_input<P, E>(
    players: &[P],
    mut next_state: NextState,
) -> Result<Either<NextState, LastState>, E>
where
    P: Player<E>,
{
    let current_player = next_state.current_player();
    let player = &players[current_player];

    loop {
        match player.next_get()? {
            PlaceOrExchange::Place(placement, word) => {
                match next_state.next_place(placement, &word) {
                    Ok(next_or_last_state) => return Ok(next_or_last_state),
                    Err((same_next_state, place_error)) => {
                        next_state = same_next_state;
                        trace!(current_player, %place_error, "asking again for a move");
                        // cannot use map_err since E needs to be propagated here
                        player.next_update_place_error(
                            &next_state.next_view(),
                            next_state.current_rack(),
                            placement,
                            word,
                            place_error,
                        )?;
                    }
                }
            }
            PlaceOrExchange::Exchange(exchanges) => match next_state.next_exchange(&exchanges) {
                Ok(()) => return Ok(Either::Left(next_state)),
                Err(exchange_errors) => {
                    // cannot use map_err since E needs to be propagated here
                    player.next_update_exchange_errors(
                        &next_state.next_view(),
                        next_state.current_rack(),
                        exchanges,
                        exchange_errors,
                    )?;
                }
            },
        }
    }
}

/// Asynchronously sends the current state of the game to [Player]s.
///
/// # Arguments
///
/// * `players`: A slice of [Player]s.
/// * `next_state`: The current state of the game.
///
/// # Errors
///
/// Accumulates all errors from [Player::next_update_view] into a vector.
pub async fn next_send_updates<P, E>(players: &[P], next_state: &NextState) -> Result<(), Vec<E>>
where
    P: Player<E>,
{
    let next_view = next_state.next_view();
    let update_tasks = players.iter().enumerate().filter_map(|(index, player)| {
        let rack = next_state.get_rack(index)?;
        Some(player.next_update_view(&next_view, rack))
    });

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}
