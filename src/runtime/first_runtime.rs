use crate::{FirstState, LastState, NextState, Player};
use either::Either;
use futures::future;
use itertools::Itertools;
use tracing::trace;

/// It repeatedly asks `current_player` for a word, and if the word cannot be placed,
/// it tells the player about the error and asks again. If the word is placed,
/// stops asking and produces the next state of the game.
///
/// Calls [Player::first_get] for an input. Attempts [FirstState::first_place],
/// and if the input is invalid, calls [Player::first_update_place_error].
///
/// # Arguments
///
/// * `players`: A slice of players.
/// * `first_state`: The current state of the game.
///
/// # Errors
///
/// When `current_player` fails to send input or receive an error update.
///
/// # Returns
///
/// The next state of the game, or the last state if the first word ended it.
pub fn first_process_input<P, E>(
    players: &[P],
    mut first_state: FirstState,
) -> Result<Either<NextState, LastState>, E>
where
    P: Player<E>,
{
    let current_player = first_state.current_player();
    let player = &players[current_player];

    loop {
        let (placement, word) = player.first_get()?;
        match first_state.first_place(placement, &word) {
            Ok(next_or_last_state) => return Ok(next_or_last_state),
            Err((same_first_state, place_error)) => {
                first_state = same_first_state;
                trace!(current_player, %place_error, "asking again for the first word");
                // cannot use map_err since E needs to be propagated here
                player.first_update_place_error(
                    &first_state.first_view(),
                    first_state.current_rack(),
                    placement,
                    word,
                    place_error,
                )?;
            }
        }
    }
}

/// Asynchronously sends the current state of the game to [Player]s.
///
/// # Arguments
///
/// * `players`: A slice of [Player]s.
/// * `first_state`: The current state of the game.
///
/// # Errors
///
/// Accumulates all errors from [Player::first_update_view] into a vector.
///
/// # Returns
///
/// An empty tuple if there are no errors; otherwise, a vector of errors.
pub async fn first_send_updates<P, E>(
    players: &[P],
    first_state: &FirstState,
) -> Result<(), Vec<E>>
where
    P: Player<E>,
{
    let first_view = first_state.first_view();
    let update_tasks = players.iter().enumerate().filter_map(|(index, player)| {
        let rack = first_state.get_rack(index)?;
        Some(player.first_update_view(&first_view, rack))
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
