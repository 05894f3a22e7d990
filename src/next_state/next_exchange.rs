use crate::{draw, Exchanges, NextState};
use itertools::Itertools;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Describes the reasons why [NextState::next_exchange] could not be executed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum NextExchangeError {
    /// Attempting to exchange no letters.
    #[error("no letters to exchange")]
    EmptyLetters,
    /// Attempting to exchange letters not in the player's rack.
    #[error("indexes {illegal_exchanges:?} are not in a rack of {rack_len} letters")]
    IndexesOutOfBounds {
        /// Exchanges where the index is greater than or equal to rack_len.
        illegal_exchanges: Exchanges,
        /// The number of letters in `current_player`'s rack, or the minimum illegal
        /// exchange index.
        rack_len: usize,
    },
    /// Attempting to exchange only illegal letters.
    #[error("no letters in the rack to exchange")]
    NoLegalLetters,
    /// Attempting to exchange more legal letters than letters in bag.
    #[error("cannot exchange {legal_exchanges} letters with a bag of {bag_len}")]
    NotEnoughLetters {
        /// The number of legal letters being exchanged.
        legal_exchanges: usize,
        /// The number of available letters in `bag`.
        bag_len: usize,
    },
}

impl NextState {
    /// Checks whether exchanges matches various error conditions and returns all found errors.
    /// Otherwise, exchanges letters from `current_player`'s rack with letters drawn at random
    /// from `bag`, returns the exchanged letters to `bag`, ignores `points`, and advances
    /// to the next player who holds letters.
    ///
    /// # Arguments
    ///
    /// * `exchanges`: An ordered set of indexes of letters to be exchanged.
    ///
    /// # Errors
    ///
    /// * [NextExchangeError::EmptyLetters] Attempting to exchange no letters.
    /// * [NextExchangeError::IndexesOutOfBounds] Attempting to exchange letters
    /// not in the player's rack.
    /// * [NextExchangeError::NoLegalLetters] Attempting to exchange only illegal letters.
    /// * [NextExchangeError::NotEnoughLetters] Attempting to exchange more legal letters
    /// than letters in bag.
    pub fn next_exchange(
        &mut self,
        exchanges: &Exchanges,
    ) -> Result<(), HashSet<NextExchangeError>> {
        self.check_exchanges(exchanges)?;

        // Cannot filter or drain by letter since exchanges might request a subset of duplicates
        let rack = &mut self.racks[self.current_player];
        let letters_from_rack = exchanges
            .iter()
            .rev()
            .map(|&index| rack.remove(index))
            .collect_vec();

        // Draw before returning letters so that letters do not return into the rack
        let mut rng = rand::thread_rng();
        for _ in 0..letters_from_rack.len() {
            if let Some(letter) = draw(&mut self.bag, &mut rng) {
                rack.push(letter);
            }
        }
        self.bag.extend(letters_from_rack);

        debug!(
            player = self.current_player,
            exchanged = exchanges.len(),
            bag_len = self.bag.len(),
            "letters exchanged"
        );

        if let Some(next_player) = self.next_player_with_letters() {
            self.current_player = next_player;
        }
        Ok(())
    }

    /// Checks whether exchanges matches various error conditions and returns all found errors.
    ///
    /// # Arguments
    ///
    /// * `exchanges`: An ordered set of indexes of letters to be exchanged.
    ///
    /// # Errors
    ///
    /// * [NextExchangeError::EmptyLetters] Attempting to exchange no letters.
    /// * [NextExchangeError::IndexesOutOfBounds] Attempting to exchange letters
    /// not in the player's rack.
    /// * [NextExchangeError::NoLegalLetters] Attempting to exchange only illegal letters.
    /// * [NextExchangeError::NotEnoughLetters] Attempting to exchange more legal letters
    /// than letters in bag.
    fn check_exchanges(&self, exchanges: &Exchanges) -> Result<(), HashSet<NextExchangeError>> {
        let mut errors = HashSet::with_capacity(3);
        if exchanges.is_empty() {
            errors.insert(NextExchangeError::EmptyLetters);
            return Err(errors);
        }

        let rack_len = self.racks[self.current_player].len();
        let illegal_exchanges: Exchanges = exchanges.range(rack_len..).copied().collect();
        if !illegal_exchanges.is_empty() {
            errors.insert(NextExchangeError::IndexesOutOfBounds {
                illegal_exchanges,
                rack_len,
            });
        }

        let legal_exchanges = exchanges.range(..rack_len).count();
        let bag_len = self.bag.len();
        if legal_exchanges == 0 {
            errors.insert(NextExchangeError::NoLegalLetters);
        } else if legal_exchanges > bag_len {
            errors.insert(NextExchangeError::NotEnoughLetters {
                legal_exchanges,
                bag_len,
            });
        }

        if !errors.is_empty() {
            debug!(player = self.current_player, ?errors, "exchange rejected");
            return Err(errors);
        }

        Ok(())
    }
}
