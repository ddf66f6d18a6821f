use crate::error::BetError;

use super::{Game, GameState, TurnPhase};

/// An accepted bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetReceipt {
    /// Chips committed by this bet.
    pub committed: usize,
    /// Total staked on the hand so far this round.
    pub total_bet: usize,
    /// The player's balance after the bet.
    pub balance: usize,
}

impl Game {
    /// Places a bet for the player whose turn it is.
    ///
    /// A bet is required after the first card and again before every further
    /// card. Bets accumulate on the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if players are not taking turns, the player cannot be
    /// found, it is not the player's turn or they are not due to bet, the
    /// amount is zero, or the player lacks the funds. A rejected bet changes
    /// nothing and may be retried.
    pub fn bet(&mut self, seat: usize, amount: usize) -> Result<BetReceipt, BetError> {
        if self.state != GameState::PlayerTurns {
            return Err(BetError::InvalidState);
        }
        let phase = self.phase(seat).ok_or(BetError::PlayerNotFound)?;
        if seat != self.current {
            return Err(BetError::NotYourTurn);
        }
        if !phase.awaiting_bet() {
            return Err(BetError::InvalidState);
        }

        let player = &mut self.players[seat];
        let total_bet = self.hands[seat].place_bet(player, amount)?;
        let balance = player.chips();
        self.phases[seat] = TurnPhase::Drawing;
        log::debug!("seat {seat} bets {amount} (total {total_bet}, balance {balance})");

        Ok(BetReceipt {
            committed: amount,
            total_bet,
            balance,
        })
    }
}
