//! Players and their chip balances.

use alloc::string::String;

use crate::error::BetError;

/// Chips every player starts with unless the table says otherwise.
pub const STARTING_CHIPS: usize = 1000;

/// Largest starting balance. A double payout on a full stake still fits.
pub const MAX_STARTING_CHIPS: usize = usize::MAX / 3;

/// A player seated at the table.
///
/// The balance can only go down through [`Player::commit_bet`], which refuses
/// anything the player cannot cover, so it never becomes negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    chips: usize,
}

impl Player {
    /// Creates a player with [`STARTING_CHIPS`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_chips(name, STARTING_CHIPS)
    }

    /// Creates a player with the given balance, capped at
    /// [`MAX_STARTING_CHIPS`].
    #[must_use]
    pub fn with_chips(name: impl Into<String>, chips: usize) -> Self {
        Self {
            name: name.into(),
            chips: chips.min(MAX_STARTING_CHIPS),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Takes `amount` out of the balance to stake on a hand.
    ///
    /// Returns the amount committed.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the balance untouched, if the amount is zero
    /// or larger than the balance.
    pub const fn commit_bet(&mut self, amount: usize) -> Result<usize, BetError> {
        if amount == 0 {
            return Err(BetError::NotPositive);
        }
        if amount > self.chips {
            return Err(BetError::InsufficientFunds);
        }

        self.chips -= amount;
        Ok(amount)
    }

    /// Returns whether the player has any chips left.
    #[must_use]
    pub const fn has_funds(&self) -> bool {
        self.chips > 0
    }

    /// Credits winnings to the balance.
    pub const fn update_balance(&mut self, amount: usize) {
        self.chips = self.chips.saturating_add(amount);
    }
}
