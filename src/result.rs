//! Round result types for settlement.

use alloc::vec::Vec;

/// How a player's hand fared against the banker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Three cards worth exactly 21; pays two to one.
    Pontoon,
    /// Five cards worth 21 or less against a banker without one; pays two to one.
    FiveCardTrick,
    /// Beat the banker's value without going bust; pays even money.
    Win,
    /// Bust, tied, or beaten by the banker.
    Lose,
    /// The banker made Pontoon, so nobody is paid.
    BankerPontoon,
}

impl Outcome {
    /// Returns whether the outcome pays the player.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Pontoon | Self::FiveCardTrick | Self::Win)
    }
}

/// Result for a single player after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player's seat.
    pub seat: usize,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// Total staked on the hand.
    pub bet: usize,
    /// Winnings reported to the player (excluding the returned stake).
    pub winnings: usize,
    /// The player's final hand value.
    pub value: u8,
    /// The player's balance after settlement.
    pub balance: usize,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The banker's final hand value.
    pub banker_value: u8,
    /// Whether the banker made Pontoon.
    pub banker_pontoon: bool,
    /// Whether the banker made a five-card trick.
    pub banker_five_card_trick: bool,
}
