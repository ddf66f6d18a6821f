//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Players can only join before the round starts.
    #[error("players can only join before the round starts")]
    InvalidState,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero or negative.
    #[error("bet amount must be positive")]
    NotPositive,
    /// Bet amount exceeds the player's chips.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// A bet must be placed before drawing.
    #[error("a bet must be placed before drawing")]
    BetRequired,
    /// The hand already holds five cards.
    #[error("the hand already holds five cards")]
    HandFull,
}

/// Errors that can occur during the banker's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BankerError {
    /// Players are still taking their turns, or the banker has already played.
    #[error("invalid game state for the banker's turn")]
    InvalidState,
}

/// Errors that can occur when settling the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The banker has not played yet, or the round is already settled.
    #[error("invalid game state for settlement")]
    InvalidState,
}
