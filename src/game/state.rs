//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to take their seats.
    Seating,
    /// Players take their turns one after another, in seat order.
    PlayerTurns,
    /// Every player is done; the banker plays out their hand.
    BankerTurn,
    /// The banker has played and the round can be settled.
    RoundOver,
    /// Payouts have been made.
    Settled,
}

/// Where a single player is in their turn.
///
/// A turn runs `NotStarted -> FirstCardDealt -> Drawing -> (Deciding ->
/// Betting -> Drawing)* -> TurnOver`, or goes straight to `Skipped` for a
/// player with no chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// The turn has not begun.
    NotStarted,
    /// The first card is out and the player must bet.
    FirstCardDealt,
    /// The player chose another card and must bet again.
    Betting,
    /// A bet is in and the next card can be drawn.
    Drawing,
    /// Waiting for the player to say whether to draw again.
    Deciding,
    /// The player has finished.
    TurnOver,
    /// The player had no chips and sat the round out.
    Skipped,
}

impl TurnPhase {
    /// Returns whether the player is waiting to place a bet.
    #[must_use]
    pub const fn awaiting_bet(self) -> bool {
        matches!(self, Self::FirstCardDealt | Self::Betting)
    }

    /// Returns whether the player's turn is complete.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::TurnOver | Self::Skipped)
    }
}
