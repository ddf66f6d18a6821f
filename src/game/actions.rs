use crate::card::Card;
use crate::error::TurnError;
use crate::hand::{Scoring, TWENTY_ONE};

use super::{Game, TurnPhase};

/// How a player's turn began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStart {
    /// The first card was dealt and the player must now bet.
    Dealt {
        /// The card dealt.
        card: Card,
        /// The hand value after the card.
        value: u8,
    },
    /// The player has no chips and sits the round out.
    Skipped,
}

/// A card drawn after a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The card drawn.
    pub card: Card,
    /// The hand value after the card.
    pub value: u8,
    /// Whether the player may choose to draw again. When `false` the turn is
    /// over.
    pub may_continue: bool,
}

impl Game {
    /// Starts the turn of the player in `seat`.
    ///
    /// A player without chips is skipped; anyone else is dealt their first
    /// card before any betting.
    ///
    /// # Errors
    ///
    /// Returns an error if players are not taking turns, the player cannot be
    /// found, it is not the player's turn, or the turn has already started.
    pub fn start_turn(&mut self, seat: usize) -> Result<TurnStart, TurnError> {
        if self.ensure_turn(seat)? != TurnPhase::NotStarted {
            return Err(TurnError::InvalidState);
        }

        if !self.players[seat].has_funds() {
            log::info!("{} has no chips and sits out", self.players[seat].name());
            self.end_turn(TurnPhase::Skipped);
            return Ok(TurnStart::Skipped);
        }

        let card = self.hands[seat]
            .add_card(&mut self.deck)
            .ok_or(TurnError::HandFull)?;
        self.phases[seat] = TurnPhase::FirstCardDealt;

        let card = self.deck.card(card);
        let value = self.hands[seat].value(&self.deck);
        log::debug!("seat {seat} first card {card} (value {value})");

        Ok(TurnStart::Dealt { card, value })
    }

    /// Draws the card the player has just bet on.
    ///
    /// The player is offered another card only while they have chips, hold
    /// fewer than five cards and are under 21; otherwise the turn ends here.
    ///
    /// # Errors
    ///
    /// Returns an error if players are not taking turns, the player cannot be
    /// found, it is not the player's turn, no bet has been placed for this
    /// card, or the hand is full.
    pub fn draw(&mut self, seat: usize) -> Result<Draw, TurnError> {
        match self.ensure_turn(seat)? {
            TurnPhase::Drawing => {}
            TurnPhase::FirstCardDealt | TurnPhase::Betting => return Err(TurnError::BetRequired),
            _ => return Err(TurnError::InvalidState),
        }

        let card = self.hands[seat]
            .add_card(&mut self.deck)
            .ok_or(TurnError::HandFull)?;
        let card = self.deck.card(card);

        let hand = &self.hands[seat];
        let value = hand.value(&self.deck);
        let may_continue = self.players[seat].has_funds()
            && hand.cards_remaining() > 0
            && value < TWENTY_ONE;
        log::debug!("seat {seat} draws {card} (value {value})");

        if may_continue {
            self.phases[seat] = TurnPhase::Deciding;
        } else {
            self.end_turn(TurnPhase::TurnOver);
        }

        Ok(Draw {
            card,
            value,
            may_continue,
        })
    }

    /// Records whether the player wants another card.
    ///
    /// Drawing again requires a fresh bet; declining ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if players are not taking turns, the player cannot be
    /// found, it is not the player's turn, or the player has not been offered
    /// a choice.
    pub fn decide(&mut self, seat: usize, draw_again: bool) -> Result<(), TurnError> {
        if self.ensure_turn(seat)? != TurnPhase::Deciding {
            return Err(TurnError::InvalidState);
        }

        if draw_again {
            self.phases[seat] = TurnPhase::Betting;
        } else {
            self.end_turn(TurnPhase::TurnOver);
        }
        Ok(())
    }
}
