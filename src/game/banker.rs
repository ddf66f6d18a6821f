use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{BankerError, SettleError};
use crate::hand::{MAX_CARDS, Scoring, TWENTY_ONE};
use crate::result::{Outcome, PlayerResult, RoundResult};

use super::{Game, GameState};

/// The banker stands once their hand reaches this value.
pub const BANKER_STANDS_ON: u8 = 16;

/// Cards a player needs for 21 to count as Pontoon.
const PLAYER_PONTOON_CARDS: usize = 3;

/// Cards the banker needs for 21 to count as Pontoon.
const BANKER_PONTOON_CARDS: usize = 2;

impl Game {
    /// Banker plays their hand.
    ///
    /// The banker draws until reaching 16 or holding five cards; there is no
    /// choice involved.
    ///
    /// Returns the cards drawn by the banker.
    ///
    /// # Errors
    ///
    /// Returns an error unless every player has finished their turn and the
    /// banker has not yet played.
    pub fn banker_play(&mut self) -> Result<Vec<Card>, BankerError> {
        if self.state != GameState::BankerTurn {
            return Err(BankerError::InvalidState);
        }

        let mut drawn = Vec::new();
        while self.banker.cards_remaining() > 0 && self.banker_value() < BANKER_STANDS_ON {
            let Some(card) = self.banker.add_card(&mut self.deck) else {
                break;
            };
            drawn.push(self.deck.card(card));
        }

        log::info!(
            "banker stands with {} card(s) on {}",
            self.banker.len(),
            self.banker_value()
        );
        self.state = GameState::RoundOver;
        Ok(drawn)
    }

    /// Settles every hand against the banker and pays the winners.
    ///
    /// A banker Pontoon beats the whole table. Otherwise each player is paid,
    /// in order of precedence, for a three-card 21 (two to one), a five-card
    /// trick the banker cannot match (two to one), or a value above the
    /// banker's without going bust (even money). Ties and busts pay nothing.
    ///
    /// # Errors
    ///
    /// Returns an error unless the banker has played and the round has not
    /// already been settled.
    pub fn settle(&mut self) -> Result<RoundResult, SettleError> {
        if self.state != GameState::RoundOver {
            return Err(SettleError::InvalidState);
        }

        let banker_value = self.banker_value();
        let banker_pontoon =
            self.banker.len() == BANKER_PONTOON_CARDS && banker_value == TWENTY_ONE;
        let banker_five_card_trick = self.banker.is_five_card_trick(&self.deck);

        let mut players = Vec::with_capacity(self.players.len());
        for (hand, player) in self.hands.iter().zip(self.players.iter_mut()) {
            let value = hand.value(&self.deck);

            let (outcome, winnings) = if banker_pontoon {
                (Outcome::BankerPontoon, 0)
            } else if hand.len() == PLAYER_PONTOON_CARDS && value == TWENTY_ONE {
                (Outcome::Pontoon, hand.pay_double(player))
            } else if hand.len() == MAX_CARDS && value <= TWENTY_ONE && !banker_five_card_trick {
                (Outcome::FiveCardTrick, hand.pay_double(player))
            } else if value > banker_value && value <= TWENTY_ONE {
                (Outcome::Win, hand.payout(player))
            } else {
                (Outcome::Lose, 0)
            };

            log::info!("{} {outcome:?} on {value}, wins {winnings}", player.name());
            players.push(PlayerResult {
                seat: hand.seat(),
                outcome,
                bet: hand.bet(),
                winnings,
                value,
                balance: player.chips(),
            });
        }

        self.state = GameState::Settled;

        Ok(RoundResult {
            players,
            banker_value,
            banker_pontoon,
            banker_five_card_trick,
        })
    }
}
