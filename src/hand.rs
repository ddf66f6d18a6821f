//! Banker and player hand representations.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::{CardRef, Deck};
use crate::error::BetError;
use crate::player::Player;

/// Most cards a hand can hold (a five-card trick).
pub const MAX_CARDS: usize = 5;

/// Best possible hand value.
pub const TWENTY_ONE: u8 = 21;

const fn card_points(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=9 => rank,
        _ => 10,
    }
}

fn evaluate(deck: &Deck, cards: &[CardRef]) -> u8 {
    let mut value: u8 = 0;
    let mut ace_used = false;

    for &card in cards {
        let rank = deck.card_rank(card);
        let points = if rank == 1 && ace_used {
            1
        } else {
            card_points(rank)
        };
        if rank == 1 {
            ace_used = true;
        }
        value = value.saturating_add(points);
    }

    // Only the first ace is ever counted soft, so at most one demotion.
    if value > TWENTY_ONE && ace_used {
        value -= 10;
    }

    value
}

/// Scoring shared by the banker's hand and player hands.
pub trait Scoring {
    /// Returns the held card references in draw order.
    fn card_refs(&self) -> &[CardRef];

    /// Calculates the value of the hand.
    ///
    /// Court cards count ten. The first ace counts eleven and any further
    /// aces count one; if the total then exceeds 21, the first ace drops to
    /// one.
    fn value(&self, deck: &Deck) -> u8 {
        evaluate(deck, self.card_refs())
    }

    /// Returns the number of cards in the hand.
    fn len(&self) -> usize {
        self.card_refs().len()
    }

    /// Returns whether the hand is empty.
    fn is_empty(&self) -> bool {
        self.card_refs().is_empty()
    }

    /// Returns how many more cards the hand can take.
    fn cards_remaining(&self) -> usize {
        MAX_CARDS - self.len()
    }

    /// Returns whether the hand is over 21.
    fn is_bust(&self, deck: &Deck) -> bool {
        self.value(deck) > TWENTY_ONE
    }

    /// Returns whether the hand is five cards worth 21 or less.
    fn is_five_card_trick(&self, deck: &Deck) -> bool {
        self.len() == MAX_CARDS && self.value(deck) <= TWENTY_ONE
    }

    /// Resolves the held references into cards.
    fn cards(&self, deck: &Deck) -> Vec<Card> {
        self.card_refs().iter().map(|&card| deck.card(card)).collect()
    }
}

/// A plain hand of up to five cards, as held by the banker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<CardRef>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Draws a card from the deck into the hand.
    ///
    /// Returns `None` without drawing if the hand already holds five cards.
    pub fn add_card(&mut self, deck: &mut Deck) -> Option<CardRef> {
        if self.cards.len() >= MAX_CARDS {
            return None;
        }
        let card = deck.draw();
        self.cards.push(card);
        Some(card)
    }
}

impl Scoring for Hand {
    fn card_refs(&self) -> &[CardRef] {
        &self.cards
    }
}

/// A player's hand: a [`Hand`] plus the chips staked on it.
///
/// The owning [`Player`] is identified by seat and passed in explicitly
/// whenever chips move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHand {
    hand: Hand,
    bet: usize,
    seat: usize,
}

impl PlayerHand {
    /// Creates an empty hand with no bet for the player in `seat`.
    #[must_use]
    pub const fn new(seat: usize) -> Self {
        Self {
            hand: Hand::new(),
            bet: 0,
            seat,
        }
    }

    /// Returns the seat of the owning player.
    #[must_use]
    pub const fn seat(&self) -> usize {
        self.seat
    }

    /// Returns the total staked this round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Draws a card from the deck into the hand.
    ///
    /// Returns `None` without drawing if the hand already holds five cards.
    pub fn add_card(&mut self, deck: &mut Deck) -> Option<CardRef> {
        self.hand.add_card(deck)
    }

    /// Stakes `amount` more from `player` on this hand.
    ///
    /// Returns the new total bet.
    ///
    /// # Errors
    ///
    /// Returns the player's refusal if the amount is zero or cannot be
    /// covered; the bet is left unchanged.
    pub fn place_bet(&mut self, player: &mut Player, amount: usize) -> Result<usize, BetError> {
        let committed = player.commit_bet(amount)?;
        self.bet += committed;
        Ok(self.bet)
    }

    /// Pays an ordinary win: returns the stake plus the same again.
    ///
    /// Returns the winnings, which equal the bet.
    pub fn payout(&self, player: &mut Player) -> usize {
        player.update_balance(self.bet.saturating_mul(2));
        self.bet
    }

    /// Pays a Pontoon or five-card trick at two to one plus the stake.
    ///
    /// Returns the winnings, twice the bet.
    pub fn pay_double(&self, player: &mut Player) -> usize {
        player.update_balance(self.bet.saturating_mul(3));
        self.bet.saturating_mul(2)
    }
}

impl Scoring for PlayerHand {
    fn card_refs(&self) -> &[CardRef] {
        self.hand.card_refs()
    }
}
