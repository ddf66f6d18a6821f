//! The single 52-card deck used for a session.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// How [`Deck::shuffle`] permutes the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShuffleMode {
    /// Fisher-Yates shuffle; every permutation is equally likely.
    #[default]
    Uniform,
    /// Swap each position with a random position anywhere in the deck.
    ///
    /// Reproduces the classic table shuffle, which slightly favours some
    /// orderings over others.
    SwapAny,
}

/// A reference to a card slot in the deck, as returned by [`Deck::draw`].
///
/// Hands hold references rather than cards; resolve them with [`Deck::card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardRef(u8);

impl CardRef {
    /// Returns the position in the deck this reference points at.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An ordered deck of the 52 card identities with a draw cursor.
///
/// The cursor wraps back to the first slot after the last card has been
/// drawn, so the deck never runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    top_card: usize,
}

impl Deck {
    /// Creates an unshuffled deck with identities `0..52` in order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: core::array::from_fn(Card::from_slot),
            top_card: 0,
        }
    }

    /// Creates a deck whose first draws are `top`, in order.
    ///
    /// The remaining cards follow in identity order. Returns `None` if `top`
    /// repeats a card.
    #[must_use]
    pub fn stacked(top: &[Card]) -> Option<Self> {
        let mut seen = [false; DECK_SIZE];
        let mut cards = [Card::from_slot(0); DECK_SIZE];
        let mut next = 0;

        for &card in top {
            let id = card.id() as usize;
            if seen[id] {
                return None;
            }
            seen[id] = true;
            cards[next] = card;
            next += 1;
        }

        for id in (0..DECK_SIZE).filter(|&id| !seen[id]) {
            cards[next] = Card::from_slot(id);
            next += 1;
        }

        Some(Self { cards, top_card: 0 })
    }

    /// Shuffles the deck in place using the given random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, mode: ShuffleMode) {
        match mode {
            ShuffleMode::Uniform => self.cards.shuffle(rng),
            ShuffleMode::SwapAny => {
                for i in 0..DECK_SIZE {
                    let swap = rng.random_range(0..DECK_SIZE);
                    self.cards.swap(i, swap);
                }
            }
        }
    }

    /// Draws the top card and advances the cursor, wrapping after the 52nd draw.
    pub fn draw(&mut self) -> CardRef {
        let drawn = CardRef(self.top_card as u8);
        self.top_card += 1;
        if self.top_card >= DECK_SIZE {
            self.top_card = 0;
        }
        drawn
    }

    /// Returns the card in the referenced slot.
    #[must_use]
    pub const fn card(&self, card: CardRef) -> Card {
        self.cards[card.index()]
    }

    /// Returns the rank of the referenced card.
    #[must_use]
    pub const fn card_rank(&self, card: CardRef) -> u8 {
        self.card(card).rank()
    }

    /// Returns the suit of the referenced card.
    #[must_use]
    pub const fn card_suit(&self, card: CardRef) -> Suit {
        self.card(card).suit()
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Returns the position of the next card to be drawn.
    #[must_use]
    pub const fn top_card(&self) -> usize {
        self.top_card
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
