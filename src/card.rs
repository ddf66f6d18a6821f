//! Card types.

use core::fmt;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
const RANKS: u8 = 13;

/// Card suit, in identity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, ordered by `id div 13`.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Clubs, Self::Diamonds, Self::Spades];

    /// Returns the suit name as shown to players.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
        }
    }

    const fn index(self) -> u8 {
        match self {
            Self::Hearts => 0,
            Self::Clubs => 1,
            Self::Diamonds => 2,
            Self::Spades => 3,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card, identified by a number in `0..52`.
///
/// Rank and suit are derived from the identity: `rank = 1 + id % 13` and
/// `suit = id / 13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Creates a card from its identity.
    ///
    /// Returns `None` if `id` is not below [`DECK_SIZE`].
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < DECK_SIZE {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Identity for a slot index already known to be below [`DECK_SIZE`].
    pub(crate) const fn from_slot(slot: usize) -> Self {
        Self((slot % DECK_SIZE) as u8)
    }

    /// Creates a card from a suit and a rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    ///
    /// Returns `None` if the rank is outside `1..=13`.
    #[must_use]
    pub const fn of(suit: Suit, rank: u8) -> Option<Self> {
        if rank == 0 || rank > RANKS {
            return None;
        }
        Some(Self(suit.index() * RANKS + rank - 1))
    }

    /// Returns the card identity.
    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Returns the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        1 + self.0 % RANKS
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match self.0 / RANKS {
            0 => Suit::Hearts,
            1 => Suit::Clubs,
            2 => Suit::Diamonds,
            _ => Suit::Spades,
        }
    }
}

impl fmt::Display for Card {
    /// Formats the card as `"<RankName> of <Suit>"`, e.g. `"Queen of Clubs"` or `"7 of Hearts"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            1 => f.write_str("Ace")?,
            11 => f.write_str("Jack")?,
            12 => f.write_str("Queen")?,
            13 => f.write_str("King")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, " of {}", self.suit())
    }
}
