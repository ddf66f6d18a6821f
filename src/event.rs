//! Events reported to the table while a round is played.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::BetError;
use crate::game::BetReceipt;
use crate::result::RoundResult;

/// Something that happened at the table, for the presentation layer to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A player took a seat.
    PlayerSeated {
        /// The assigned seat.
        seat: usize,
        /// The player's name.
        name: String,
    },
    /// A player's turn began.
    TurnStarted {
        /// The player's seat.
        seat: usize,
    },
    /// A player has no chips and sits the round out.
    PlayerBroke {
        /// The player's seat.
        seat: usize,
    },
    /// A player received a card.
    CardDealt {
        /// The player's seat.
        seat: usize,
        /// Whether this was the first card of the turn.
        first: bool,
        /// The whole hand, in draw order.
        hand: Vec<Card>,
        /// The hand value.
        value: u8,
    },
    /// A bet was accepted.
    BetAccepted {
        /// The player's seat.
        seat: usize,
        /// The accepted bet.
        receipt: BetReceipt,
    },
    /// A bet was refused; the player will be asked again.
    BetRejected {
        /// The player's seat.
        seat: usize,
        /// Why the bet was refused.
        error: BetError,
        /// The player's unchanged balance.
        balance: usize,
    },
    /// A player's turn ended.
    TurnFinished {
        /// The player's seat.
        seat: usize,
    },
    /// The banker finished drawing.
    BankerPlayed {
        /// The banker's hand, in draw order.
        hand: Vec<Card>,
        /// The hand value.
        value: u8,
    },
    /// The round was settled.
    RoundSettled(RoundResult),
}
