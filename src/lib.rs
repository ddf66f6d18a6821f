//! A Pontoon table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round of Pontoon, the
//! British take on blackjack: each player bets and draws in turn, the banker
//! draws to 16, and every hand is settled against the banker's. The
//! [`session`] module drives a game against any [`Table`], and with the `std`
//! feature [`Console`] plays it on a terminal.
//!
//! # Example
//!
//! ```
//! use pontoon::{Game, TableOptions, TurnStart};
//!
//! let mut game = Game::new(TableOptions::default(), 42);
//! let seat = game.join("Ada").unwrap();
//! game.start_round().unwrap();
//!
//! assert!(matches!(game.start_turn(seat), Ok(TurnStart::Dealt { .. })));
//! game.bet(seat, 100).unwrap();
//! let draw = game.draw(seat).unwrap();
//! if draw.may_continue {
//!     game.decide(seat, false).unwrap();
//! }
//!
//! game.banker_play().unwrap();
//! let result = game.settle().unwrap();
//! assert_eq!(result.players.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::{CardRef, Deck, ShuffleMode};
pub use error::{BankerError, BetError, SeatError, SettleError, TurnError};
pub use event::Event;
pub use game::{BANKER_STANDS_ON, BetReceipt, Draw, Game, GameState, TurnPhase, TurnStart};
pub use hand::{Hand, MAX_CARDS, PlayerHand, Scoring, TWENTY_ONE};
pub use options::TableOptions;
pub use player::{MAX_STARTING_CHIPS, Player, STARTING_CHIPS};
pub use result::{Outcome, PlayerResult, RoundResult};
pub use session::{PlayError, Table};
