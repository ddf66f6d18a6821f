//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{SeatError, TurnError};
use crate::hand::{Hand, PlayerHand, Scoring};
use crate::options::TableOptions;
use crate::player::Player;

mod actions;
mod banker;
mod bet;
pub mod state;

pub use actions::{Draw, TurnStart};
pub use banker::BANKER_STANDS_ON;
pub use bet::BetReceipt;
pub use state::{GameState, TurnPhase};

/// A Pontoon round: the deck, the seated players and their hands, and the
/// banker.
///
/// Players take their turns strictly in seat order, then the banker plays,
/// then the round is settled. Every step returns a structured result and
/// rejects out-of-order calls without changing anything.
#[derive(Debug, Clone)]
pub struct Game {
    /// The deck, shuffled once when the game is created.
    deck: Deck,
    /// Table options.
    options: TableOptions,
    /// Current round state.
    state: GameState,
    /// Seated players, indexed by seat.
    players: Vec<Player>,
    /// One hand per seat.
    hands: Vec<PlayerHand>,
    /// Turn progress per seat.
    phases: Vec<TurnPhase>,
    /// Seat whose turn it is.
    current: usize,
    /// The banker's hand.
    banker: Hand,
}

impl Game {
    /// Creates a new game with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::{Game, TableOptions};
    ///
    /// let mut game = Game::new(TableOptions::default(), 42);
    /// let seat = game.join("Ada").unwrap();
    /// assert_eq!(game.player(seat).unwrap().chips(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng, options.shuffle);
        log::debug!("shuffled deck with seed {seed} ({:?})", options.shuffle);
        Self::with_deck(options, deck)
    }

    /// Creates a new game that plays from `deck` as given, without shuffling.
    #[must_use]
    pub const fn with_deck(options: TableOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            state: GameState::Seating,
            players: Vec::new(),
            hands: Vec::new(),
            phases: Vec::new(),
            current: 0,
            banker: Hand::new(),
        }
    }

    /// Seats a new player with the table's starting chips.
    ///
    /// Returns the assigned seat.
    ///
    /// # Errors
    ///
    /// Returns an error once the round has started.
    pub fn join(&mut self, name: impl Into<String>) -> Result<usize, SeatError> {
        if self.state != GameState::Seating {
            return Err(SeatError::InvalidState);
        }

        let seat = self.players.len();
        let player = Player::with_chips(name, self.options.starting_chips);
        log::info!("{} takes seat {seat}", player.name());
        self.players.push(player);
        self.hands.push(PlayerHand::new(seat));
        self.phases.push(TurnPhase::NotStarted);
        Ok(seat)
    }

    /// Closes seating and hands the first turn to seat 0.
    ///
    /// With nobody seated, play passes straight to the banker.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already started.
    pub fn start_round(&mut self) -> Result<(), TurnError> {
        if self.state != GameState::Seating {
            return Err(TurnError::InvalidState);
        }

        self.current = 0;
        self.state = if self.players.is_empty() {
            GameState::BankerTurn
        } else {
            GameState::PlayerTurns
        };
        log::info!("round started with {} player(s)", self.players.len());
        Ok(())
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the seated players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the hand of the player in `seat`.
    #[must_use]
    pub fn hand(&self, seat: usize) -> Option<&PlayerHand> {
        self.hands.get(seat)
    }

    /// Returns the value of the hand in `seat`.
    #[must_use]
    pub fn hand_value(&self, seat: usize) -> Option<u8> {
        self.hands.get(seat).map(|hand| hand.value(&self.deck))
    }

    /// Returns the banker's hand.
    #[must_use]
    pub const fn banker(&self) -> &Hand {
        &self.banker
    }

    /// Returns the value of the banker's hand.
    #[must_use]
    pub fn banker_value(&self) -> u8 {
        self.banker.value(&self.deck)
    }

    /// Returns the turn phase of the player in `seat`.
    #[must_use]
    pub fn phase(&self, seat: usize) -> Option<TurnPhase> {
        self.phases.get(seat).copied()
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` outside the player turns.
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        match self.state {
            GameState::PlayerTurns => Some(self.current),
            _ => None,
        }
    }

    fn ensure_turn(&self, seat: usize) -> Result<TurnPhase, TurnError> {
        if self.state != GameState::PlayerTurns {
            return Err(TurnError::InvalidState);
        }
        let phase = self.phase(seat).ok_or(TurnError::PlayerNotFound)?;
        if seat != self.current {
            return Err(TurnError::NotYourTurn);
        }
        Ok(phase)
    }

    /// Marks the current turn as done and moves to the next seat.
    fn end_turn(&mut self, phase: TurnPhase) {
        let seat = self.current;
        self.phases[seat] = phase;
        log::debug!("seat {seat} finished ({phase:?})");

        self.current += 1;
        if self.current >= self.players.len() {
            self.state = GameState::BankerTurn;
        }
    }
}
