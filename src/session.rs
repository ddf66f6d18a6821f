//! The game loop, driven against a [`Table`] that supplies input and shows
//! events.

use alloc::string::String;

use thiserror::Error;

use crate::error::{BankerError, BetError, SeatError, SettleError, TurnError};
use crate::event::Event;
use crate::game::{BetReceipt, Game, TurnStart};
use crate::hand::Scoring;
use crate::options::TableOptions;
use crate::player::Player;
use crate::result::RoundResult;

/// The players' side of the table: where answers come from and where events
/// go.
pub trait Table {
    /// Error raised when input cannot be obtained or output cannot be shown.
    type Error;

    /// Asks how many players will be playing.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be obtained.
    fn player_count(&mut self) -> Result<usize, Self::Error>;

    /// Asks the player about to take `seat` for their name.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be obtained.
    fn player_name(&mut self, seat: usize) -> Result<String, Self::Error>;

    /// Asks the player in `seat` how much to bet.
    ///
    /// Zero and negative answers are refused and asked again.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be obtained.
    fn bet_amount(&mut self, seat: usize, balance: usize) -> Result<i64, Self::Error>;

    /// Asks the player in `seat` whether to draw another card.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be obtained.
    fn draw_again(&mut self, seat: usize) -> Result<bool, Self::Error>;

    /// Shows an event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be shown.
    fn emit(&mut self, event: &Event) -> Result<(), Self::Error>;
}

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum PlayError<E> {
    /// The table failed to supply input or show output.
    #[error(transparent)]
    Table(E),
    /// Seating failed.
    #[error(transparent)]
    Seat(#[from] SeatError),
    /// A turn action was refused.
    #[error(transparent)]
    Turn(#[from] TurnError),
    /// A bet was refused for a reason other than the amount.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The banker could not play.
    #[error(transparent)]
    Banker(#[from] BankerError),
    /// The round could not be settled.
    #[error(transparent)]
    Settle(#[from] SettleError),
}

/// Creates a game shuffled from `seed`, seats the players and plays one round.
///
/// # Errors
///
/// Returns an error if the table fails.
pub fn run<T: Table>(
    options: TableOptions,
    seed: u64,
    table: &mut T,
) -> Result<RoundResult, PlayError<T::Error>> {
    let mut game = Game::new(options, seed);
    seat_players(&mut game, table)?;
    play_round(&mut game, table)
}

/// Asks how many players there are and seats each one by name.
///
/// # Errors
///
/// Returns an error if the table fails or the round has already started.
pub fn seat_players<T: Table>(
    game: &mut Game,
    table: &mut T,
) -> Result<(), PlayError<T::Error>> {
    let count = table.player_count().map_err(PlayError::Table)?;
    for index in 0..count {
        let name = table.player_name(index).map_err(PlayError::Table)?;
        let seat = game.join(name.clone())?;
        table
            .emit(&Event::PlayerSeated { seat, name })
            .map_err(PlayError::Table)?;
    }
    Ok(())
}

/// Plays every player's turn, then the banker's, then settles the round.
///
/// # Errors
///
/// Returns an error if the table fails or the round has already started.
pub fn play_round<T: Table>(
    game: &mut Game,
    table: &mut T,
) -> Result<RoundResult, PlayError<T::Error>> {
    game.start_round()?;

    while let Some(seat) = game.current_player() {
        play_turn(game, table, seat)?;
    }

    game.banker_play()?;
    let hand = game.banker().cards(game.deck());
    let value = game.banker_value();
    table
        .emit(&Event::BankerPlayed { hand, value })
        .map_err(PlayError::Table)?;

    let result = game.settle()?;
    table
        .emit(&Event::RoundSettled(result.clone()))
        .map_err(PlayError::Table)?;
    Ok(result)
}

fn play_turn<T: Table>(
    game: &mut Game,
    table: &mut T,
    seat: usize,
) -> Result<(), PlayError<T::Error>> {
    table
        .emit(&Event::TurnStarted { seat })
        .map_err(PlayError::Table)?;

    match game.start_turn(seat)? {
        TurnStart::Skipped => {
            table
                .emit(&Event::PlayerBroke { seat })
                .map_err(PlayError::Table)?;
        }
        TurnStart::Dealt { value, .. } => {
            emit_hand(game, table, seat, true, value)?;

            loop {
                place_bet(game, table, seat)?;
                let draw = game.draw(seat)?;
                emit_hand(game, table, seat, false, draw.value)?;

                if !draw.may_continue {
                    break;
                }
                let again = table.draw_again(seat).map_err(PlayError::Table)?;
                game.decide(seat, again)?;
                if !again {
                    break;
                }
            }
        }
    }

    table
        .emit(&Event::TurnFinished { seat })
        .map_err(PlayError::Table)
}

/// Asks for a bet until one is accepted.
fn place_bet<T: Table>(
    game: &mut Game,
    table: &mut T,
    seat: usize,
) -> Result<BetReceipt, PlayError<T::Error>> {
    loop {
        let balance = game.player(seat).map_or(0, Player::chips);
        let amount = table
            .bet_amount(seat, balance)
            .map_err(PlayError::Table)?;

        let placed = usize::try_from(amount)
            .map_err(|_| BetError::NotPositive)
            .and_then(|amount| game.bet(seat, amount));

        match placed {
            Ok(receipt) => {
                table
                    .emit(&Event::BetAccepted { seat, receipt })
                    .map_err(PlayError::Table)?;
                return Ok(receipt);
            }
            Err(error @ (BetError::NotPositive | BetError::InsufficientFunds)) => {
                table
                    .emit(&Event::BetRejected {
                        seat,
                        error,
                        balance,
                    })
                    .map_err(PlayError::Table)?;
            }
            Err(error) => return Err(error.into()),
        }
    }
}

fn emit_hand<T: Table>(
    game: &Game,
    table: &mut T,
    seat: usize,
    first: bool,
    value: u8,
) -> Result<(), PlayError<T::Error>> {
    let hand = game
        .hand(seat)
        .map(|hand| hand.cards(game.deck()))
        .unwrap_or_default();
    table
        .emit(&Event::CardDealt {
            seat,
            first,
            hand,
            value,
        })
        .map_err(PlayError::Table)
}
