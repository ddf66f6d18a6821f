//! Session and console tests.

extern crate alloc;

use alloc::collections::VecDeque;
use std::io::{self, Cursor};

use pontoon::session::{self, play_round, seat_players};
use pontoon::{
    BetError, Card, Console, Deck, Event, Game, Outcome, PlayError, Suit, Table, TableOptions,
};

fn card(suit: Suit, rank: u8) -> Card {
    Card::of(suit, rank).unwrap()
}

#[derive(Debug, PartialEq, Eq)]
struct OutOfAnswers;

/// A table that replays canned answers and records every event.
#[derive(Default)]
struct Script {
    names: Vec<&'static str>,
    bets: VecDeque<i64>,
    draws: VecDeque<bool>,
    events: Vec<Event>,
}

impl Table for Script {
    type Error = OutOfAnswers;

    fn player_count(&mut self) -> Result<usize, OutOfAnswers> {
        Ok(self.names.len())
    }

    fn player_name(&mut self, seat: usize) -> Result<String, OutOfAnswers> {
        self.names
            .get(seat)
            .map(|name| (*name).to_owned())
            .ok_or(OutOfAnswers)
    }

    fn bet_amount(&mut self, _seat: usize, _balance: usize) -> Result<i64, OutOfAnswers> {
        self.bets.pop_front().ok_or(OutOfAnswers)
    }

    fn draw_again(&mut self, _seat: usize) -> Result<bool, OutOfAnswers> {
        self.draws.pop_front().ok_or(OutOfAnswers)
    }

    fn emit(&mut self, event: &Event) -> Result<(), OutOfAnswers> {
        self.events.push(event.clone());
        Ok(())
    }
}

fn two_player_deck() -> Deck {
    Deck::stacked(&[
        card(Suit::Hearts, 10), // Ada first card
        card(Suit::Hearts, 9),  // Ada draw
        card(Suit::Clubs, 5),   // Bo first card
        card(Suit::Clubs, 6),   // Bo draw
        card(Suit::Clubs, 10),  // Bo draw
        card(Suit::Spades, 10), // banker
        card(Suit::Spades, 7),  // banker
    ])
    .unwrap()
}

fn one_player_deck() -> Deck {
    Deck::stacked(&[
        card(Suit::Hearts, 10), // Ada first card
        card(Suit::Hearts, 9),  // Ada draw
        card(Suit::Spades, 10), // banker
        card(Suit::Spades, 7),  // banker
    ])
    .unwrap()
}

#[test]
fn scripted_round_pays_each_player() {
    let mut game = Game::with_deck(TableOptions::default(), two_player_deck());
    let mut table = Script {
        names: vec!["Ada", "Bo"],
        bets: VecDeque::from([0, -5, 5000, 100, 50, 50]),
        draws: VecDeque::from([false, true]),
        ..Script::default()
    };

    seat_players(&mut game, &mut table).unwrap();
    let result = play_round(&mut game, &mut table).unwrap();

    assert_eq!(result.banker_value, 17);
    assert_eq!(result.players[0].outcome, Outcome::Win);
    assert_eq!(result.players[0].winnings, 100);
    assert_eq!(result.players[0].balance, 1100);
    assert_eq!(result.players[1].outcome, Outcome::Pontoon);
    assert_eq!(result.players[1].bet, 100);
    assert_eq!(result.players[1].winnings, 200);
    assert_eq!(result.players[1].balance, 1200);
    assert!(table.bets.is_empty());
    assert!(table.draws.is_empty());

    assert_eq!(
        table.events[0],
        Event::PlayerSeated {
            seat: 0,
            name: "Ada".to_owned()
        }
    );
    assert_eq!(table.events[2], Event::TurnStarted { seat: 0 });
    assert_eq!(
        table.events[3],
        Event::CardDealt {
            seat: 0,
            first: true,
            hand: vec![card(Suit::Hearts, 10)],
            value: 10
        }
    );

    let rejected: Vec<(BetError, usize)> = table
        .events
        .iter()
        .filter_map(|event| match event {
            Event::BetRejected { error, balance, .. } => Some((*error, *balance)),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejected,
        vec![
            (BetError::NotPositive, 1000),
            (BetError::NotPositive, 1000),
            (BetError::InsufficientFunds, 1000),
        ]
    );

    assert!(table.events.contains(&Event::BankerPlayed {
        hand: vec![card(Suit::Spades, 10), card(Suit::Spades, 7)],
        value: 17
    }));
    assert_eq!(table.events.last(), Some(&Event::RoundSettled(result)));
}

#[test]
fn table_failure_stops_the_round() {
    let mut game = Game::with_deck(TableOptions::default(), two_player_deck());
    let mut table = Script {
        names: vec!["Ada"],
        ..Script::default()
    };

    seat_players(&mut game, &mut table).unwrap();
    let err = play_round(&mut game, &mut table).unwrap_err();
    assert!(matches!(err, PlayError::Table(OutOfAnswers)));
}

#[test]
fn console_plays_a_round() {
    let mut game = Game::with_deck(TableOptions::default(), one_player_deck());
    let input = Cursor::new("1\nAda\nten\n10\nn\n");
    let mut console = Console::new(input, Vec::new());

    seat_players(&mut game, &mut console).unwrap();
    play_round(&mut game, &mut console).unwrap();

    let (_, output) = console.into_parts();
    let output = String::from_utf8(output).unwrap();

    for line in [
        "How many players will be playing? ",
        "Player 1, what is your name? ",
        "Ada's first card...",
        "10 of Hearts",
        "You have: £1000",
        "Please enter a number.",
        "Balance is now: £990",
        "Current bet value: £10",
        "Ada draws and hand is...",
        "9 of Hearts",
        "The value of hand is: 19",
        "Do you want to draw another card? (y)",
        "Turn finished.",
        "Banker plays.",
        "The value of hand is: 17",
        "Ada won £10!",
        "Ada now has: £1010",
    ] {
        assert!(output.contains(line), "missing {line:?} in:\n{output}");
    }
}

#[test]
fn console_reports_banker_pontoon_and_broke_players() {
    let deck = Deck::stacked(&[card(Suit::Spades, 1), card(Suit::Spades, 12)]).unwrap();
    let mut game = Game::with_deck(TableOptions::default().with_starting_chips(0), deck);
    let mut console = Console::new(Cursor::new("1\nBo\n"), Vec::new());

    seat_players(&mut game, &mut console).unwrap();
    let result = play_round(&mut game, &mut console).unwrap();
    assert!(result.banker_pontoon);

    let (_, output) = console.into_parts();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Bo is broke and can't play."));
    assert!(output.contains("Ace of Spades"));
    assert!(output.contains("Queen of Spades"));
    assert!(output.contains("Banker got Pontoon - no one wins!"));
    assert!(!output.contains("now has"));
}

#[test]
fn console_rejects_unaffordable_bets() {
    let mut game = Game::with_deck(TableOptions::default(), one_player_deck());
    let mut console = Console::new(Cursor::new("1\nAda\n-3\n2000\n1000\n"), Vec::new());

    seat_players(&mut game, &mut console).unwrap();
    let result = play_round(&mut game, &mut console).unwrap();
    assert_eq!(result.players[0].bet, 1000);

    let (_, output) = console.into_parts();
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("You don't have enough chips.").count(), 2);
    assert!(output.contains("Balance is now: £0"));
}

#[test]
fn console_fails_when_input_runs_out() {
    let mut game = Game::with_deck(TableOptions::default(), two_player_deck());
    let mut console = Console::new(Cursor::new("2\nAda\n"), Vec::new());

    let err = seat_players(&mut game, &mut console).unwrap_err();
    match err {
        PlayError::Table(err) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn seeded_run_completes_with_one_answer_per_prompt() {
    let mut console = Console::new(Cursor::new("1\nAda\n10\nn\n"), Vec::new());

    let result = session::run(TableOptions::default(), 2024, &mut console).unwrap();
    assert_eq!(result.players.len(), 1);
    assert_eq!(result.players[0].bet, 10);
    assert!(matches!(result.players[0].balance, 990 | 1010));
}
