//! Line-based terminal table.

use alloc::string::String;
use alloc::vec::Vec;
use std::io::{self, BufRead, Write};

use crate::card::Card;
use crate::event::Event;
use crate::result::{Outcome, RoundResult};
use crate::session::Table;

const RULE: &str = "-----------------------------";

/// A [`Table`] that prompts on a writer and reads answers line by line.
///
/// Unparseable numbers are asked for again. Running out of input is an
/// [`io::ErrorKind::UnexpectedEof`] error.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    names: Vec<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            names: Vec::new(),
        }
    }

    /// Returns the reader and writer.
    #[must_use]
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn name(&self, seat: usize) -> &str {
        self.names.get(seat).map_or("Player", String::as_str)
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_owned())
    }

    fn prompt_number<N: core::str::FromStr>(&mut self, prompt: &str) -> io::Result<N> {
        loop {
            let answer = self.prompt(prompt)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }

    fn write_hand(&mut self, hand: &[Card], value: u8) -> io::Result<()> {
        for card in hand {
            writeln!(self.output, "{card}")?;
        }
        writeln!(self.output, "The value of hand is: {value}")
    }

    fn write_settlement(&mut self, result: &RoundResult) -> io::Result<()> {
        if result.banker_pontoon {
            return writeln!(self.output, "Banker got Pontoon - no one wins!");
        }

        for player in &result.players {
            let name = self.name(player.seat).to_owned();
            match player.outcome {
                Outcome::Pontoon => writeln!(
                    self.output,
                    "{name} got Pontoon and won £{}!",
                    player.winnings
                )?,
                Outcome::FiveCardTrick => writeln!(
                    self.output,
                    "{name} got five card trick and the banker didn't so won £{}!",
                    player.winnings
                )?,
                Outcome::Win => writeln!(self.output, "{name} won £{}!", player.winnings)?,
                Outcome::Lose | Outcome::BankerPontoon => {}
            }
            writeln!(self.output, "{name} now has: £{}", player.balance)?;
            writeln!(self.output, "{RULE}")?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Table for Console<R, W> {
    type Error = io::Error;

    fn player_count(&mut self) -> io::Result<usize> {
        self.prompt_number("How many players will be playing? ")
    }

    fn player_name(&mut self, seat: usize) -> io::Result<String> {
        self.prompt(&format!("Player {}, what is your name? ", seat + 1))
    }

    fn bet_amount(&mut self, _seat: usize, balance: usize) -> io::Result<i64> {
        writeln!(self.output, "You have: £{balance}")?;
        self.prompt_number("How much do you want to bet? ")
    }

    fn draw_again(&mut self, _seat: usize) -> io::Result<bool> {
        let answer = self.prompt("Do you want to draw another card? (y)\n")?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    fn emit(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::PlayerSeated { seat, name } => {
                if self.names.len() <= *seat {
                    self.names.resize(seat + 1, String::new());
                }
                self.names[*seat].clone_from(name);
            }
            Event::TurnStarted { .. } => writeln!(self.output, "{RULE}")?,
            Event::PlayerBroke { seat } => {
                let name = self.name(*seat).to_owned();
                writeln!(self.output, "{name} is broke and can't play.")?;
            }
            Event::CardDealt {
                seat,
                first,
                hand,
                value,
            } => {
                let name = self.name(*seat).to_owned();
                if *first {
                    writeln!(self.output, "{name}'s first card...")?;
                } else {
                    writeln!(self.output, "{name} draws and hand is...")?;
                }
                self.write_hand(hand, *value)?;
            }
            Event::BetAccepted { receipt, .. } => {
                writeln!(self.output, "Balance is now: £{}", receipt.balance)?;
                writeln!(self.output, "Current bet value: £{}", receipt.total_bet)?;
            }
            Event::BetRejected { .. } => writeln!(self.output, "You don't have enough chips.")?,
            Event::TurnFinished { .. } => {
                writeln!(self.output, "{RULE}")?;
                writeln!(self.output, "Turn finished.")?;
            }
            Event::BankerPlayed { hand, value } => {
                writeln!(self.output, "{RULE}")?;
                writeln!(self.output, "Banker plays.")?;
                self.write_hand(hand, *value)?;
                writeln!(self.output, "{RULE}")?;
            }
            Event::RoundSettled(result) => self.write_settlement(result)?,
        }
        self.output.flush()
    }
}
