// Copyright (c) 2024 Botho Foundation

//! Line commands accepted by the interactive mode.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use displaydoc::Display;
use pbs_draw::{Ticket, MAIN_NUMBER_COUNT};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  buy [n]            buy the configured number of tickets (or n)
  ticket <t>         set your ticket, e.g. ticket 1,2,3,4,5/6
  number <i> <v>     set main number i (1-5) to v
  bonus <v>          set the Powerball number
  count <n>          tickets per purchase (1-99999)
  interval <ms>      auto-purchase interval in milliseconds
  auto on|off        start or stop automatic purchases
  stats              show statistics and your tickets
  history            show recent winning tickets
  wins               show win counts per tier
  chart <path>       write the net-gain series (.json or .csv)
  reset              clear totals, keep settings
  help               show this list
  quit               exit";

/// Errors from parsing a shell line.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum ShellError {
    /// Empty command
    Empty,

    /// Unknown command '{0}', type 'help' for a list
    Unknown(String),

    /// Missing argument for '{0}'
    MissingArgument(&'static str),

    /// Invalid argument '{arg}' for '{command}'
    InvalidArgument { command: &'static str, arg: String },
}

/// A parsed shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Buy once; `None` uses the configured count.
    Buy(Option<u32>),
    Ticket(Ticket),
    /// Set a main number; `index` is 0-based.
    Number { index: usize, value: u32 },
    Bonus(u32),
    Count(u32),
    Interval(Duration),
    Auto(bool),
    Stats,
    History,
    Wins,
    Chart(PathBuf),
    Reset,
    Help,
    Quit,
}

fn parse_arg<T: FromStr>(command: &'static str, arg: Option<&str>) -> Result<T, ShellError> {
    let arg = arg.ok_or(ShellError::MissingArgument(command))?;
    arg.parse().map_err(|_| ShellError::InvalidArgument {
        command,
        arg: arg.to_string(),
    })
}

impl FromStr for ShellCommand {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        match command.to_ascii_lowercase().as_str() {
            "" => Err(ShellError::Empty),
            "buy" | "b" => match args.next() {
                Some(arg) => Ok(Self::Buy(Some(parse_arg("buy", Some(arg))?))),
                None => Ok(Self::Buy(None)),
            },
            "ticket" => {
                if rest.is_empty() {
                    return Err(ShellError::MissingArgument("ticket"));
                }
                rest.parse()
                    .map(Self::Ticket)
                    .map_err(|_| ShellError::InvalidArgument {
                        command: "ticket",
                        arg: rest.to_string(),
                    })
            }
            "number" => {
                let position: usize = parse_arg("number", args.next())?;
                if position == 0 || position > MAIN_NUMBER_COUNT {
                    return Err(ShellError::InvalidArgument {
                        command: "number",
                        arg: position.to_string(),
                    });
                }
                let value = parse_arg("number", args.next())?;
                Ok(Self::Number {
                    index: position - 1,
                    value,
                })
            }
            "bonus" | "pb" => Ok(Self::Bonus(parse_arg("bonus", args.next())?)),
            "count" => Ok(Self::Count(parse_arg("count", args.next())?)),
            "interval" => {
                let ms: u64 = parse_arg("interval", args.next())?;
                Ok(Self::Interval(Duration::from_millis(ms)))
            }
            "auto" => match args.next().map(str::to_ascii_lowercase).as_deref() {
                Some("on") | Some("start") => Ok(Self::Auto(true)),
                Some("off") | Some("stop") => Ok(Self::Auto(false)),
                Some(other) => Err(ShellError::InvalidArgument {
                    command: "auto",
                    arg: other.to_string(),
                }),
                None => Err(ShellError::MissingArgument("auto")),
            },
            "stats" | "s" => Ok(Self::Stats),
            "history" => Ok(Self::History),
            "wins" => Ok(Self::Wins),
            "chart" => {
                if rest.is_empty() {
                    return Err(ShellError::MissingArgument("chart"));
                }
                Ok(Self::Chart(PathBuf::from(rest)))
            }
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ShellError::Unknown(other.to_string())),
        }
    }
}
