//! Parsing of typed commands.
//!
//! Accepted forms:
//! - `<x> <y>`: click at board coordinates
//! - `<n>` or `slot <n>`: activate slot `n`
//! - `difficulty <easy|medium|hard>`
//! - `restart`, `state`, `help`, `quit`

use marbles_core::{BotDifficulty, GameAction, ParseDifficultyError, SlotIndex};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  <x> <y>                       click at board coordinates
  <n> | slot <n>                select a piece or move to slot n
  difficulty <easy|medium|hard> change the computer's strength
  restart                       reset the board
  state                         print the game state as JSON
  help                          show this message
  quit                          leave the game";

/// A parsed line of input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Click { x: f64, y: f64 },
    Slot(SlotIndex),
    Difficulty(BotDifficulty),
    Restart,
    State,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Difficulty(#[from] ParseDifficultyError),
}

impl Command {
    /// The game action this command feeds to the turn controller, if any
    pub fn action(&self) -> Option<GameAction> {
        match *self {
            Command::Click { x, y } => Some(GameAction::Click { x, y }),
            Command::Slot(slot) => Some(GameAction::Activate(slot)),
            Command::Difficulty(difficulty) => Some(GameAction::SetDifficulty(difficulty)),
            Command::Restart => Some(GameAction::Restart),
            Command::State | Command::Help | Command::Quit => None,
        }
    }
}

/// Parse one line of user input
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        [] => Err(CommandError::Empty),
        [word] => match word.to_ascii_lowercase().as_str() {
            "restart" | "r" => Ok(Command::Restart),
            "state" => Ok(Command::State),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "slot" => Err(CommandError::MissingArgument("slot number")),
            "difficulty" => Err(CommandError::MissingArgument("difficulty level")),
            other if other.starts_with(|c: char| c.is_ascii_digit()) => {
                Ok(Command::Slot(parse_slot(word)?))
            }
            _ => Err(CommandError::Unknown(word.to_string())),
        },
        [keyword, arg] if keyword.eq_ignore_ascii_case("slot") => Ok(Command::Slot(parse_slot(arg)?)),
        [keyword, arg] if keyword.eq_ignore_ascii_case("difficulty") => {
            Ok(Command::Difficulty(arg.parse()?))
        }
        [x, y] if x.parse::<f64>().is_ok() => Ok(Command::Click {
            x: parse_coord(x)?,
            y: parse_coord(y)?,
        }),
        [first, ..] => Err(CommandError::Unknown(first.to_string())),
    }
}

fn parse_slot(word: &str) -> Result<SlotIndex, CommandError> {
    word.parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))
}

fn parse_coord(word: &str) -> Result<f64, CommandError> {
    word.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CommandError::InvalidNumber(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_slot_forms() {
        assert_eq!(parse_command("6"), Ok(Command::Slot(6)));
        assert_eq!(parse_command("  slot 10 "), Ok(Command::Slot(10)));
        assert_eq!(parse_command("SLOT 3"), Ok(Command::Slot(3)));
        assert_eq!(
            parse_command("slot x"),
            Err(CommandError::InvalidNumber("x".to_string()))
        );
        assert_eq!(
            parse_command("slot"),
            Err(CommandError::MissingArgument("slot number"))
        );
    }

    #[test]
    fn test_parse_click() {
        assert_eq!(
            parse_command("210 150.5"),
            Ok(Command::Click { x: 210.0, y: 150.5 })
        );
        assert_eq!(
            parse_command("210 up"),
            Err(CommandError::InvalidNumber("up".to_string()))
        );
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(
            parse_command("difficulty Easy"),
            Ok(Command::Difficulty(BotDifficulty::Easy))
        );
        assert!(matches!(
            parse_command("difficulty godlike"),
            Err(CommandError::Difficulty(_))
        ));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("restart"), Ok(Command::Restart));
        assert_eq!(parse_command("STATE"), Ok(Command::State));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_command("jump 3 4"),
            Err(CommandError::Unknown("jump".to_string()))
        );
    }

    #[test]
    fn test_command_actions() {
        assert_eq!(Command::Slot(4).action(), Some(GameAction::Activate(4)));
        assert_eq!(
            Command::Click { x: 1.0, y: 2.0 }.action(),
            Some(GameAction::Click { x: 1.0, y: 2.0 })
        );
        assert_eq!(Command::Restart.action(), Some(GameAction::Restart));
        assert_eq!(Command::Quit.action(), None);
    }
}
