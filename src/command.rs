//! Line commands for the terminal front end.
//!
//! Each command corresponds to one gesture of a graphical front end. Rows are
//! numbered from 1 on the command line and converted to 0-based indices here.
//!
//! ```
//! use vocab_player::command::Command;
//! use vocab_player::language::Language;
//!
//! assert_eq!(Command::parse("play"), Ok(Command::Play));
//! assert_eq!(Command::parse("translate 2"), Ok(Command::Translate(1)));
//! assert_eq!(Command::parse("to French"), Ok(Command::To(Language::French)));
//! ```

use thiserror::Error;

use crate::language::{delay_index_of, Language};
use crate::store::WordPair;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a row, empty unless a word (and `| translation`) is given.
    Add(Option<WordPair>),
    /// Replace the word in a row.
    Set { index: usize, text: String },
    Translate(usize),
    Remove(usize),
    Play,
    Stop,
    Preview(usize),
    From(Language),
    To(Language),
    /// Index into [`DELAY_OPTIONS`](crate::language::DELAY_OPTIONS).
    Delay(usize),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?} (try \"help\")")]
    Unknown(String),

    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{0:?} is not a row number")]
    InvalidRow(String),

    #[error("unknown language {0:?}")]
    UnknownLanguage(String),

    #[error("{0:?} is not a delay option (1.0 to 4.0 in steps of 0.5)")]
    InvalidDelay(String),
}

pub const HELP: &str = "\
commands:
  list                     show all rows
  add [word [| meaning]]   append a row
  set <row> <word>         replace the word in a row
  translate <row>          translate a row's word
  remove <row>             delete a row
  play | stop              start or stop playback
  preview <row>            speak one row
  from <language>          source language
  to <language>            target language
  delay <seconds>          pause after each word
  help                     this text
  quit                     save and exit";

impl Command {
    /// Parse one input line. Blank lines parse as [`Command::List`].
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "" | "list" | "ls" => Ok(Command::List),
            "add" => Ok(Command::Add(parse_pair(rest))),
            "set" => {
                let (row, text) = rest.split_once(char::is_whitespace).ok_or(
                    CommandError::MissingArgument {
                        command: "set",
                        argument: "word",
                    },
                )?;
                Ok(Command::Set {
                    index: parse_row("set", row)?,
                    text: text.trim().to_string(),
                })
            }
            "translate" | "tr" => Ok(Command::Translate(parse_row("translate", rest)?)),
            "remove" | "rm" => Ok(Command::Remove(parse_row("remove", rest)?)),
            "preview" => Ok(Command::Preview(parse_row("preview", rest)?)),
            "play" => Ok(Command::Play),
            "stop" => Ok(Command::Stop),
            "from" => Ok(Command::From(parse_language("from", rest)?)),
            "to" => Ok(Command::To(parse_language("to", rest)?)),
            "delay" => Ok(Command::Delay(parse_delay(rest)?)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_pair(rest: &str) -> Option<WordPair> {
    if rest.is_empty() {
        return None;
    }
    let (original, translated) = rest.split_once('|').unwrap_or((rest, ""));
    Some(WordPair::new(original.trim(), translated.trim()))
}

fn parse_row(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "row number",
        });
    }
    match arg.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row - 1),
        _ => Err(CommandError::InvalidRow(arg.to_string())),
    }
}

fn parse_language(command: &'static str, arg: &str) -> Result<Language, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "language",
        });
    }
    Language::parse(arg).ok_or_else(|| CommandError::UnknownLanguage(arg.to_string()))
}

fn parse_delay(arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "delay",
            argument: "seconds",
        });
    }
    let secs = arg.trim_end_matches('s').parse::<f64>();
    secs.ok()
        .and_then(delay_index_of)
        .ok_or_else(|| CommandError::InvalidDelay(arg.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
