// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! A line-oriented text format for replaying operations.
//!
//! This lives outside the engine: the list itself never rejects a call, so
//! everything that can go wrong with malformed input is caught here.
//!
//! ```text
//! # comments and blank lines are skipped
//! add    <entry> <user> <timestamp> <name...>
//! remove <entry> <user> <timestamp>
//! done   <entry> <user> <timestamp>
//! undone <entry> <user> <timestamp>
//! mark   <entry> <user> <timestamp> <0|1>
//! dismiss <user>
//! allow   <user>
//! ```
//!
//! The name of an `add` is the rest of the line with surrounding whitespace
//! trimmed, so it may contain spaces (or be empty).

use thiserror::Error;

use crate::crdt::id::EntryId;
use crate::crdt::id::Timestamp;
use crate::crdt::id::UserId;
use crate::crdt::op::Op;
use crate::crdt::op::OpLog;
use crate::list::EntryState;
use crate::list::InvalidState;

/// Why a single line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOpError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` is missing its {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{command}` has unexpected trailing input `{extra}`")]
    TrailingInput { command: &'static str, extra: String },

    #[error("invalid {argument} `{value}`")]
    InvalidNumber { argument: &'static str, value: String },

    #[error(transparent)]
    InvalidState(#[from] InvalidState),
}

/// A parse failure with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub source: ParseOpError,
}

/// Split the next whitespace-delimited token off the front of `rest`.
fn next_token<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let trimmed = rest.trim_start();
    if trimmed.is_empty() {
        *rest = trimmed;
        return None;
    }
    let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    let (token, tail) = trimmed.split_at(end);
    *rest = tail;
    return Some(token);
}

struct Args<'a> {
    command: &'static str,
    rest: &'a str,
}

impl<'a> Args<'a> {
    fn token(&mut self, argument: &'static str) -> Result<&'a str, ParseOpError> {
        let command = self.command;
        return next_token(&mut self.rest)
            .ok_or(ParseOpError::MissingArgument { command, argument });
    }

    fn int(&mut self, argument: &'static str) -> Result<i32, ParseOpError> {
        let token = self.token(argument)?;
        return token.parse().map_err(|_| ParseOpError::InvalidNumber {
            argument,
            value: token.to_string(),
        });
    }

    fn entry(&mut self) -> Result<EntryId, ParseOpError> {
        return self.int("entry").map(EntryId);
    }

    fn user(&mut self) -> Result<UserId, ParseOpError> {
        return self.int("user").map(UserId);
    }

    fn timestamp(&mut self) -> Result<Timestamp, ParseOpError> {
        let token = self.token("timestamp")?;
        return token.parse().map(Timestamp).map_err(|_| ParseOpError::InvalidNumber {
            argument: "timestamp",
            value: token.to_string(),
        });
    }

    fn rest(self) -> &'a str {
        return self.rest.trim();
    }

    fn finish(self) -> Result<(), ParseOpError> {
        let command = self.command;
        let extra = self.rest();
        if extra.is_empty() {
            return Ok(());
        }
        return Err(ParseOpError::TrailingInput { command, extra: extra.to_string() });
    }
}

/// Parse one line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Op>, ParseOpError> {
    let mut rest = line;
    let Some(word) = next_token(&mut rest) else {
        return Ok(None);
    };
    if word.starts_with('#') {
        return Ok(None);
    }

    let command: &'static str = match word {
        "add" => "add",
        "remove" => "remove",
        "done" => "done",
        "undone" => "undone",
        "mark" => "mark",
        "dismiss" => "dismiss",
        "allow" => "allow",
        other => return Err(ParseOpError::UnknownCommand(other.to_string())),
    };
    let mut args = Args { command, rest };

    let op = match command {
        "add" => {
            let entry = args.entry()?;
            let user = args.user()?;
            let timestamp = args.timestamp()?;
            let name = args.rest().to_string();
            return Ok(Some(Op::Add { entry, user, timestamp, name }));
        }
        "mark" => {
            let entry = args.entry()?;
            let user = args.user()?;
            let timestamp = args.timestamp()?;
            let state = EntryState::try_from(args.int("state")?)?;
            match state {
                EntryState::Done => Op::MarkDone { entry, user, timestamp },
                EntryState::Undone => Op::MarkUndone { entry, user, timestamp },
            }
        }
        "remove" | "done" | "undone" => {
            let entry = args.entry()?;
            let user = args.user()?;
            let timestamp = args.timestamp()?;
            match command {
                "remove" => Op::Remove { entry, user, timestamp },
                "done" => Op::MarkDone { entry, user, timestamp },
                _ => Op::MarkUndone { entry, user, timestamp },
            }
        }
        "dismiss" => Op::Dismiss { user: args.user()? },
        _ => Op::Allow { user: args.user()? },
    };

    args.finish()?;
    return Ok(Some(op));
}

/// Parse a whole script into an operation log.
///
/// Stops at the first malformed line.
pub fn parse_script(text: &str) -> Result<OpLog, ScriptError> {
    let mut log = OpLog::new();
    for (index, line) in text.lines().enumerate() {
        let parsed = parse_line(line).map_err(|source| ScriptError { line: index + 1, source })?;
        if let Some(op) = parsed {
            log.push(op);
        }
    }
    return Ok(log);
}
