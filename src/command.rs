//! Typed commands and the line parser.
//!
//! Grammar, one command per line:
//!
//! ```text
//! PLACE X,Y,F     (X, Y base-10 integers; F in {NORTH,SOUTH,EAST,WEST})
//! MOVE
//! LEFT
//! RIGHT
//! REPORT
//! ```
//!
//! Leading and trailing whitespace is ignored. `PLACE` is followed by exactly
//! one space and an argument list with no internal spaces; the other commands
//! take no arguments at all. Parsing never looks at robot state, so negative or
//! oversized coordinates parse fine and are rejected later by bounds checking.

use crate::error::{ParseError, ParseErrorKind};
use crate::pose::Facing;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How command keywords and facing tokens are matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordCase {
    /// Only the uppercase forms (`PLACE`, `NORTH`, ...).
    Exact,
    /// Any ASCII case (`place 1,2,north`).
    #[default]
    Insensitive,
}

impl KeywordCase {
    fn matches(self, token: &str, keyword: &str) -> bool {
        match self {
            Self::Exact => token == keyword,
            Self::Insensitive => token.eq_ignore_ascii_case(keyword),
        }
    }

    fn facing(self, token: &str) -> Option<Facing> {
        match self {
            Self::Exact => token.parse().ok(),
            Self::Insensitive => Facing::parse_ignore_case(token),
        }
    }
}

/// One parsed line of the command language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Put the robot on the table at `(x, y)`, facing `facing`.
    Place { x: i32, y: i32, facing: Facing },
    /// Step one cell forward.
    Move,
    /// Turn 90 degrees counter-clockwise.
    Left,
    /// Turn 90 degrees clockwise.
    Right,
    /// Emit the current pose as `X,Y,F`.
    Report,
}

impl Command {
    /// Parses `line` accepting only the exact uppercase keywords.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        Self::parse_with(line, KeywordCase::Exact)
    }

    /// Parses `line`, matching keywords and facings according to `case`.
    ///
    /// On failure the returned [`ParseError`] carries `line` verbatim.
    pub fn parse_with(line: &str, case: KeywordCase) -> Result<Self, ParseError> {
        let fail = |kind| ParseError::new(line, kind);

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(fail(ParseErrorKind::Empty));
        }

        let (keyword, args) = match trimmed.find(char::is_whitespace) {
            Some(idx) => (&trimmed[..idx], Some(&trimmed[idx..])),
            None => (trimmed, None),
        };

        let nullary = [
            ("MOVE", Command::Move),
            ("LEFT", Command::Left),
            ("RIGHT", Command::Right),
            ("REPORT", Command::Report),
        ];

        if case.matches(keyword, "PLACE") {
            let args = args.ok_or_else(|| fail(ParseErrorKind::MissingArguments))?;
            return parse_place_args(args, case).map_err(fail);
        }

        for (name, command) in nullary {
            if case.matches(keyword, name) {
                return match args {
                    None => Ok(command),
                    Some(_) => Err(fail(ParseErrorKind::UnexpectedArguments)),
                };
            }
        }

        Err(fail(ParseErrorKind::UnknownCommand(keyword.to_string())))
    }
}

/// Parses the `PLACE` tail, still including its leading separator.
fn parse_place_args(args: &str, case: KeywordCase) -> Result<Command, ParseErrorKind> {
    let list = args
        .strip_prefix(' ')
        .filter(|list| !list.contains(char::is_whitespace))
        .ok_or(ParseErrorKind::MalformedArguments)?;

    let parts: Vec<&str> = list.split(',').collect();
    let [x, y, facing] = parts[..] else {
        return Err(ParseErrorKind::MalformedArguments);
    };

    let coordinate = |token: &str| {
        token
            .parse::<i32>()
            .map_err(|_| ParseErrorKind::InvalidCoordinate(token.to_string()))
    };

    Ok(Command::Place {
        x: coordinate(x)?,
        y: coordinate(y)?,
        facing: case
            .facing(facing)
            .ok_or_else(|| ParseErrorKind::InvalidFacing(facing.to_string()))?,
    })
}

/// Formats the canonical uppercase line, e.g. `PLACE 1,2,EAST`.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { x, y, facing } => write!(f, "PLACE {x},{y},{facing}"),
            Self::Move => f.write_str("MOVE"),
            Self::Left => f.write_str("LEFT"),
            Self::Right => f.write_str("RIGHT"),
            Self::Report => f.write_str("REPORT"),
        }
    }
}
