//! Error types returned by the tabletop and the robot.
//!
//! Every failure of [`Robot::evaluate`](crate::Robot::evaluate) is an expected,
//! recoverable condition and leaves the robot exactly as it was. Each error
//! exposes a stable machine-readable [`code`](EvaluationError::code) so a host
//! can tell failure kinds apart without matching on messages.
//!
//! | Error | Code |
//! |-------|------|
//! | [`EvaluationError::Parse`] | `PARSE_ERROR` |
//! | [`EvaluationError::NotPlaced`] | `NOT_PLACED` |
//! | [`EvaluationError::OutOfBounds`] | `OUT_OF_BOUNDS` |
//! | [`EvaluationError::Blocked`] | `BLOCKED` |

use glam::IVec2;
use thiserror::Error;

/// Why a line failed to parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("line is blank")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("command takes no arguments")]
    UnexpectedArguments,
    #[error("PLACE requires arguments `X,Y,FACING`")]
    MissingArguments,
    #[error("PLACE arguments must be `X,Y,FACING` after a single space")]
    MalformedArguments,
    #[error("`{0}` is not an integer coordinate")]
    InvalidCoordinate(String),
    #[error("`{0}` is not a facing")]
    InvalidFacing(String),
}

/// A line that does not match the command grammar.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot parse `{line}`: {kind}")]
pub struct ParseError {
    /// The offending input, verbatim.
    pub line: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: &str, kind: ParseErrorKind) -> Self {
        Self {
            line: line.to_string(),
            kind,
        }
    }
}

/// Failure of a single [`Robot::evaluate`](crate::Robot::evaluate) call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// MOVE, LEFT, RIGHT or REPORT before any successful PLACE.
    #[error("robot has not been placed on the tabletop")]
    NotPlaced,

    #[error("position {position} is outside the tabletop")]
    OutOfBounds { position: IVec2 },

    #[error("position {position} is blocked by an obstacle")]
    Blocked { position: IVec2 },
}

impl EvaluationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "PARSE_ERROR",
            Self::NotPlaced => "NOT_PLACED",
            Self::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            Self::Blocked { .. } => "BLOCKED",
        }
    }
}

/// Misuse when building a [`Tabletop`](crate::Tabletop).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TabletopError {
    #[error("tabletop dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("tabletop dimensions must not exceed {max}, got {width}x{height}", max = i32::MAX)]
    DimensionTooLarge { width: u32, height: u32 },

    #[error("obstacle {position} is outside the tabletop")]
    ObstacleOutOfBounds { position: IVec2 },
}

impl TabletopError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroDimension { .. } => "TABLETOP_ZERO_DIMENSION",
            Self::DimensionTooLarge { .. } => "TABLETOP_TOO_LARGE",
            Self::ObstacleOutOfBounds { .. } => "TABLETOP_OBSTACLE_OUT_OF_BOUNDS",
        }
    }
}
