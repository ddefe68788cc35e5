//! Facing and pose of the robot on the tabletop grid.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal directions the robot can face.
///
/// Rotation follows the cyclic order `NORTH -> EAST -> SOUTH -> WEST -> NORTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// All facings in clockwise order, starting at `NORTH`.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Returns the facing after a 90 degree counter-clockwise turn (`LEFT`).
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Returns the facing after a 90 degree clockwise turn (`RIGHT`).
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit grid vector for one step forward. `NORTH` is `+Y`, `EAST` is `+X`.
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// The uppercase token used by the command language.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }

    /// Matches a facing token ignoring ASCII case.
    pub(crate) fn parse_ignore_case(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|facing| facing.as_str().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the four facing tokens.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown facing `{0}`")]
pub struct UnknownFacing(pub String);

impl FromStr for Facing {
    type Err = UnknownFacing;

    /// Accepts only the exact uppercase tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|facing| facing.as_str() == s)
            .ok_or_else(|| UnknownFacing(s.to_string()))
    }
}

/// Position plus facing of a placed robot.
///
/// A `Pose` held by a [`Robot`](crate::Robot) is always inside its tabletop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    /// 0-indexed grid cell; `x` grows to the east, `y` grows to the north.
    pub position: IVec2,
    pub facing: Facing,
}

impl Pose {
    pub fn new(x: i32, y: i32, facing: Facing) -> Self {
        Self {
            position: IVec2::new(x, y),
            facing,
        }
    }

    /// The cell one step ahead. Not bounds-checked.
    pub fn ahead(&self) -> IVec2 {
        self.position + self.facing.step()
    }

    pub fn turned_left(self) -> Self {
        Self {
            facing: self.facing.left(),
            ..self
        }
    }

    pub fn turned_right(self) -> Self {
        Self {
            facing: self.facing.right(),
            ..self
        }
    }
}

/// Formats as the `REPORT` output, e.g. `0,1,NORTH`.
impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.position.x, self.position.y, self.facing)
    }
}
