//! Tabletop bounds and obstacles.

use crate::error::{EvaluationError, TabletopError};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// The fixed-size grid bounding every valid robot position.
///
/// Cells run from `(0, 0)` in the south-west corner to
/// `(width - 1, height - 1)` in the north-east corner. Obstacles are supplied
/// while building the tabletop; once a [`Robot`](crate::Robot) borrows it,
/// nothing about it changes, so any number of robots may share one tabletop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTabletop")]
pub struct Tabletop {
    width: u32,
    height: u32,
    obstacles: Vec<IVec2>,
}

impl Tabletop {
    /// Creates an empty `width` x `height` tabletop.
    ///
    /// Both dimensions must be positive and no larger than `i32::MAX`, so a
    /// single step from any in-bounds cell is always representable.
    pub fn new(width: u32, height: u32) -> Result<Self, TabletopError> {
        if width == 0 || height == 0 {
            return Err(TabletopError::ZeroDimension { width, height });
        }
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(TabletopError::DimensionTooLarge { width, height });
        }
        Ok(Self {
            width,
            height,
            obstacles: Vec::new(),
        })
    }

    /// Blocks the cell at `(x, y)` (builder pattern).
    ///
    /// Adding the same cell twice is harmless.
    pub fn with_obstacle(mut self, x: i32, y: i32) -> Result<Self, TabletopError> {
        let position = IVec2::new(x, y);
        if !self.contains(position) {
            return Err(TabletopError::ObstacleOutOfBounds { position });
        }
        if !self.obstacles.contains(&position) {
            self.obstacles.push(position);
        }
        Ok(self)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn obstacles(&self) -> &[IVec2] {
        &self.obstacles
    }

    /// Is `position` within `[0, width) x [0, height)`?
    pub fn contains(&self, position: IVec2) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn is_blocked(&self, position: IVec2) -> bool {
        self.obstacles.contains(&position)
    }

    /// Checks whether the robot may stand on `position`.
    pub fn request_place(&self, position: IVec2) -> Result<(), EvaluationError> {
        if !self.contains(position) {
            Err(EvaluationError::OutOfBounds { position })
        } else if self.is_blocked(position) {
            Err(EvaluationError::Blocked { position })
        } else {
            Ok(())
        }
    }
}

/// Unvalidated wire form; deserialization goes through the same checks as the builder.
#[derive(Deserialize)]
struct RawTabletop {
    width: u32,
    height: u32,
    #[serde(default)]
    obstacles: Vec<IVec2>,
}

impl TryFrom<RawTabletop> for Tabletop {
    type Error = TabletopError;

    fn try_from(raw: RawTabletop) -> Result<Self, Self::Error> {
        raw.obstacles
            .into_iter()
            .try_fold(Tabletop::new(raw.width, raw.height)?, |table, cell| {
                table.with_obstacle(cell.x, cell.y)
            })
    }
}
