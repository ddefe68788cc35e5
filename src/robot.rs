//! The robot state machine.
//!
//! The entry point is [`Robot`]. Bind it to a [`Tabletop`], optionally with a
//! [`RobotConfig`], then feed it command lines through [`Robot::evaluate`].
//! The robot starts unplaced and only a legal `PLACE` puts it on the table.

use crate::command::{Command, KeywordCase};
use crate::error::EvaluationError;
use crate::pose::Pose;
use crate::tabletop::Tabletop;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// What a `MOVE` that would leave the table does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Fail with [`EvaluationError::OutOfBounds`].
    #[default]
    Reject,
    /// Succeed without moving and without a textual result.
    Ignore,
}

/// Configuration for command evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// How keywords and facings are matched. Default: case-insensitive.
    pub keyword_case: KeywordCase,
    /// Handling of off-table moves. Default: reject.
    ///
    /// Out-of-bounds `PLACE` and moves into obstacles always fail.
    pub boundary_policy: BoundaryPolicy,
}

/// A robot bound to one tabletop.
///
/// Every failed evaluation leaves the pose exactly as it was, so any mix of
/// good and bad lines can be pushed through and only legal commands change
/// the simulated world. There is no reset; drop the robot and create a new one.
#[derive(Clone, Debug)]
pub struct Robot<'a> {
    tabletop: &'a Tabletop,
    pose: Option<Pose>,
    config: RobotConfig,
}

impl<'a> Robot<'a> {
    /// Creates an unplaced robot with the default [`RobotConfig`].
    pub fn new(tabletop: &'a Tabletop) -> Self {
        Self::with_config(tabletop, RobotConfig::default())
    }

    /// Same as [`Robot::new`].
    pub fn create(tabletop: &'a Tabletop) -> Self {
        Self::new(tabletop)
    }

    pub fn with_config(tabletop: &'a Tabletop, config: RobotConfig) -> Self {
        Self {
            tabletop,
            pose: None,
            config,
        }
    }

    pub fn tabletop(&self) -> &'a Tabletop {
        self.tabletop
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// The current pose, or `None` until a `PLACE` succeeds.
    pub fn pose(&self) -> Option<Pose> {
        self.pose
    }

    pub fn is_placed(&self) -> bool {
        self.pose.is_some()
    }

    /// Parses and applies one command line.
    ///
    /// Returns `Ok(Some(report))` for a successful `REPORT`, `Ok(None)` for every
    /// other successful command and `Err` otherwise. Never panics on any input.
    pub fn evaluate(&mut self, line: &str) -> Result<Option<String>, EvaluationError> {
        let result = Command::parse_with(line, self.config.keyword_case)
            .map_err(EvaluationError::from)
            .and_then(|command| {
                trace!(%command, "parsed command");
                self.apply(command)
            });

        if let Err(err) = &result {
            debug!(code = err.code(), line, error = %err, "command rejected");
        }
        result
    }

    /// Applies an already parsed command.
    ///
    /// The next pose is computed first and only committed once every check
    /// has passed.
    pub fn apply(&mut self, command: Command) -> Result<Option<String>, EvaluationError> {
        match command {
            Command::Place { x, y, facing } => {
                let next = Pose::new(x, y, facing);
                self.tabletop.request_place(next.position)?;
                self.commit(next);
                Ok(None)
            }
            Command::Move => {
                let pose = self.placed()?;
                let target = pose.ahead();
                match self.tabletop.request_place(target) {
                    Ok(()) => self.commit(Pose {
                        position: target,
                        ..pose
                    }),
                    Err(EvaluationError::OutOfBounds { .. })
                        if self.config.boundary_policy == BoundaryPolicy::Ignore =>
                    {
                        debug!(%pose, "move off the tabletop ignored");
                    }
                    Err(err) => return Err(err),
                }
                Ok(None)
            }
            Command::Left => {
                let pose = self.placed()?;
                self.commit(pose.turned_left());
                Ok(None)
            }
            Command::Right => {
                let pose = self.placed()?;
                self.commit(pose.turned_right());
                Ok(None)
            }
            Command::Report => Ok(Some(self.placed()?.to_string())),
        }
    }

    fn placed(&self) -> Result<Pose, EvaluationError> {
        self.pose.ok_or(EvaluationError::NotPlaced)
    }

    fn commit(&mut self, pose: Pose) {
        debug_assert!(self.tabletop.contains(pose.position));
        debug!(%pose, "pose updated");
        self.pose = Some(pose);
    }
}
