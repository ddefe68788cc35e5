//! # tabletop-robot
//!
//! A command interpreter and state machine for a robot moving on a bounded
//! square tabletop.
//!
//! A [`Tabletop`] fixes the grid bounds (and optional obstacles). A [`Robot`]
//! borrows one tabletop and evaluates one textual command per call:
//!
//! ```
//! use tabletop_robot::{Robot, Tabletop};
//!
//! let table = Tabletop::new(5, 5)?;
//! let mut robot = Robot::new(&table);
//!
//! robot.evaluate("PLACE 1,2,EAST")?;
//! robot.evaluate("MOVE")?;
//! robot.evaluate("MOVE")?;
//! robot.evaluate("LEFT")?;
//! robot.evaluate("MOVE")?;
//! assert_eq!(robot.evaluate("REPORT")?.as_deref(), Some("3,3,NORTH"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! A failing line never changes the robot, so a caller can keep going after
//! any error. [`Session`] wraps this into multi-line batches whose reports
//! accumulate until reset.

pub mod command;
pub mod error;
pub mod pose;
pub mod robot;
pub mod session;
pub mod tabletop;

pub use command::*;
pub use error::*;
pub use pose::*;
pub use robot::*;
pub use session::*;
pub use tabletop::*;
