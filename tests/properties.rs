//! Property-based tests for the robot state machine.
//!
//! Random tables, poses and command streams check that:
//! 1. PLACE then REPORT reproduces the placement verbatim
//! 2. an unplaced robot rejects everything but PLACE
//! 3. four turns in one direction restore the facing
//! 4. moves off an edge are rejected repeatedly without changing the pose
//! 5. no line, however malformed, ever leaves the robot off the table

use proptest::prelude::*;
use tabletop_robot::{EvaluationError, Facing, Pose, Robot, Tabletop};

fn facing_strategy() -> impl Strategy<Value = Facing> {
    prop::sample::select(Facing::ALL.to_vec())
}

/// A table plus a cell on it.
fn placement_strategy() -> impl Strategy<Value = (u32, u32, i32, i32, Facing)> {
    (1u32..=20, 1u32..=20).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            0..w as i32,
            0..h as i32,
            facing_strategy(),
        )
    })
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("MOVE".to_string()),
        Just("LEFT".to_string()),
        Just("RIGHT".to_string()),
        Just("REPORT".to_string()),
        (-3i32..25, -3i32..25, facing_strategy())
            .prop_map(|(x, y, f)| format!("PLACE {x},{y},{f}")),
        "[A-Za-z0-9, ]{0,16}",
    ]
}

proptest! {
    #[test]
    fn place_then_report_round_trips((w, h, x, y, facing) in placement_strategy()) {
        let table = Tabletop::new(w, h).unwrap();
        let mut robot = Robot::new(&table);

        prop_assert_eq!(robot.evaluate(&format!("PLACE {x},{y},{facing}")), Ok(None));
        prop_assert_eq!(robot.evaluate("REPORT"), Ok(Some(format!("{x},{y},{facing}"))));
    }

    #[test]
    fn unplaced_robot_rejects_non_place(cmd in prop::sample::select(vec!["MOVE", "LEFT", "RIGHT", "REPORT"])) {
        let table = Tabletop::new(5, 5).unwrap();
        let mut robot = Robot::new(&table);

        for _ in 0..3 {
            prop_assert_eq!(robot.evaluate(cmd), Err(EvaluationError::NotPlaced));
            prop_assert!(!robot.is_placed());
        }
    }

    #[test]
    fn four_turns_restore_facing(
        (w, h, x, y, facing) in placement_strategy(),
        turn in prop::sample::select(vec!["LEFT", "RIGHT"]),
    ) {
        let table = Tabletop::new(w, h).unwrap();
        let mut robot = Robot::new(&table);
        robot.evaluate(&format!("PLACE {x},{y},{facing}")).unwrap();

        for _ in 0..4 {
            robot.evaluate(turn).unwrap();
        }
        prop_assert_eq!(robot.pose(), Some(Pose::new(x, y, facing)));
    }

    #[test]
    fn edge_moves_are_idempotently_rejected(
        (w, h, x, y, _) in placement_strategy(),
        facing in facing_strategy(),
        repeats in 1usize..6,
    ) {
        let table = Tabletop::new(w, h).unwrap();
        // Push the robot onto the edge it is facing.
        let (x, y) = match facing {
            Facing::North => (x, h as i32 - 1),
            Facing::South => (x, 0),
            Facing::East => (w as i32 - 1, y),
            Facing::West => (0, y),
        };
        let mut robot = Robot::new(&table);
        robot.evaluate(&format!("PLACE {x},{y},{facing}")).unwrap();
        let pose = robot.pose();

        for _ in 0..repeats {
            let is_out_of_bounds = matches!(
                robot.evaluate("MOVE"),
                Err(EvaluationError::OutOfBounds { .. })
            );
            prop_assert!(is_out_of_bounds);
            prop_assert_eq!(robot.pose(), pose);
        }
    }

    #[test]
    fn pose_never_leaves_the_table(
        (w, h) in (1u32..=8, 1u32..=8),
        lines in prop::collection::vec(line_strategy(), 0..40),
    ) {
        let table = Tabletop::new(w, h).unwrap();
        let mut robot = Robot::new(&table);

        for line in &lines {
            let before = robot.pose();
            if robot.evaluate(line).is_err() {
                prop_assert_eq!(robot.pose(), before, "failed `{}` changed state", line);
            }
            if let Some(pose) = robot.pose() {
                prop_assert!(table.contains(pose.position));
            }
        }
    }
}
