// tests/session.rs
use pretty_assertions::assert_eq;
use tabletop_robot::{EvaluationError, Robot, RobotConfig, Session, Tabletop};

fn setup() -> Tabletop {
    Tabletop::new(5, 5).unwrap()
}

#[test]
fn batch_continues_past_failures() {
    let table = setup();
    let mut robot = Robot::new(&table);

    let batch = robot.evaluate_lines([
        "MOVE",
        "PLACE 0,0,NORTH",
        "FLY",
        "MOVE",
        "REPORT",
        "PLACE 9,9,NORTH",
        "RIGHT",
        "REPORT",
    ]);

    assert_eq!(batch.len(), 8);
    assert_eq!(batch.reports().collect::<Vec<_>>(), ["0,1,NORTH", "0,1,EAST"]);

    let failures: Vec<_> = batch
        .failures()
        .map(|(line, err)| (line, err.code()))
        .collect();
    assert_eq!(
        failures,
        [
            ("MOVE", "NOT_PLACED"),
            ("FLY", "PARSE_ERROR"),
            ("PLACE 9,9,NORTH", "OUT_OF_BOUNDS"),
        ]
    );
    assert_eq!(batch.outcomes[2].number, 3);
}

#[test]
fn session_accumulates_reports_across_batches() {
    let table = setup();
    let mut session = Session::new(&table, RobotConfig::default());

    let first = session.evaluate("PLACE 0,0,NORTH\nMOVE\nREPORT\n");
    assert_eq!(first.reports().collect::<Vec<_>>(), ["0,1,NORTH"]);

    // Pose carries over into the next batch.
    session.evaluate("MOVE\r\nREPORT");
    assert_eq!(session.results(), ["0,1,NORTH", "0,2,NORTH"]);
}

#[test]
fn session_skips_blank_lines_by_default() {
    let table = setup();
    let mut session = Session::new(&table, RobotConfig::default());

    let batch = session.evaluate("\nPLACE 1,1,SOUTH\n   \n\nREPORT\n");
    assert_eq!(batch.len(), 2);
    assert_eq!(batch.failures().count(), 0);
    assert_eq!(batch.outcomes[1].number, 5);

    let mut strict = Session::new(&table, RobotConfig::default()).skip_blank_lines(false);
    let batch = strict.evaluate("PLACE 1,1,SOUTH\n\nREPORT");
    assert_eq!(batch.len(), 3);
    assert!(matches!(
        batch.failures().next(),
        Some(("", EvaluationError::Parse(_)))
    ));
    assert_eq!(strict.results(), ["1,1,SOUTH"]);
}

#[test]
fn reset_discards_robot_and_results() {
    let table = setup();
    let mut session = Session::new(&table, RobotConfig::default());

    session.evaluate("PLACE 2,2,WEST\nREPORT");
    assert!(session.robot().is_placed());

    session.reset();
    assert!(session.results().is_empty());
    assert!(!session.robot().is_placed());

    let batch = session.evaluate("REPORT");
    assert_eq!(batch.outcomes[0].result, Err(EvaluationError::NotPlaced));
}
