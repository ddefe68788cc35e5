//! Batch evaluation and simulation sessions.
//!
//! The engine only ever evaluates one line at a time. This module layers the
//! caller-side conveniences on top: running a pre-split batch in order while
//! continuing past failures, and a [`Session`] that keeps the successful
//! reports of every batch until it is reset.

use crate::error::EvaluationError;
use crate::robot::{Robot, RobotConfig};
use crate::tabletop::Tabletop;
use tracing::debug;

/// The result of evaluating one line of a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number within the evaluated input.
    pub number: usize,
    pub line: String,
    pub result: Result<Option<String>, EvaluationError>,
}

/// Per-line outcomes of a batch, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<LineOutcome>,
}

impl BatchReport {
    /// Successful textual results (the `REPORT` outputs), in order.
    pub fn reports(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok()?.as_deref())
    }

    /// Failed lines with their errors, in order.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &EvaluationError)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| Some((outcome.line.as_str(), outcome.result.as_ref().err()?)))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl Robot<'_> {
    /// Evaluates `lines` in order, continuing past individual failures.
    pub fn evaluate_lines<'l, I>(&mut self, lines: I) -> BatchReport
    where
        I: IntoIterator<Item = &'l str>,
    {
        self.evaluate_numbered(lines.into_iter().enumerate())
    }

    fn evaluate_numbered<'l, I>(&mut self, lines: I) -> BatchReport
    where
        I: Iterator<Item = (usize, &'l str)>,
    {
        let outcomes = lines
            .map(|(idx, line)| {
                let result = self.evaluate(line);
                match &result {
                    Ok(output) => debug!(line, ?output, "command ok"),
                    Err(err) => debug!(line, code = err.code(), "command dropped: {err}"),
                }
                LineOutcome {
                    number: idx + 1,
                    line: line.to_string(),
                    result,
                }
            })
            .collect();

        BatchReport { outcomes }
    }
}

/// A simulation session: one robot on one tabletop plus the reports gathered so far.
///
/// Pose and reports persist across calls to [`evaluate`](Self::evaluate) until
/// [`reset`](Self::reset) replaces the robot with a fresh, unplaced one.
#[derive(Clone, Debug)]
pub struct Session<'a> {
    robot: Robot<'a>,
    results: Vec<String>,
    skip_blank_lines: bool,
}

impl<'a> Session<'a> {
    pub fn new(tabletop: &'a Tabletop, config: RobotConfig) -> Self {
        Self {
            robot: Robot::with_config(tabletop, config),
            results: Vec::new(),
            skip_blank_lines: true,
        }
    }

    /// Whether lines that are blank after trimming are filtered out before
    /// evaluation (default) or passed through and reported as parse failures.
    pub fn skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Splits `text` on line breaks and evaluates every line in order.
    ///
    /// Successful reports are appended to [`results`](Self::results).
    pub fn evaluate(&mut self, text: &str) -> BatchReport {
        let skip_blank = self.skip_blank_lines;
        let lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !(skip_blank && line.trim().is_empty()));

        let batch = self.robot.evaluate_numbered(lines);
        self.results.extend(batch.reports().map(str::to_string));
        batch
    }

    /// Discards the robot and all gathered reports.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.robot = Robot::with_config(self.robot.tabletop(), *self.robot.config());
        self.results.clear();
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn robot(&self) -> &Robot<'a> {
        &self.robot
    }
}
