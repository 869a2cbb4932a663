//! Derived read-only views over the sheet.
//!
//! Nothing here is cached or stored: each function projects the current
//! state on demand and borrows from it. All sorts are stable, so ties keep
//! their input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use super::{Action, Solution, WizardState};
use crate::domain::foundation::ValidationError;

/// How many solutions the summary highlights.
pub const TOP_SOLUTIONS_LIMIT: usize = 3;

/// How many actions the summary highlights.
pub const NEXT_ACTIONS_LIMIT: usize = 3;

/// User-selectable ordering of the action plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ActionSort {
    #[default]
    Deadline,
    Status,
}

impl fmt::Display for ActionSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionSort::Deadline => write!(f, "deadline"),
            ActionSort::Status => write!(f, "status"),
        }
    }
}

impl FromStr for ActionSort {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deadline" => Ok(ActionSort::Deadline),
            "status" => Ok(ActionSort::Status),
            _ => Err(ValidationError::invalid_format(
                "sort",
                format!("expected 'deadline' or 'status', got '{}'", s),
            )),
        }
    }
}

/// Earlier dates first; missing or unparseable deadlines after every dated row.
fn by_deadline(a: &Action, b: &Action) -> Ordering {
    compare_deadlines(a.deadline_date(), b.deadline_date())
}

fn compare_deadlines(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The action plan in display order. The stored order is not changed.
pub fn sort_actions(actions: &[Action], sort: ActionSort) -> Vec<&Action> {
    let mut sorted: Vec<&Action> = actions.iter().collect();
    match sort {
        ActionSort::Deadline => sorted.sort_by(|a, b| by_deadline(a, b)),
        ActionSort::Status => sorted.sort_by_key(|a| a.status.rank()),
    }
    sorted
}

/// Up to three ideas with the highest score; blank ideas are skipped.
pub fn top_solutions(solutions: &[Solution]) -> Vec<&Solution> {
    let mut ranked: Vec<&Solution> = solutions.iter().filter(|s| s.has_idea()).collect();
    ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
    ranked.truncate(TOP_SOLUTIONS_LIMIT);
    ranked
}

/// Up to three actions with a step and a deadline, soonest first.
pub fn next_actions(actions: &[Action]) -> Vec<&Action> {
    let mut upcoming: Vec<&Action> = actions
        .iter()
        .filter(|a| !a.step.is_empty() && !a.deadline.is_empty())
        .collect();
    upcoming.sort_by(|a, b| by_deadline(a, b));
    upcoming.truncate(NEXT_ACTIONS_LIMIT);
    upcoming
}

/// One bar of the brainstorm chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBar {
    pub name: String,
    pub score: f64,
}

/// Bars for every idea with text, labelled "Idea N" in list order, score
/// rounded to two decimals.
pub fn score_chart(solutions: &[Solution]) -> Vec<ScoreBar> {
    solutions
        .iter()
        .filter(|s| s.has_idea())
        .enumerate()
        .map(|(i, s)| ScoreBar {
            name: format!("Idea {}", i + 1),
            score: (s.score() * 100.0).round() / 100.0,
        })
        .collect()
}

/// The summary dashboard's highlights.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView<'a> {
    pub top_solutions: Vec<&'a Solution>,
    pub next_actions: Vec<&'a Action>,
}

impl<'a> SummaryView<'a> {
    pub fn of(state: &'a WizardState) -> Self {
        Self {
            top_solutions: top_solutions(&state.solutions),
            next_actions: next_actions(&state.actions),
        }
    }
}
