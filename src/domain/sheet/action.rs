//! Action plan step: concrete steps with an owner, deadline and status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::list::{self, Keyed};
use crate::domain::foundation::{ActionId, ValidationError};

/// Date format of the deadline field (`<input type="date">` style).
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Progress of an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

impl ActionStatus {
    pub fn all() -> &'static [ActionStatus] {
        &[
            ActionStatus::NotStarted,
            ActionStatus::InProgress,
            ActionStatus::Done,
        ]
    }

    /// Sort rank: not started before in progress before done.
    pub fn rank(&self) -> u8 {
        match self {
            ActionStatus::NotStarted => 0,
            ActionStatus::InProgress => 1,
            ActionStatus::Done => 2,
        }
    }

    /// Wire value, e.g. `not-started`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::NotStarted => "not-started",
            ActionStatus::InProgress => "in-progress",
            ActionStatus::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionStatus::NotStarted => "Not Started",
            ActionStatus::InProgress => "In Progress",
            ActionStatus::Done => "Done",
        }
    }

    /// Upper-case form with the hyphen turned into a space, e.g. `NOT STARTED`.
    pub fn report_label(&self) -> String {
        self.as_str().replacen('-', " ", 1).to_uppercase()
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "not-started" | "todo" => Ok(ActionStatus::NotStarted),
            "in-progress" | "doing" => Ok(ActionStatus::InProgress),
            "done" => Ok(ActionStatus::Done),
            _ => Err(ValidationError::invalid_format(
                "status",
                format!("unknown status '{}'", s),
            )),
        }
    }
}

/// A concrete step in the action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    pub step: String,
    pub responsible: String,
    /// `YYYY-MM-DD`, or empty when not yet chosen.
    pub deadline: String,
    pub status: ActionStatus,
}

/// A single field edit on an action. The id is never editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionField {
    Step(String),
    Responsible(String),
    Deadline(String),
    Status(ActionStatus),
}

impl Action {
    /// A blank row with a freshly generated id.
    pub fn blank() -> Self {
        Self::with_id(ActionId::new())
    }

    /// A blank row with the given id.
    pub fn with_id(id: ActionId) -> Self {
        Self {
            id,
            step: String::new(),
            responsible: String::new(),
            deadline: String::new(),
            status: ActionStatus::NotStarted,
        }
    }

    /// The deadline as a calendar date, if it parses.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        parse_deadline(&self.deadline)
    }

    /// Returns a copy with exactly one field replaced.
    pub fn with_field(&self, field: ActionField) -> Self {
        let mut next = self.clone();
        match field {
            ActionField::Step(v) => next.step = v,
            ActionField::Responsible(v) => next.responsible = v,
            ActionField::Deadline(v) => next.deadline = v,
            ActionField::Status(v) => next.status = v,
        }
        next
    }
}

impl Keyed for Action {
    type Key = ActionId;

    fn key(&self) -> &ActionId {
        &self.id
    }
}

/// Parses a `YYYY-MM-DD` deadline; anything else is `None`.
pub fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DEADLINE_FORMAT).ok()
}

/// Appends a blank action with a new id.
pub fn add_action(actions: &[Action]) -> Vec<Action> {
    list::append(actions, Action::blank)
}

/// Removes the action with `id`; unknown ids leave the plan unchanged.
pub fn remove_action(actions: &[Action], id: &ActionId) -> Vec<Action> {
    list::remove_by_key(actions, id)
}

/// Applies one field edit to the action with `id`.
pub fn update_action(actions: &[Action], id: &ActionId, field: ActionField) -> Vec<Action> {
    list::update_by_key(actions, id, |a| a.with_field(field))
}
