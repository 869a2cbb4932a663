//! WizardStep enum representing the five screens of the sheet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// The five wizard steps, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Problem,
    RootCause,
    Solutions,
    ActionPlan,
    Summary,
}

/// Where a step sits relative to the current one (progress tracker state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepProgress {
    Completed,
    Current,
    Upcoming,
}

impl WizardStep {
    /// Returns all steps in canonical order.
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Problem,
            WizardStep::RootCause,
            WizardStep::Solutions,
            WizardStep::ActionPlan,
            WizardStep::Summary,
        ]
    }

    /// First step.
    pub fn first() -> Self {
        WizardStep::Problem
    }

    /// Terminal step.
    pub fn last() -> Self {
        WizardStep::Summary
    }

    /// Returns the 0-based index of this step.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Problem => 0,
            WizardStep::RootCause => 1,
            WizardStep::Solutions => 2,
            WizardStep::ActionPlan => 3,
            WizardStep::Summary => 4,
        }
    }

    /// Returns the step at a 0-based index, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Returns the next step in order, if any.
    pub fn next(&self) -> Option<WizardStep> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the previous step in order, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Progress of this step when `current` is on screen.
    pub fn progress(&self, current: WizardStep) -> StepProgress {
        match self.index().cmp(&current.index()) {
            std::cmp::Ordering::Less => StepProgress::Completed,
            std::cmp::Ordering::Equal => StepProgress::Current,
            std::cmp::Ordering::Greater => StepProgress::Upcoming,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Problem => "Problem",
            WizardStep::RootCause => "Root Cause",
            WizardStep::Solutions => "Solutions",
            WizardStep::ActionPlan => "Action Plan",
            WizardStep::Summary => "Summary",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WizardStep::Problem => "🧩",
            WizardStep::RootCause => "🔍",
            WizardStep::Solutions => "💡",
            WizardStep::ActionPlan => "🧭",
            WizardStep::Summary => "📊",
        }
    }
}

impl StateMachine for WizardStep {
    /// Neighbours, plus the jump back to the first step on reset.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target)
            || self.previous() == Some(*target)
            || (*target == WizardStep::Problem && *self != WizardStep::Problem)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        let mut targets: Vec<Self> = [self.previous(), self.next()].into_iter().flatten().collect();
        if *self != WizardStep::Problem && !targets.contains(&WizardStep::Problem) {
            targets.insert(0, WizardStep::Problem);
        }
        targets
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for WizardStep {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "problem" | "0" => Ok(WizardStep::Problem),
            "root_cause" | "causes" | "1" => Ok(WizardStep::RootCause),
            "solutions" | "2" => Ok(WizardStep::Solutions),
            "action_plan" | "actions" | "3" => Ok(WizardStep::ActionPlan),
            "summary" | "4" => Ok(WizardStep::Summary),
            _ => Err(ValidationError::invalid_format(
                "step",
                format!("unknown step '{}'", s),
            )),
        }
    }
}
