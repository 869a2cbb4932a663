//! Brainstorming step: solution ideas rated by effort and impact.

use serde::{Deserialize, Serialize};

use super::list;
use super::score::compute_score;
use crate::domain::foundation::ScaleValue;

/// A brainstormed idea.
///
/// # Invariants
///
/// - `score == compute_score(effort, impact)` at all times. The score is
///   only written by the constructor and the effort/impact setters, and is
///   recomputed when a persisted solution is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredSolution")]
pub struct Solution {
    idea: String,
    effort: u8,
    impact: u8,
    score: f64,
}

/// A single field edit on a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionField {
    Idea(String),
    Effort(u8),
    Impact(u8),
}

impl Solution {
    pub fn new(idea: impl Into<String>, effort: u8, impact: u8) -> Self {
        Self {
            idea: idea.into(),
            effort,
            impact,
            score: compute_score(effort, impact),
        }
    }

    /// Empty idea at the slider midpoints (effort 3, impact 3, score 1).
    pub fn blank() -> Self {
        let mid = ScaleValue::MIDPOINT.value();
        Self::new("", mid, mid)
    }

    pub fn idea(&self) -> &str {
        &self.idea
    }

    pub fn effort(&self) -> u8 {
        self.effort
    }

    pub fn impact(&self) -> u8 {
        self.impact
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn has_idea(&self) -> bool {
        !self.idea.is_empty()
    }

    /// Returns a copy with one field replaced; effort and impact edits
    /// recompute the score in the same step.
    pub fn with_field(&self, field: SolutionField) -> Self {
        match field {
            SolutionField::Idea(idea) => Self {
                idea,
                ..self.clone()
            },
            SolutionField::Effort(effort) => Self::new(self.idea.clone(), effort, self.impact),
            SolutionField::Impact(impact) => Self::new(self.idea.clone(), self.effort, impact),
        }
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::blank()
    }
}

/// Wire shape of a solution. The persisted `score` is ignored on load.
#[derive(Deserialize)]
struct StoredSolution {
    #[serde(default)]
    idea: String,
    effort: u8,
    impact: u8,
}

impl From<StoredSolution> for Solution {
    fn from(stored: StoredSolution) -> Self {
        Solution::new(stored.idea, stored.effort, stored.impact)
    }
}

/// Appends a blank solution.
pub fn add_solution(solutions: &[Solution]) -> Vec<Solution> {
    list::append(solutions, Solution::blank)
}

/// Removes the solution at `index`.
pub fn remove_solution(solutions: &[Solution], index: usize) -> Vec<Solution> {
    list::remove_at(solutions, index)
}

/// Applies one field edit to the solution at `index`.
pub fn update_solution(solutions: &[Solution], index: usize, field: SolutionField) -> Vec<Solution> {
    list::update_at(solutions, index, |s| s.with_field(field))
}
