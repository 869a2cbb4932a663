//! Problem solver sheet - the wizard's data model and behaviour.
//!
//! # Module Organization
//!
//! - `problem` - Problem definition fields, categories, word count
//! - `root_cause` - Fixed-depth 5 Whys chain
//! - `score` - Priority score for solutions
//! - `solution` - Brainstormed ideas with effort/impact ratings
//! - `action` - Action plan rows addressed by stable id
//! - `list` - Immutable positional and keyed list editors
//! - `state` - The `WizardState` aggregate
//! - `edit` - `SheetEdit`, the single entry point for changing a sheet
//! - `step` - Step sequence and progress tracker
//! - `wizard` - Step navigation and the confirmed reset
//! - `views` - Sorted and filtered projections for the action plan and summary

mod action;
mod edit;
pub mod list;
mod problem;
mod root_cause;
mod score;
mod solution;
mod state;
mod step;
pub mod views;
mod wizard;

pub use action::{
    add_action, parse_deadline, remove_action, update_action, Action, ActionField, ActionStatus,
    DEADLINE_FORMAT,
};
pub use edit::SheetEdit;
pub use problem::{word_count, word_label, ProblemCategory, ProblemData, ProblemField};
pub use root_cause::{RootCause, RootCauseChain, CHAIN_DEPTH};
pub use score::compute_score;
pub use solution::{add_solution, remove_solution, update_solution, Solution, SolutionField};
pub use state::WizardState;
pub use step::{StepProgress, WizardStep};
pub use views::{
    next_actions, score_chart, sort_actions, top_solutions, ActionSort, ScoreBar, SummaryView,
};
pub use wizard::{Confirmation, Navigation, Wizard};
