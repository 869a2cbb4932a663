//! SheetEdit - every change a step can make to the sheet.

use super::{action, list, solution, Action, ActionField, ProblemField, SolutionField, WizardState};
use crate::domain::foundation::ActionId;

/// One user edit, applied immutably to a [`WizardState`].
///
/// Each variant touches a single slice of the aggregate and leaves the rest
/// untouched. Edits that address a missing row (index past the end, unknown
/// action id) produce an equal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetEdit {
    /// Problem step: set one field.
    Problem(ProblemField),

    /// Root cause step: set the answer at a position.
    SetCause { index: usize, why: String },
    /// Root cause step: five blank answers.
    ResetCauses,

    /// Brainstorm step: append a blank idea.
    AddSolution,
    RemoveSolution { index: usize },
    UpdateSolution { index: usize, field: SolutionField },

    /// Action plan step: append a blank row with the given id. An id already
    /// on the sheet is never added twice.
    AddAction { id: ActionId },
    RemoveAction { id: ActionId },
    UpdateAction { id: ActionId, field: ActionField },
}

impl SheetEdit {
    /// Appends a blank action row with a freshly generated id.
    pub fn add_action() -> Self {
        SheetEdit::AddAction { id: ActionId::new() }
    }

    /// Produces the next state. `state` is not modified.
    pub fn apply(self, state: &WizardState) -> WizardState {
        match self {
            SheetEdit::Problem(field) => state.with_problem(state.problem.with_field(field)),
            SheetEdit::SetCause { index, why } => {
                state.with_root_causes(state.root_causes.update_at(index, why))
            }
            SheetEdit::ResetCauses => state.with_root_causes(state.root_causes.reset()),
            SheetEdit::AddSolution => state.with_solutions(solution::add_solution(&state.solutions)),
            SheetEdit::RemoveSolution { index } => {
                state.with_solutions(solution::remove_solution(&state.solutions, index))
            }
            SheetEdit::UpdateSolution { index, field } => {
                state.with_solutions(solution::update_solution(&state.solutions, index, field))
            }
            SheetEdit::AddAction { id } => {
                if state.actions.iter().any(|a| a.id == id) {
                    return state.clone();
                }
                state.with_actions(list::append(&state.actions, || Action::with_id(id)))
            }
            SheetEdit::RemoveAction { id } => {
                state.with_actions(action::remove_action(&state.actions, &id))
            }
            SheetEdit::UpdateAction { id, field } => {
                state.with_actions(action::update_action(&state.actions, &id, field))
            }
        }
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SheetEdit::Problem(_) => "problem",
            SheetEdit::SetCause { .. } => "set_cause",
            SheetEdit::ResetCauses => "reset_causes",
            SheetEdit::AddSolution => "add_solution",
            SheetEdit::RemoveSolution { .. } => "remove_solution",
            SheetEdit::UpdateSolution { .. } => "update_solution",
            SheetEdit::AddAction { .. } => "add_action",
            SheetEdit::RemoveAction { .. } => "remove_action",
            SheetEdit::UpdateAction { .. } => "update_action",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sheet::{compute_score, ActionStatus, RootCauseChain};

    #[test]
    fn problem_edit_changes_only_problem() {
        let state = WizardState::initial();
        let next = SheetEdit::Problem(ProblemField::Title("Slow builds".into())).apply(&state);

        assert_eq!(next.problem.title, "Slow builds");
        assert_eq!(next.root_causes, state.root_causes);
        assert_eq!(next.solutions, state.solutions);
        assert!(state.problem.title.is_empty());
    }

    #[test]
    fn cause_then_reset_returns_to_initial_chain() {
        let state = WizardState::initial();
        let filled = SheetEdit::SetCause {
            index: 0,
            why: "Too many meetings".into(),
        }
        .apply(&state);
        let filled = SheetEdit::SetCause {
            index: 1,
            why: "No agenda".into(),
        }
        .apply(&filled);

        let reset = SheetEdit::ResetCauses.apply(&filled);

        assert_eq!(reset.root_causes, RootCauseChain::empty());
        assert_eq!(reset, WizardState::initial());
    }

    #[test]
    fn solution_update_recomputes_score_in_same_edit() {
        let state = WizardState::initial();
        let next = SheetEdit::UpdateSolution {
            index: 0,
            field: SolutionField::Effort(5),
        }
        .apply(&state);

        assert_eq!(next.solutions[0].effort(), 5);
        assert_eq!(next.solutions[0].score(), compute_score(5, 3));
    }

    #[test]
    fn add_remove_solution() {
        let state = SheetEdit::AddSolution.apply(&WizardState::initial());
        assert_eq!(state.solutions.len(), 2);

        let state = SheetEdit::RemoveSolution { index: 0 }.apply(&state);
        assert_eq!(state.solutions.len(), 1);
    }

    #[test]
    fn action_lifecycle_by_id() {
        let id = ActionId::new();
        let state = SheetEdit::AddAction { id }.apply(&WizardState::initial());
        assert_eq!(state.actions.len(), 1);
        assert_eq!(state.actions[0].id, id);

        let state = SheetEdit::UpdateAction {
            id,
            field: ActionField::Status(ActionStatus::Done),
        }
        .apply(&state);
        assert_eq!(state.actions[0].status, ActionStatus::Done);

        let state = SheetEdit::RemoveAction { id }.apply(&state);
        assert!(state.actions.is_empty());
    }

    #[test]
    fn adding_an_existing_action_id_is_a_noop() {
        let id = ActionId::new();
        let state = SheetEdit::AddAction { id }.apply(&WizardState::initial());
        let state = SheetEdit::UpdateAction {
            id,
            field: ActionField::Step("Call the bank".into()),
        }
        .apply(&state);

        let again = SheetEdit::AddAction { id }.apply(&state);
        assert_eq!(again, state);
        assert_eq!(again.actions.iter().filter(|a| a.id == id).count(), 1);

        let removed = SheetEdit::RemoveAction { id }.apply(&again);
        assert!(removed.actions.is_empty());
    }

    #[test]
    fn edits_on_missing_rows_are_noops() {
        let state = WizardState::initial();
        assert_eq!(SheetEdit::RemoveSolution { index: 4 }.apply(&state), state);
        assert_eq!(
            SheetEdit::RemoveAction { id: ActionId::new() }.apply(&state),
            state
        );
        assert_eq!(
            SheetEdit::SetCause {
                index: 9,
                why: "x".into()
            }
            .apply(&state),
            state
        );
    }
}
