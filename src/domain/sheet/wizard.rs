//! Wizard - the current step plus the sheet it is editing.
//!
//! The wizard is the only long-lived holder of a [`WizardState`]. Editors get
//! a borrowed snapshot and hand back a [`SheetEdit`]; the wizard swaps in the
//! resulting state.

use super::{SheetEdit, WizardState, WizardStep};
use crate::domain::foundation::StateMachine;

/// Answer to the "start a new sheet?" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    pub fn from_bool(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

/// Result of a step change.
///
/// When `moved` is true the caller should bring the view back to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub from: WizardStep,
    pub to: WizardStep,
    pub moved: bool,
}

/// Wizard controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    step: WizardStep,
    state: WizardState,
}

impl Wizard {
    /// Starts on the first step with the given sheet (restored or initial).
    pub fn new(state: WizardState) -> Self {
        Self {
            step: WizardStep::first(),
            state,
        }
    }

    /// Starts on the first step with the fixed initial sheet.
    pub fn initial() -> Self {
        Self::new(WizardState::initial())
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// "Previous" is disabled on the first step.
    pub fn can_retreat(&self) -> bool {
        self.step.previous().is_some()
    }

    /// "Next" is hidden on the summary step.
    pub fn can_advance(&self) -> bool {
        self.step.next().is_some()
    }

    /// Moves one step forward; no-op on the summary step.
    pub fn advance(&mut self) -> Navigation {
        let target = self.step.next();
        self.move_to(target)
    }

    /// Moves one step back; no-op on the problem step.
    pub fn retreat(&mut self) -> Navigation {
        let target = self.step.previous();
        self.move_to(target)
    }

    fn move_to(&mut self, target: Option<WizardStep>) -> Navigation {
        let from = self.step;
        match target.and_then(|t| from.transition_to(t).ok()) {
            Some(to) => {
                self.step = to;
                Navigation { from, to, moved: true }
            }
            None => Navigation {
                from,
                to: from,
                moved: false,
            },
        }
    }

    /// Applies an edit, replacing the sheet. Returns the new sheet.
    pub fn apply(&mut self, edit: SheetEdit) -> &WizardState {
        self.state = edit.apply(&self.state);
        &self.state
    }

    /// Discards the sheet and returns to the first step.
    ///
    /// Only acts on [`Confirmation::Confirmed`]; a declined confirmation
    /// leaves step and sheet untouched. Returns whether the reset happened.
    pub fn reset(&mut self, confirmation: Confirmation) -> bool {
        if !confirmation.is_confirmed() {
            return false;
        }
        self.step = WizardStep::first();
        self.state = WizardState::initial();
        true
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::initial()
    }
}
