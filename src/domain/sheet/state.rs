//! WizardState aggregate - everything the sheet collects.

use serde::{Deserialize, Serialize};

use super::{Action, ProblemData, RootCauseChain, Solution};

/// The whole sheet.
///
/// Values are replaced, never mutated in place: every edit produces a new
/// aggregate through the `with_*` methods or [`SheetEdit::apply`]. The
/// serialized form (camelCase JSON) is what gets written to the store.
///
/// [`SheetEdit::apply`]: super::SheetEdit::apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub problem: ProblemData,
    pub root_causes: RootCauseChain,
    pub solutions: Vec<Solution>,
    pub actions: Vec<Action>,
}

impl WizardState {
    /// The fixed starting sheet: empty problem, five blank whys, one blank
    /// solution, no actions.
    pub fn initial() -> Self {
        Self {
            problem: ProblemData::default(),
            root_causes: RootCauseChain::empty(),
            solutions: vec![Solution::blank()],
            actions: Vec::new(),
        }
    }

    pub fn with_problem(&self, problem: ProblemData) -> Self {
        Self {
            problem,
            ..self.clone()
        }
    }

    pub fn with_root_causes(&self, root_causes: RootCauseChain) -> Self {
        Self {
            root_causes,
            ..self.clone()
        }
    }

    pub fn with_solutions(&self, solutions: Vec<Solution>) -> Self {
        Self {
            solutions,
            ..self.clone()
        }
    }

    pub fn with_actions(&self, actions: Vec<Action>) -> Self {
        Self {
            actions,
            ..self.clone()
        }
    }

    /// True when nothing has been entered since the initial state.
    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::initial()
    }
}
