//! SheetSession - the wizard bound to its persistence.
//!
//! Every sheet replacement is written through the repository before the
//! call returns. A failed write is logged and the session carries on in
//! memory.

use tracing::{debug, info, warn};

use super::SheetRepository;
use crate::domain::sheet::{Navigation, SheetEdit, Wizard, WizardState, WizardStep};
use crate::ports::{ConfirmationPrompt, Notification, Notifier, NEW_SHEET_PROMPT};

/// Notification shown after a confirmed reset.
pub const RESET_MESSAGE: &str = "Started new problem sheet!";

/// Wizard controller with write-through persistence.
pub struct SheetSession {
    wizard: Wizard,
    repository: SheetRepository,
    persisted: bool,
}

impl SheetSession {
    /// Restores the stored sheet (or the initial one) on the first step.
    pub async fn open(repository: SheetRepository) -> Self {
        let state = repository.load().await;
        Self {
            wizard: Wizard::new(state),
            repository,
            persisted: true,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn state(&self) -> &WizardState {
        self.wizard.state()
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    /// False once the latest save failed; the sheet then lives in memory only.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Applies an edit and persists the new sheet.
    pub async fn apply(&mut self, edit: SheetEdit) -> &WizardState {
        let kind = edit.kind();
        self.wizard.apply(edit);
        self.persist(kind).await;
        self.wizard.state()
    }

    pub fn advance(&mut self) -> Navigation {
        let nav = self.wizard.advance();
        if nav.moved {
            debug!(from = %nav.from, to = %nav.to, "Advanced");
        }
        nav
    }

    pub fn retreat(&mut self) -> Navigation {
        let nav = self.wizard.retreat();
        if nav.moved {
            debug!(from = %nav.from, to = %nav.to, "Went back");
        }
        nav
    }

    /// Asks for confirmation, then clears the sheet and returns to the first
    /// step. Declining changes nothing. Returns whether the reset happened.
    pub async fn reset(
        &mut self,
        prompt: &dyn ConfirmationPrompt,
        notifier: &dyn Notifier,
    ) -> bool {
        let confirmation = prompt.confirm(NEW_SHEET_PROMPT).await;
        if !self.wizard.reset(confirmation) {
            debug!("Reset declined");
            return false;
        }

        self.persist("reset").await;
        info!("Started a new sheet");
        notifier.notify(Notification::success(RESET_MESSAGE)).await;
        true
    }

    async fn persist(&mut self, reason: &'static str) {
        match self.repository.save(self.wizard.state()).await {
            Ok(()) => {
                self.persisted = true;
                debug!(reason, key = self.repository.key(), "Sheet saved");
            }
            Err(e) => {
                self.persisted = false;
                warn!(reason, error = %e, "Failed to save sheet, continuing in memory");
            }
        }
    }
}
