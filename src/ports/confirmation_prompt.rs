//! Confirmation Prompt Port - explicit user consent for destructive actions.

use async_trait::async_trait;

use crate::domain::sheet::Confirmation;

/// Question asked before a new sheet replaces the current one.
pub const NEW_SHEET_PROMPT: &str =
    "Are you sure you want to start a new sheet? All current data will be cleared.";

/// Port for asking the user to confirm an action.
///
/// Implementations that cannot reach the user must answer
/// [`Confirmation::Declined`].
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    async fn confirm(&self, question: &str) -> Confirmation;
}
