//! Terminal adapters for the user-facing ports.

mod notifier;
mod prompt;

pub use notifier::ConsoleNotifier;
pub use prompt::{parse_answer, AutoConfirmation, StdinConfirmation};
