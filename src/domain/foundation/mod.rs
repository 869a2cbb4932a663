//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the problem solver sheet.

mod errors;
mod ids;
mod scale;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use ids::ActionId;
pub use scale::ScaleValue;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
