//! Application layer - Session, persistence, and command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The session owns the wizard and writes every sheet replacement through
//! the repository; handlers run one-off commands such as report export.

pub mod handlers;
mod sheet_repository;
mod sheet_session;

pub use handlers::{ExportReportCommand, ExportReportHandler, ExportReportResult};
pub use sheet_repository::{PersistenceError, SheetRepository, STATE_KEY};
pub use sheet_session::{SheetSession, RESET_MESSAGE};
