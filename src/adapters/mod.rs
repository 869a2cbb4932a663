//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - File and in-memory state stores
//! - `report` - Plain-text report generation, file download and clipboard export
//! - `console` - Terminal confirmation prompt and notifications
//! - `cli` - Command-line arguments, interactive commands and screen rendering

pub mod cli;
pub mod console;
pub mod report;
pub mod storage;

pub use console::{AutoConfirmation, ConsoleNotifier, StdinConfirmation};
pub use report::{ClipboardExporter, FileDownloadExporter, PlainTextReportGenerator};
pub use storage::{FileStateStore, InMemoryStateStore};
