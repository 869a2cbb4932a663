//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StateStore` - Durable key-value store for the serialized sheet
//! - `ReportGenerator` - Renders the plain-text summary report
//! - `ReportExporter` - Clipboard and file-download delivery of the report
//! - `ConfirmationPrompt` - Explicit consent before a destructive reset
//! - `Notifier` - Transient success/error notifications

mod confirmation_prompt;
mod notifier;
mod report_exporter;
mod report_generator;
mod state_store;

pub use confirmation_prompt::{ConfirmationPrompt, NEW_SHEET_PROMPT};
pub use notifier::{Notification, NotificationLevel, Notifier};
pub use report_exporter::{ExportError, ExportReceipt, ExportTarget, ReportExporter};
pub use report_generator::{report_filename, ReportGenerator, ReportPayload, REPORT_CONTENT_TYPE};
pub use state_store::{validate_key, StateStore, StateStoreError};
