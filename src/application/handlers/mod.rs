//! Command handlers.

mod export_report;

pub use export_report::{ExportReportCommand, ExportReportHandler, ExportReportResult};
