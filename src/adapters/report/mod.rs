//! Report adapters.
//!
//! - `PlainTextReportGenerator` - renders the summary report text
//! - `FileDownloadExporter` - saves the report into a download directory
//! - `ClipboardExporter` - pipes the report into a clipboard command

mod clipboard_exporter;
mod file_download_exporter;
mod plain_text_generator;

pub use clipboard_exporter::ClipboardExporter;
pub use file_download_exporter::FileDownloadExporter;
pub use plain_text_generator::{format_date, format_timestamp, PlainTextReportGenerator};
