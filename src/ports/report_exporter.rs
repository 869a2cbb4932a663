//! Report Exporter Port - Delivery of the finished report.
//!
//! Two targets exist: the clipboard and a downloaded text file. Both receive
//! the same [`ReportPayload`]; their success or failure never feeds back
//! into the sheet, only into a notification.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use super::ReportPayload;

/// Port for delivering a report to the user.
///
/// # Contract
///
/// Implementations must:
/// - Deliver the payload body byte for byte
/// - Leave no partial artifact behind on failure
/// - Report failures as `ExportError`, never panic
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Which target this exporter serves.
    fn target(&self) -> ExportTarget;

    /// Deliver the payload.
    async fn export(&self, payload: &ReportPayload) -> Result<ExportReceipt, ExportError>;
}

/// Export targets offered on the summary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportTarget {
    Clipboard,
    Download,
}

impl ExportTarget {
    /// Notification shown when the export succeeds.
    pub fn success_message(&self) -> &'static str {
        match self {
            ExportTarget::Clipboard => "Summary copied to clipboard!",
            ExportTarget::Download => "Report downloaded!",
        }
    }
}

impl std::fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportTarget::Clipboard => write!(f, "clipboard"),
            ExportTarget::Download => write!(f, "download"),
        }
    }
}

impl std::str::FromStr for ExportTarget {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clipboard" | "copy" => Ok(ExportTarget::Clipboard),
            "download" | "file" => Ok(ExportTarget::Download),
            _ => Err(ExportError::UnsupportedTarget(s.to_string())),
        }
    }
}

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportReceipt {
    Copied { bytes: usize },
    Saved { path: PathBuf },
}

/// Errors from export operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The target cannot be used in this environment.
    #[error("Export target unavailable: {0}")]
    Unavailable(String),

    /// Unknown target name.
    #[error("Unsupported export target: {0}")]
    UnsupportedTarget(String),

    /// Writing the payload failed.
    #[error("Export failed: {0}")]
    Failed(String),

    /// IO error during export.
    #[error("IO error: {0}")]
    Io(String),
}

impl ExportError {
    pub fn failed(message: impl Into<String>) -> Self {
        ExportError::Failed(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        ExportError::Io(message.into())
    }
}
