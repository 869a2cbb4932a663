//! File download exporter - saves the report as a plain-text file.
//!
//! Writes go to `{download_dir}/{payload.filename}` through a temp file and
//! an atomic rename, so a failed export never leaves a half-written report.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{ExportError, ExportReceipt, ExportTarget, ReportExporter, ReportPayload};

/// Saves reports into a download directory.
#[derive(Debug, Clone)]
pub struct FileDownloadExporter {
    download_dir: PathBuf,
}

impl FileDownloadExporter {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Rejects filenames that would land outside the download directory.
    fn checked_filename(filename: &str) -> Result<&str, ExportError> {
        let plain = !filename.is_empty()
            && !filename.starts_with('.')
            && !filename.contains(['/', '\\']);
        if plain {
            Ok(filename)
        } else {
            Err(ExportError::failed(format!("invalid filename: {}", filename)))
        }
    }
}

#[async_trait]
impl ReportExporter for FileDownloadExporter {
    fn target(&self) -> ExportTarget {
        ExportTarget::Download
    }

    async fn export(&self, payload: &ReportPayload) -> Result<ExportReceipt, ExportError> {
        let filename = Self::checked_filename(&payload.filename)?;

        fs::create_dir_all(&self.download_dir).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to create download directory {}: {}",
                self.download_dir.display(),
                e
            ))
        })?;

        let final_path = self.download_dir.join(filename);
        let temp_path = self.download_dir.join(format!("{}.tmp", filename));

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        if let Err(e) = file.write_all(payload.body.as_bytes()).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(ExportError::io(format!(
                "Failed to write {}: {}",
                temp_path.display(),
                e
            )));
        }

        file.sync_all().await.map_err(|e| {
            ExportError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        tracing::info!(path = %final_path.display(), bytes = payload.body.len(), "Report saved");

        Ok(ExportReceipt::Saved { path: final_path })
    }
}
