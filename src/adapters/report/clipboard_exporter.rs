//! Clipboard exporter - pipes the report into a clipboard command.
//!
//! The command is configured (`xclip -selection clipboard`, `pbcopy`,
//! `wl-copy`, ...). Without one the clipboard is unavailable and the export
//! fails with an error notification.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::ports::{ExportError, ExportReceipt, ExportTarget, ReportExporter, ReportPayload};

/// Copies reports by writing them to a command's stdin.
#[derive(Debug, Clone, Default)]
pub struct ClipboardExporter {
    program: Option<String>,
    args: Vec<String>,
}

impl ClipboardExporter {
    /// Builds an exporter from a whitespace-separated command line.
    /// An empty or missing command leaves the clipboard unavailable.
    pub fn from_command_line(command: Option<&str>) -> Self {
        let mut parts = command.unwrap_or_default().split_whitespace().map(String::from);
        Self {
            program: parts.next(),
            args: parts.collect(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.program.is_some()
    }
}

#[async_trait]
impl ReportExporter for ClipboardExporter {
    fn target(&self) -> ExportTarget {
        ExportTarget::Clipboard
    }

    async fn export(&self, payload: &ReportPayload) -> Result<ExportReceipt, ExportError> {
        let program = self
            .program
            .as_deref()
            .ok_or_else(|| ExportError::Unavailable("no clipboard command configured".into()))?;

        let mut child = Command::new(program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExportError::Unavailable(format!("{}: {}", program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A command that exits early closes the pipe; its exit status
            // below is the better error.
            match stdin.write_all(payload.body.as_bytes()).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(e) => {
                    let _ = child.kill().await;
                    return Err(ExportError::io(e.to_string()));
                }
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ExportError::io(e.to_string()))?;

        if !status.success() {
            return Err(ExportError::failed(format!(
                "{} exited with {}",
                program, status
            )));
        }

        tracing::debug!(program, bytes = payload.body.len(), "Report copied");

        Ok(ExportReceipt::Copied {
            bytes: payload.body.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn payload() -> ReportPayload {
        ReportPayload::new("REPORT".to_string(), &Timestamp::from_unix_millis(1))
    }

    #[test]
    fn parses_command_line() {
        let exporter = ClipboardExporter::from_command_line(Some("xclip -selection clipboard"));
        assert_eq!(exporter.program.as_deref(), Some("xclip"));
        assert_eq!(exporter.args, vec!["-selection", "clipboard"]);
        assert!(exporter.is_available());
    }

    #[test]
    fn blank_command_is_unavailable() {
        assert!(!ClipboardExporter::from_command_line(None).is_available());
        assert!(!ClipboardExporter::from_command_line(Some("   ")).is_available());
    }

    #[tokio::test]
    async fn unavailable_without_command() {
        let result = ClipboardExporter::default().export(&payload()).await;
        assert!(matches!(result, Err(ExportError::Unavailable(_))));
    }

    #[tokio::test]
    async fn missing_program_is_unavailable() {
        let exporter =
            ClipboardExporter::from_command_line(Some("definitely-not-a-clipboard-tool-xyz"));
        let result = exporter.export(&payload()).await;
        assert!(matches!(result, Err(ExportError::Unavailable(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn pipes_report_into_command() {
        let exporter = ClipboardExporter::from_command_line(Some("cat"));
        let receipt = exporter.export(&payload()).await.unwrap();
        assert_eq!(receipt, ExportReceipt::Copied { bytes: 6 });
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_command_is_export_failure() {
        let exporter = ClipboardExporter::from_command_line(Some("false"));
        let result = exporter.export(&payload()).await;
        assert!(matches!(result, Err(ExportError::Failed(_))));
    }

    /// True while `/proc/<pid>` shows a process that has not been killed.
    #[cfg(target_os = "linux")]
    fn still_running(pid: &str) -> bool {
        match std::fs::read_to_string(format!("/proc/{}/stat", pid)) {
            Ok(stat) => !stat.contains(") Z "),
            Err(_) => false,
        }
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn abandoned_export_kills_command() {
        let dir = tempfile::TempDir::new().unwrap();
        let pid_file = dir.path().join("pid");
        // Records its pid, then never reads stdin, so the write blocks.
        let exporter = ClipboardExporter {
            program: Some("sh".into()),
            args: vec![
                "-c".into(),
                "echo $$ > \"$0\"; exec sleep 30".into(),
                pid_file.display().to_string(),
            ],
        };
        let big = ReportPayload::new("x".repeat(4 * 1024 * 1024), &Timestamp::from_unix_millis(1));

        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(500), exporter.export(&big)).await;
        assert!(timed_out.is_err());

        let pid = std::fs::read_to_string(&pid_file).unwrap();
        let pid = pid.trim();
        let mut gone = false;
        for _ in 0..40 {
            if !still_running(pid) {
                gone = true;
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }
        assert!(gone, "clipboard command {} outlived the export", pid);
    }
}
