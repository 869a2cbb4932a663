//! ExportReportHandler - Command handler for copying or downloading the report.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::sheet::WizardState;
use crate::ports::{
    ExportError, ExportReceipt, ExportTarget, Notification, Notifier, ReportExporter,
    ReportGenerator, ReportPayload,
};

/// Command to export the current sheet.
#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub target: ExportTarget,
    /// Used for the "Generated:" line and the download filename.
    pub requested_at: Timestamp,
}

impl ExportReportCommand {
    pub fn now(target: ExportTarget) -> Self {
        Self {
            target,
            requested_at: Timestamp::now(),
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportReportResult {
    pub payload: ReportPayload,
    pub receipt: ExportReceipt,
}

/// Handler for report exports.
///
/// Renders the report, hands it to the exporter registered for the target
/// and notifies the user either way. The sheet is only read.
pub struct ExportReportHandler {
    generator: Arc<dyn ReportGenerator>,
    exporters: Vec<Arc<dyn ReportExporter>>,
    notifier: Arc<dyn Notifier>,
}

impl ExportReportHandler {
    pub fn new(
        generator: Arc<dyn ReportGenerator>,
        exporters: Vec<Arc<dyn ReportExporter>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            generator,
            exporters,
            notifier,
        }
    }

    /// Renders the report without exporting it.
    pub fn render(&self, state: &WizardState, generated_at: &Timestamp) -> ReportPayload {
        let body = self.generator.generate(state, generated_at);
        ReportPayload::new(body, generated_at)
    }

    pub async fn handle(
        &self,
        state: &WizardState,
        cmd: ExportReportCommand,
    ) -> Result<ExportReportResult, ExportError> {
        let result = self.export(state, &cmd).await;

        let notification = match &result {
            Ok(_) => Notification::success(cmd.target.success_message()),
            Err(e) => {
                tracing::warn!(target_kind = %cmd.target, error = %e, "Report export failed");
                Notification::error(failure_message(cmd.target, e))
            }
        };
        self.notifier.notify(notification).await;

        result
    }

    async fn export(
        &self,
        state: &WizardState,
        cmd: &ExportReportCommand,
    ) -> Result<ExportReportResult, ExportError> {
        // 1. Find exporter
        let exporter = self
            .exporters
            .iter()
            .find(|e| e.target() == cmd.target)
            .ok_or_else(|| ExportError::Unavailable(cmd.target.to_string()))?;

        // 2. Render
        let payload = self.render(state, &cmd.requested_at);

        // 3. Deliver
        let receipt = exporter.export(&payload).await?;

        Ok(ExportReportResult { payload, receipt })
    }
}

fn failure_message(target: ExportTarget, error: &ExportError) -> String {
    match target {
        ExportTarget::Clipboard => format!("Could not copy summary: {}", error),
        ExportTarget::Download => format!("Could not download report: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::report::PlainTextReportGenerator;
    use crate::ports::NotificationLevel;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockExporter {
        target: ExportTarget,
        fail: bool,
        received: Mutex<Vec<ReportPayload>>,
    }

    impl MockExporter {
        fn new(target: ExportTarget) -> Self {
            Self {
                target,
                fail: false,
                received: Mutex::new(Vec::new()),
            }
        }

        fn failing(target: ExportTarget) -> Self {
            Self {
                fail: true,
                ..Self::new(target)
            }
        }

        fn received(&self) -> Vec<ReportPayload> {
            self.received.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReportExporter for MockExporter {
        fn target(&self) -> ExportTarget {
            self.target
        }

        async fn export(&self, payload: &ReportPayload) -> Result<ExportReceipt, ExportError> {
            if self.fail {
                return Err(ExportError::failed("permission denied"));
            }
            self.received.lock().unwrap().push(payload.clone());
            Ok(ExportReceipt::Copied {
                bytes: payload.body.len(),
            })
        }
    }

    struct MockNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    impl MockNotifier {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<Notification> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for MockNotifier {
        async fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }

    fn command(target: ExportTarget) -> ExportReportCommand {
        ExportReportCommand {
            target,
            requested_at: Timestamp::from_unix_millis(1_735_000_000_000),
        }
    }

    fn handler(
        exporters: Vec<Arc<dyn ReportExporter>>,
        notifier: Arc<MockNotifier>,
    ) -> ExportReportHandler {
        ExportReportHandler::new(Arc::new(PlainTextReportGenerator::new()), exporters, notifier)
    }

    #[tokio::test]
    async fn download_receives_report_and_notifies() {
        let exporter = Arc::new(MockExporter::new(ExportTarget::Download));
        let notifier = Arc::new(MockNotifier::new());
        let handler = handler(vec![exporter.clone()], notifier.clone());

        let result = handler
            .handle(&WizardState::initial(), command(ExportTarget::Download))
            .await
            .unwrap();

        assert_eq!(result.payload.filename, "problem-solver-1735000000000.txt");
        assert_eq!(exporter.received(), vec![result.payload.clone()]);
        assert_eq!(
            notifier.seen(),
            vec![Notification::success("Report downloaded!")]
        );
    }

    #[tokio::test]
    async fn clipboard_and_download_get_same_body() {
        let clipboard = Arc::new(MockExporter::new(ExportTarget::Clipboard));
        let download = Arc::new(MockExporter::new(ExportTarget::Download));
        let notifier = Arc::new(MockNotifier::new());
        let handler = handler(vec![clipboard.clone(), download.clone()], notifier);
        let state = WizardState::initial();

        handler.handle(&state, command(ExportTarget::Clipboard)).await.unwrap();
        handler.handle(&state, command(ExportTarget::Download)).await.unwrap();

        assert_eq!(clipboard.received()[0].body, download.received()[0].body);
    }

    #[tokio::test]
    async fn failure_notifies_error() {
        let exporter = Arc::new(MockExporter::failing(ExportTarget::Clipboard));
        let notifier = Arc::new(MockNotifier::new());
        let handler = handler(vec![exporter], notifier.clone());

        let result = handler
            .handle(&WizardState::initial(), command(ExportTarget::Clipboard))
            .await;

        assert!(matches!(result, Err(ExportError::Failed(_))));
        let seen = notifier.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].level, NotificationLevel::Error);
        assert!(seen[0].message.starts_with("Could not copy summary"));
    }

    #[tokio::test]
    async fn missing_exporter_is_unavailable() {
        let notifier = Arc::new(MockNotifier::new());
        let handler = handler(vec![], notifier.clone());

        let result = handler
            .handle(&WizardState::initial(), command(ExportTarget::Download))
            .await;

        assert!(matches!(result, Err(ExportError::Unavailable(_))));
        assert_eq!(notifier.seen()[0].level, NotificationLevel::Error);
    }

    #[test]
    fn render_uses_generator() {
        let handler = handler(vec![], Arc::new(MockNotifier::new()));
        let payload = handler.render(&WizardState::initial(), &Timestamp::from_unix_millis(5));
        assert!(payload.body.starts_with("PROBLEM SOLVER SHEET SUMMARY"));
        assert_eq!(payload.filename, "problem-solver-5.txt");
    }
}
