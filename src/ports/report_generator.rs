//! Report Generator Port - Plain-text summary interface.
//!
//! This port defines the contract for rendering a sheet into the exported
//! summary report. Adapters (like PlainTextReportGenerator) provide the
//! implementation.

use crate::domain::foundation::Timestamp;
use crate::domain::sheet::WizardState;

/// MIME type of every generated report.
pub const REPORT_CONTENT_TYPE: &str = "text/plain";

/// Port for rendering the summary report.
///
/// # Contract
///
/// Implementations must:
/// - Be pure: the same state and timestamp always yield the same text
/// - Use `generated_at` only for the "Generated:" header line
/// - Emit the sections in fixed order: problem overview, root cause chain,
///   top solutions, next actions
/// - Never mutate or reject the state; incomplete rows are filtered out
///
/// # Usage
///
/// ```rust,ignore
/// let generator: &dyn ReportGenerator = get_generator();
/// let text = generator.generate(wizard.state(), &Timestamp::now());
/// ```
pub trait ReportGenerator: Send + Sync {
    /// Render the full report.
    fn generate(&self, state: &WizardState, generated_at: &Timestamp) -> String;
}

/// The report packaged for an export target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPayload {
    /// `problem-solver-<unix-millis>.txt`
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

impl ReportPayload {
    /// Packages `body` with a filename derived from `created_at`.
    pub fn new(body: String, created_at: &Timestamp) -> Self {
        Self {
            filename: report_filename(created_at),
            content_type: REPORT_CONTENT_TYPE,
            body,
        }
    }
}

/// Download filename for a report created at `created_at`.
pub fn report_filename(created_at: &Timestamp) -> String {
    format!("problem-solver-{}.txt", created_at.as_unix_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_uses_unix_millis() {
        let ts = Timestamp::from_unix_millis(1_735_689_600_123);
        assert_eq!(report_filename(&ts), "problem-solver-1735689600123.txt");
    }

    #[test]
    fn payload_is_plain_text() {
        let ts = Timestamp::from_unix_millis(42);
        let payload = ReportPayload::new("body".to_string(), &ts);
        assert_eq!(payload.filename, "problem-solver-42.txt");
        assert_eq!(payload.content_type, "text/plain");
        assert_eq!(payload.body, "body");
    }
}
