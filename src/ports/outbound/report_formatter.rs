use crate::application::dto::AuditReport;
use crate::shared::Result;

/// ReportFormatter port for rendering an audit report (text, JSON, ...)
pub trait ReportFormatter {
    /// Renders `report` into its output form
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &AuditReport) -> Result<String>;
}
