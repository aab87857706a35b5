use crate::application::dto::AuditReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter - one line per finding, followed by a summary
///
/// A skipped audit renders as an empty report.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::new();

        for message in &report.messages {
            write!(output, "{}", message)?;
            if let Some(graphs) = message.target_graphs.as_ref().filter(|g| !g.is_empty()) {
                write!(output, " [{}]", graphs.join(", "))?;
            }
            writeln!(output)?;
        }

        let summary = &report.summary;
        if summary.audit_ran {
            writeln!(
                output,
                "Audit summary: {} vulnerable package(s), {} warning(s), {} fetch failure(s), {} configuration error(s){}",
                summary.vulnerable_packages,
                summary.vulnerability_warnings,
                summary.fetch_failures,
                summary.configuration_errors,
                if report.from_cache { " (cached)" } else { "" }
            )?;
        }

        Ok(output)
    }
}
