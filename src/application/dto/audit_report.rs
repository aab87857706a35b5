use super::AuditSummary;
use crate::library_model::domain::RestoreLogMessage;
use serde::Serialize;

/// AuditReport - everything the output formatters render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub project_path: String,
    /// True when the findings were replayed from the no-op cache
    pub from_cache: bool,
    pub summary: AuditSummary,
    pub messages: Vec<RestoreLogMessage>,
}

impl AuditReport {
    pub fn new(
        project_path: impl Into<String>,
        from_cache: bool,
        summary: AuditSummary,
        messages: Vec<RestoreLogMessage>,
    ) -> Self {
        Self {
            project_path: project_path.into(),
            from_cache,
            summary,
            messages,
        }
    }

    /// True if any finding reports a vulnerable package
    pub fn has_vulnerabilities(&self) -> bool {
        self.messages.iter().any(|m| m.is_vulnerability())
    }
}
