use serde::{Deserialize, Serialize};

/// AuditSummary - counts describing what an audit run reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    /// False when no advisory source had anything to report and the audit was skipped
    pub audit_ran: bool,
    pub fetch_failures: usize,
    pub configuration_errors: usize,
    pub vulnerable_packages: usize,
    pub vulnerability_warnings: usize,
}

impl AuditSummary {
    /// Summary of an audit that was skipped for lack of advisory data
    pub fn skipped() -> Self {
        Self::default()
    }

    pub fn has_vulnerabilities(&self) -> bool {
        self.vulnerability_warnings > 0
    }
}
