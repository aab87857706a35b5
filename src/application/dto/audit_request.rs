/// AuditRequest - settings for one audit run
///
/// `audit_level` and `audit_mode` stay free-form strings so unrecognised
/// values can be reported as findings instead of being rejected up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditRequest {
    /// Project file the findings are attributed to
    pub project_path: String,
    pub audit_level: Option<String>,
    pub audit_mode: Option<String>,
}

impl AuditRequest {
    pub fn new(project_path: impl Into<String>) -> Self {
        Self {
            project_path: project_path.into(),
            audit_level: None,
            audit_mode: None,
        }
    }

    pub fn with_audit_level(mut self, audit_level: Option<String>) -> Self {
        self.audit_level = audit_level;
        self
    }

    pub fn with_audit_mode(mut self, audit_mode: Option<String>) -> Self {
        self.audit_mode = audit_mode;
        self
    }
}
