use crate::application::dto::AuditSummary;
use crate::library_model::domain::RestoreLogMessage;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Findings of a previous audit together with the fingerprint of its inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedAuditResult {
    pub fingerprint: String,
    pub summary: AuditSummary,
    pub messages: Vec<RestoreLogMessage>,
}

/// NoOpCache port - remembers the last audit so an unchanged restore can be skipped
pub trait NoOpCache {
    /// Loads the previous result, `None` if there is none
    fn load(&self) -> Result<Option<CachedAuditResult>>;

    /// Replaces the stored result
    fn store(&self, result: &CachedAuditResult) -> Result<()>;

    /// Returns the stored result when `fingerprint` matches it
    fn lookup(&self, fingerprint: &str) -> Result<Option<CachedAuditResult>> {
        Ok(self.load()?.filter(|cached| cached.fingerprint == fingerprint))
    }
}
