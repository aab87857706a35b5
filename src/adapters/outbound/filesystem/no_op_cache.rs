use super::file_writer::validate_output_path;
use crate::ports::outbound::{CachedAuditResult, NoOpCache};
use crate::shared::error::RestoreError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// FileSystemNoOpCache adapter - keeps the last audit result in a JSON file
///
/// A cache file that no longer parses is treated as empty, so a stale or
/// truncated cache only costs a full audit.
pub struct FileSystemNoOpCache {
    path: PathBuf,
}

impl FileSystemNoOpCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl NoOpCache for FileSystemNoOpCache {
    fn load(&self) -> Result<Option<CachedAuditResult>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = read_checked_file(&self.path, "no-op cache file")?;
        Ok(serde_json::from_str(&content).ok())
    }

    fn store(&self, result: &CachedAuditResult) -> Result<()> {
        validate_output_path(&self.path)?;

        let json = serde_json::to_string_pretty(result)?;
        fs::write(&self.path, json).map_err(|e| RestoreError::FileWriteError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
