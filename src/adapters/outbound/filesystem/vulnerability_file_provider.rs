use crate::library_model::domain::{AdvisoryFile, VulnerabilityFetchError, VulnerabilityInfoResult};
use crate::ports::outbound::VulnerabilityInformationProvider;
use crate::shared::error::RestoreError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

/// VulnerabilityFileProvider adapter - one advisory source backed by a JSON file
///
/// The file maps package ids to their advisories:
/// `{ "Pkg": [ { "url": "...", "severity": 3, "versions": "[1.0.0, 2.0.0)" } ] }`.
/// A file that cannot be read or parsed is reported as a failure of this
/// source rather than as an error, so other sources still contribute.
pub struct VulnerabilityFileProvider {
    path: PathBuf,
    source_name: String,
}

impl VulnerabilityFileProvider {
    pub fn new(path: PathBuf) -> Self {
        let source_name = path.display().to_string();
        Self { path, source_name }
    }

    fn failure(&self, reason: impl std::fmt::Display) -> VulnerabilityInfoResult {
        VulnerabilityInfoResult::with_exception(VulnerabilityFetchError::new(format!(
            "Unable to load advisory file '{}': {}",
            self.path.display(),
            reason
        )))
    }
}

/// First line worth showing for a file error, without the multi-line hints
fn short_reason(error: &anyhow::Error) -> String {
    match error.downcast_ref::<RestoreError>() {
        Some(RestoreError::FileReadError { details, .. }) => details.clone(),
        Some(RestoreError::SecurityError { reason, .. }) => reason.clone(),
        _ => error.to_string(),
    }
}

#[async_trait]
impl VulnerabilityInformationProvider for VulnerabilityFileProvider {
    fn source_name(&self) -> &str {
        &self.source_name
    }

    async fn get_vulnerability_information(
        &self,
        token: &CancellationToken,
    ) -> Result<Option<VulnerabilityInfoResult>> {
        if token.is_cancelled() {
            return Err(RestoreError::Cancelled.into());
        }

        let path = self.path.clone();
        let load = tokio::task::spawn_blocking(move || read_checked_file(&path, "advisory file"));

        let content = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(RestoreError::Cancelled.into()),
            joined = load => joined?,
        };

        let content = match content {
            Ok(content) => content,
            Err(e) => return Ok(Some(self.failure(short_reason(&e)))),
        };

        match serde_json::from_str::<AdvisoryFile>(&content) {
            Ok(file) => Ok(Some(VulnerabilityInfoResult::with_vulnerabilities(vec![file]))),
            Err(e) => Ok(Some(self.failure(e))),
        }
    }
}
