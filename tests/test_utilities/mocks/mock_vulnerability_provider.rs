use anyhow::anyhow;
use async_trait::async_trait;
use restore_core::prelude::*;
use restore_core::shared::error::RestoreError;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

enum Outcome {
    Data(VulnerabilityInfoResult),
    Nothing,
    Fail(String),
}

/// Mock VulnerabilityInformationProvider with a configurable delay
///
/// Completed providers append their name to `completions`, which lets a
/// test observe the order in which providers actually finished.
pub struct MockVulnerabilityProvider {
    name: String,
    delay: Duration,
    outcome: Outcome,
    completions: Arc<Mutex<Vec<String>>>,
}

impl MockVulnerabilityProvider {
    fn with_outcome(name: &str, outcome: Outcome) -> Self {
        Self {
            name: name.to_string(),
            delay: Duration::ZERO,
            outcome,
            completions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn returning(name: &str, files: Vec<AdvisoryFile>) -> Self {
        Self::with_outcome(
            name,
            Outcome::Data(VulnerabilityInfoResult::with_vulnerabilities(files)),
        )
    }

    pub fn returning_result(name: &str, result: VulnerabilityInfoResult) -> Self {
        Self::with_outcome(name, Outcome::Data(result))
    }

    pub fn empty(name: &str) -> Self {
        Self::with_outcome(name, Outcome::Nothing)
    }

    pub fn failing(name: &str, message: &str) -> Self {
        Self::with_outcome(name, Outcome::Fail(message.to_string()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_completions(mut self, completions: Arc<Mutex<Vec<String>>>) -> Self {
        self.completions = completions;
        self
    }
}

#[async_trait]
impl VulnerabilityInformationProvider for MockVulnerabilityProvider {
    fn source_name(&self) -> &str {
        &self.name
    }

    async fn get_vulnerability_information(
        &self,
        token: &CancellationToken,
    ) -> Result<Option<VulnerabilityInfoResult>> {
        tokio::select! {
            biased;
            _ = token.cancelled() => return Err(RestoreError::Cancelled.into()),
            _ = tokio::time::sleep(self.delay) => {}
        }

        self.completions.lock().unwrap().push(self.name.clone());

        match &self.outcome {
            Outcome::Data(result) => Ok(Some(result.clone())),
            Outcome::Nothing => Ok(None),
            Outcome::Fail(message) => Err(anyhow!("{}", message)),
        }
    }
}
