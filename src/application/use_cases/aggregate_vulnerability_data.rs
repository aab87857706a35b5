use crate::library_model::domain::{VulnerabilityFetchError, VulnerabilityInfoResult};
use crate::ports::outbound::{ProgressReporter, VulnerabilityInformationProvider};
use crate::shared::error::RestoreError;
use crate::shared::Result;
use futures::future::join_all;
use std::cell::Cell;
use tokio_util::sync::CancellationToken;

/// AggregateVulnerabilityDataUseCase - queries every advisory source at once
/// and merges what they return
///
/// Advisory files are kept in provider order and are not deduplicated here.
/// Failures of individual providers are collected next to the data of the
/// others.
pub struct AggregateVulnerabilityDataUseCase {
    providers: Vec<Box<dyn VulnerabilityInformationProvider>>,
}

impl AggregateVulnerabilityDataUseCase {
    pub fn new(providers: Vec<Box<dyn VulnerabilityInformationProvider>>) -> Self {
        Self { providers }
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Fetches from all providers concurrently and merges the results
    ///
    /// # Returns
    /// `None` if no provider returned vulnerability data or a failure
    ///
    /// # Errors
    /// Returns [`RestoreError::Cancelled`] if `token` was cancelled by the
    /// time all fetches finished, even if they all produced data
    pub async fn execute(&self, token: &CancellationToken) -> Result<Option<VulnerabilityInfoResult>> {
        let fetches = self
            .providers
            .iter()
            .map(|provider| provider.get_vulnerability_information(token));
        let results = join_all(fetches).await;

        Self::merge(results, token)
    }

    /// Same as [`execute`](Self::execute), reporting each provider to
    /// `progress` as its fetch completes
    pub async fn execute_with_progress(
        &self,
        token: &CancellationToken,
        progress: &dyn ProgressReporter,
    ) -> Result<Option<VulnerabilityInfoResult>> {
        let total = self.providers.len();
        // join_all polls every fetch on the current task
        let completed = Cell::new(0usize);
        let fetches = self.providers.iter().map(|provider| {
            let completed = &completed;
            async move {
                let result = provider.get_vulnerability_information(token).await;
                completed.set(completed.get() + 1);
                progress.report_progress(completed.get(), total, Some(provider.source_name()));
                result
            }
        });
        let results = join_all(fetches).await;

        Self::merge(results, token)
    }

    fn merge(
        results: Vec<Result<Option<VulnerabilityInfoResult>>>,
        token: &CancellationToken,
    ) -> Result<Option<VulnerabilityInfoResult>> {
        if token.is_cancelled() {
            return Err(RestoreError::Cancelled.into());
        }

        let mut known_vulnerabilities = None;
        let mut exceptions = None;

        for result in results {
            match result {
                Ok(Some(result)) => {
                    if let Some(files) = result.known_vulnerabilities {
                        known_vulnerabilities
                            .get_or_insert_with(Vec::new)
                            .extend(files);
                    }
                    if let Some(errors) = result.exceptions {
                        exceptions.get_or_insert_with(Vec::new).extend(errors);
                    }
                }
                Ok(None) => {}
                Err(e) => exceptions
                    .get_or_insert_with(Vec::new)
                    .push(VulnerabilityFetchError::new(format!("{:#}", e))),
            }
        }

        if known_vulnerabilities.is_none() && exceptions.is_none() {
            return Ok(None);
        }

        Ok(Some(VulnerabilityInfoResult {
            known_vulnerabilities,
            exceptions,
        }))
    }
}
