use crate::library_model::domain::VulnerabilityInfoResult;
use crate::shared::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// VulnerabilityInformationProvider port for one advisory source
///
/// Providers are independent of each other and are queried concurrently.
/// A provider reports recoverable failures through
/// [`VulnerabilityInfoResult::exceptions`]; an `Err` is treated the same way
/// by the aggregator, so one failing source never hides another's data.
///
/// # Async Support
/// Implementations must be `Send + Sync` so they can be fetched from in parallel.
#[async_trait]
pub trait VulnerabilityInformationProvider: Send + Sync {
    /// Short name of the advisory source, used in progress output
    fn source_name(&self) -> &str;

    /// Fetches every known vulnerability of this source
    ///
    /// # Returns
    /// `None` when the source has nothing to contribute
    ///
    /// # Errors
    /// Returns an error if the source could not be queried at all
    async fn get_vulnerability_information(
        &self,
        token: &CancellationToken,
    ) -> Result<Option<VulnerabilityInfoResult>>;
}
