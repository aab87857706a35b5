use super::AggregateVulnerabilityDataUseCase;
use crate::application::dto::{AuditRequest, AuditSummary};
use crate::library_model::domain::{
    LogCode, RestoreLogMessage, RestoreTargetGraph, VulnerabilityInfoResult,
};
use crate::library_model::services::{
    create_vulnerability_warnings, parse_audit_level, parse_audit_mode, VulnerabilityMatcher,
};
use crate::ports::outbound::{ProgressReporter, RestoreLogger};
use crate::shared::Result;
use tokio_util::sync::CancellationToken;

/// CheckPackageVulnerabilitiesUseCase - audits resolved graphs against the
/// configured advisory sources
///
/// The run is linear:
/// 1. fetch advisory data from every provider; stop silently if there is none
/// 2. report every provider failure (NU1900)
/// 3. resolve audit level and mode, reporting invalid values (NU1014)
/// 4. match, filter, group and emit one warning per package and advisory
///
/// Configuration and provider problems are reported through the logger.
/// Only cancellation is returned as an error.
pub struct CheckPackageVulnerabilitiesUseCase {
    aggregator: AggregateVulnerabilityDataUseCase,
}

impl CheckPackageVulnerabilitiesUseCase {
    pub fn new(aggregator: AggregateVulnerabilityDataUseCase) -> Self {
        Self { aggregator }
    }

    /// Executes the audit over `graphs`
    ///
    /// # Arguments
    /// * `graphs` - Resolved target graphs of one project
    /// * `request` - Audit settings and the project path findings are attributed to
    /// * `logger` - Sink receiving every finding, in emission order
    /// * `token` - Cancellation for the advisory fetch
    ///
    /// # Errors
    /// Returns [`RestoreError::Cancelled`](crate::shared::error::RestoreError::Cancelled)
    /// if the run was cancelled
    pub async fn execute(
        &self,
        graphs: &[RestoreTargetGraph],
        request: &AuditRequest,
        logger: &dyn RestoreLogger,
        token: &CancellationToken,
    ) -> Result<AuditSummary> {
        let fetched = self.aggregator.execute(token).await?;
        Ok(Self::audit(fetched, graphs, request, logger))
    }

    /// Same as [`execute`](Self::execute), reporting advisory fetch progress
    pub async fn execute_with_progress(
        &self,
        graphs: &[RestoreTargetGraph],
        request: &AuditRequest,
        logger: &dyn RestoreLogger,
        progress: &dyn ProgressReporter,
        token: &CancellationToken,
    ) -> Result<AuditSummary> {
        let fetched = self.aggregator.execute_with_progress(token, progress).await?;
        Ok(Self::audit(fetched, graphs, request, logger))
    }

    fn audit(
        fetched: Option<VulnerabilityInfoResult>,
        graphs: &[RestoreTargetGraph],
        request: &AuditRequest,
        logger: &dyn RestoreLogger,
    ) -> AuditSummary {
        let Some(vulnerability_data) = fetched else {
            return AuditSummary::skipped();
        };

        let mut summary = AuditSummary {
            audit_ran: true,
            ..AuditSummary::default()
        };
        let project_path = request.project_path.as_str();

        for failure in vulnerability_data.failures() {
            logger.log(RestoreLogMessage::error(
                LogCode::NU1900,
                format!(
                    "Error occurred while getting package vulnerability data: {}",
                    failure.message
                ),
                project_path,
            ));
            summary.fetch_failures += 1;
        }

        let level = parse_audit_level(request.audit_level.as_deref(), project_path);
        let mode = parse_audit_mode(request.audit_mode.as_deref(), project_path);
        for finding in [level.finding, mode.finding].into_iter().flatten() {
            logger.log(finding);
            summary.configuration_errors += 1;
        }

        let matcher =
            VulnerabilityMatcher::new(vulnerability_data.advisory_files(), level.value, mode.value);
        let packages = matcher.find_vulnerable_packages(graphs);
        summary.vulnerable_packages = packages.len();

        for warning in create_vulnerability_warnings(&packages, project_path) {
            logger.log(warning);
            summary.vulnerability_warnings += 1;
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library_model::domain::{
        AdvisoryFile, LibraryIdentity, PackageVersion, PackageVulnerabilityInfo,
        ResolvedDependencyKey, VersionRange,
    };
    use crate::ports::outbound::VulnerabilityInformationProvider;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use url::Url;

    #[derive(Default)]
    struct VecLogger(Mutex<Vec<RestoreLogMessage>>);

    impl RestoreLogger for VecLogger {
        fn log(&self, message: RestoreLogMessage) {
            self.0.lock().unwrap().push(message);
        }
    }

    struct FileProvider(Option<AdvisoryFile>);

    #[async_trait]
    impl VulnerabilityInformationProvider for FileProvider {
        fn source_name(&self) -> &str {
            "test"
        }

        async fn get_vulnerability_information(
            &self,
            _token: &CancellationToken,
        ) -> Result<Option<VulnerabilityInfoResult>> {
            Ok(self
                .0
                .clone()
                .map(|file| VulnerabilityInfoResult::with_vulnerabilities(vec![file])))
        }
    }

    fn graphs() -> Vec<RestoreTargetGraph> {
        let project = LibraryIdentity::project("App", PackageVersion::new(1, 0, 0));
        vec![RestoreTargetGraph::new(
            "net8.0",
            Some(project.clone()),
            vec![ResolvedDependencyKey::new(
                project,
                LibraryIdentity::package("Pkg", PackageVersion::new(1, 0, 0)),
            )],
        )]
    }

    fn use_case(file: Option<AdvisoryFile>) -> CheckPackageVulnerabilitiesUseCase {
        CheckPackageVulnerabilitiesUseCase::new(AggregateVulnerabilityDataUseCase::new(vec![
            Box::new(FileProvider(file)),
        ]))
    }

    fn high_severity_file() -> AdvisoryFile {
        let mut file = AdvisoryFile::new();
        file.insert(
            "Pkg".to_string(),
            vec![PackageVulnerabilityInfo::new(
                Url::parse("https://a/1").unwrap(),
                3,
                VersionRange::parse("[1.0.0]").unwrap(),
            )],
        );
        file
    }

    #[tokio::test]
    async fn test_no_data_is_silent() {
        let logger = VecLogger::default();
        let summary = use_case(None)
            .execute(
                &graphs(),
                &AuditRequest::new("app.csproj").with_audit_level(Some("bogus".to_string())),
                &logger,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(!summary.audit_ran);
        assert!(logger.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reports_vulnerability_with_defaults() {
        let logger = VecLogger::default();
        let summary = use_case(Some(high_severity_file()))
            .execute(
                &graphs(),
                &AuditRequest::new("app.csproj"),
                &logger,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(summary.audit_ran);
        assert_eq!(summary.vulnerability_warnings, 1);
        assert_eq!(summary.vulnerable_packages, 1);

        let messages = logger.0.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].code, LogCode::NU1903);
        assert_eq!(messages[0].project_path, "app.csproj");
    }

    #[tokio::test]
    async fn test_invalid_settings_are_reported_and_audit_continues() {
        let logger = VecLogger::default();
        let request = AuditRequest::new("app.csproj")
            .with_audit_level(Some("extreme".to_string()))
            .with_audit_mode(Some("sideways".to_string()));

        let summary = use_case(Some(high_severity_file()))
            .execute(&graphs(), &request, &logger, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(summary.configuration_errors, 2);
        assert_eq!(summary.vulnerability_warnings, 1);

        let codes: Vec<LogCode> = logger.0.lock().unwrap().iter().map(|m| m.code).collect();
        assert_eq!(codes, vec![LogCode::NU1014, LogCode::NU1014, LogCode::NU1903]);
    }
}
