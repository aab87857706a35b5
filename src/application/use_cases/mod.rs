/// Use cases module containing application business logic orchestration
mod aggregate_vulnerability_data;
mod check_package_vulnerabilities;

pub use aggregate_vulnerability_data::AggregateVulnerabilityDataUseCase;
pub use check_package_vulnerabilities::CheckPackageVulnerabilitiesUseCase;
