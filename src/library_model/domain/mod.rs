pub mod central_package_version;
pub mod dependency_target;
pub mod include_flags;
pub mod library_dependency;
pub mod library_identity;
pub mod library_range;
pub mod log_code;
pub mod reference_type;
pub mod restore_log_message;
pub mod target_graph;
pub mod version;
pub mod vulnerability;

pub use central_package_version::{CentralPackageVersion, CentralPackageVersions};
pub use dependency_target::LibraryDependencyTarget;
pub use include_flags::LibraryIncludeFlags;
pub use library_dependency::LibraryDependency;
pub use library_identity::{LibraryIdentity, LibraryType};
pub use library_range::LibraryRange;
pub use log_code::LogCode;
pub use reference_type::LibraryDependencyReferenceType;
pub use restore_log_message::{LogLevel, RestoreLogMessage};
pub use target_graph::{ResolvedDependencyKey, RestoreTargetGraph};
pub use version::{PackageVersion, VersionRange};
pub use vulnerability::{
    AdvisoryFile, PackageVulnerabilityInfo, VulnerabilityFetchError, VulnerabilityInfoResult,
};
