//! restore-core - dependency edge model and vulnerability audit for package restore
//!
//! This library holds the part of a package restore engine that runs after
//! graph resolution: the packed dependency edge model with its central
//! version merge, and the audit of resolved target graphs against advisory
//! data from several concurrent sources. It follows a hexagonal architecture.
//!
//! # Architecture
//!
//! - **Library Model** (`library_model`): Domain types and pure services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Errors, file security checks and fingerprinting
//!
//! # Example
//!
//! ```no_run
//! use restore_core::prelude::*;
//! use std::path::{Path, PathBuf};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<()> {
//! let graphs = FileSystemReader::new().read_target_graphs(Path::new("graphs.json"))?;
//!
//! let providers: Vec<Box<dyn VulnerabilityInformationProvider>> = vec![Box::new(
//!     VulnerabilityFileProvider::new(PathBuf::from("advisories.json")),
//! )];
//! let use_case =
//!     CheckPackageVulnerabilitiesUseCase::new(AggregateVulnerabilityDataUseCase::new(providers));
//!
//! let logger = CollectingRestoreLogger::new();
//! let request = AuditRequest::new("src/App/App.csproj").with_audit_level(Some("high".into()));
//! let summary = use_case
//!     .execute(&graphs, &request, &logger, &CancellationToken::new())
//!     .await?;
//!
//! for message in logger.messages() {
//!     println!("{}", message);
//! }
//! # let _ = summary;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod library_model;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleRestoreLogger, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemNoOpCache, FileSystemReader, FileSystemWriter, StdoutPresenter,
        VulnerabilityFileProvider,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::memory::CollectingRestoreLogger;
    pub use crate::application::dto::{AuditReport, AuditRequest, AuditSummary, OutputFormat};
    pub use crate::application::use_cases::{
        AggregateVulnerabilityDataUseCase, CheckPackageVulnerabilitiesUseCase,
    };
    pub use crate::library_model::domain::{
        AdvisoryFile, CentralPackageVersion, CentralPackageVersions, LibraryDependency,
        LibraryDependencyReferenceType, LibraryDependencyTarget, LibraryIdentity,
        LibraryIncludeFlags, LibraryRange, LibraryType, LogCode, LogLevel, PackageVersion,
        PackageVulnerabilityInfo, ResolvedDependencyKey, RestoreLogMessage, RestoreTargetGraph,
        VersionRange, VulnerabilityFetchError, VulnerabilityInfoResult,
    };
    pub use crate::library_model::services::{
        apply_central_version_information, dependencies_to_audit, AuditMode,
    };
    pub use crate::ports::outbound::{
        NoOpCache, OutputPresenter, ProgressReporter, ReportFormatter, RestoreLogger,
        TargetGraphReader, VulnerabilityInformationProvider,
    };
    pub use crate::shared::Result;
}
