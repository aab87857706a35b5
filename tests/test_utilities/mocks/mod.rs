/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_restore_logger;
mod mock_vulnerability_provider;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_restore_logger::MockRestoreLogger;
pub use mock_vulnerability_provider::MockVulnerabilityProvider;
