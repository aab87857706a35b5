/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the restore core uses to reach
/// advisory sources, the file system and the console.
pub mod no_op_cache;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod restore_logger;
pub mod target_graph_reader;
pub mod vulnerability_information_provider;

pub use no_op_cache::{CachedAuditResult, NoOpCache};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use restore_logger::RestoreLogger;
pub use target_graph_reader::{parse_target_graphs, TargetGraphReader};
pub use vulnerability_information_provider::VulnerabilityInformationProvider;
