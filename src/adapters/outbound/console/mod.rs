/// Console adapters writing to stderr
mod progress_reporter;
mod restore_logger;

pub use progress_reporter::StderrProgressReporter;
pub use restore_logger::ConsoleRestoreLogger;
