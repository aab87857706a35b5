use crate::library_model::domain::RestoreLogMessage;

/// RestoreLogger port - sink for structured findings
///
/// Passed explicitly to the code that produces findings; there is no
/// process-wide logger.
pub trait RestoreLogger: Send + Sync {
    fn log(&self, message: RestoreLogMessage);
}
