use crate::library_model::domain::RestoreLogMessage;
use crate::ports::outbound::RestoreLogger;
use std::sync::{Mutex, PoisonError};

/// CollectingRestoreLogger adapter - keeps findings in memory, in the order logged
///
/// Used to build the report, to fill the no-op cache and in tests.
#[derive(Debug, Default)]
pub struct CollectingRestoreLogger {
    messages: Mutex<Vec<RestoreLogMessage>>,
}

impl CollectingRestoreLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<RestoreLogMessage> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn into_messages(self) -> Vec<RestoreLogMessage> {
        self.messages
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl RestoreLogger for CollectingRestoreLogger {
    fn log(&self, message: RestoreLogMessage) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}

/// Forwards every finding to two loggers
pub struct TeeRestoreLogger<'a> {
    first: &'a dyn RestoreLogger,
    second: &'a dyn RestoreLogger,
}

impl<'a> TeeRestoreLogger<'a> {
    pub fn new(first: &'a dyn RestoreLogger, second: &'a dyn RestoreLogger) -> Self {
        Self { first, second }
    }
}

impl RestoreLogger for TeeRestoreLogger<'_> {
    fn log(&self, message: RestoreLogMessage) {
        self.first.log(message.clone());
        self.second.log(message);
    }
}
