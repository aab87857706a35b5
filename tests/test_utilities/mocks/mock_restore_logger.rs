use restore_core::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock RestoreLogger for testing that captures every finding
#[derive(Default, Clone)]
pub struct MockRestoreLogger {
    pub messages: Arc<Mutex<Vec<RestoreLogMessage>>>,
}

impl MockRestoreLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<RestoreLogMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn codes(&self) -> Vec<LogCode> {
        self.messages.lock().unwrap().iter().map(|m| m.code).collect()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl RestoreLogger for MockRestoreLogger {
    fn log(&self, message: RestoreLogMessage) {
        self.messages.lock().unwrap().push(message);
    }
}
