use crate::library_model::domain::{LogLevel, RestoreLogMessage};
use crate::ports::outbound::RestoreLogger;
use owo_colors::OwoColorize;

/// ConsoleRestoreLogger adapter - prints each finding to stderr as it arrives
pub struct ConsoleRestoreLogger {
    colored: bool,
}

impl ConsoleRestoreLogger {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn render(&self, message: &RestoreLogMessage) -> String {
        let level = match (self.colored, message.level) {
            (false, level) => level.to_string(),
            (true, LogLevel::Error) => message.level.to_string().red().bold().to_string(),
            (true, LogLevel::Warning) => message.level.to_string().yellow().bold().to_string(),
        };
        format!(
            "{}: {} {}: {}",
            message.project_path, level, message.code, message.message
        )
    }
}

impl RestoreLogger for ConsoleRestoreLogger {
    fn log(&self, message: RestoreLogMessage) {
        eprintln!("{}", self.render(&message));
    }
}
