use super::LogCode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warning => write!(f, "warning"),
        }
    }
}

/// RestoreLogMessage - one structured finding handed to a logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreLogMessage {
    pub code: LogCode,
    pub level: LogLevel,
    pub message: String,
    pub project_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_graphs: Option<Vec<String>>,
}

impl RestoreLogMessage {
    pub fn error(code: LogCode, message: impl Into<String>, project_path: impl Into<String>) -> Self {
        Self {
            code,
            level: LogLevel::Error,
            message: message.into(),
            project_path: project_path.into(),
            library_id: None,
            target_graphs: None,
        }
    }

    pub fn warning(code: LogCode, message: impl Into<String>, project_path: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Warning,
            ..Self::error(code, message, project_path)
        }
    }

    pub fn with_library_id(mut self, library_id: impl Into<String>) -> Self {
        self.library_id = Some(library_id.into());
        self
    }

    pub fn with_target_graphs(mut self, target_graphs: Vec<String>) -> Self {
        self.target_graphs = Some(target_graphs);
        self
    }

    /// True for findings that report a vulnerable package
    pub fn is_vulnerability(&self) -> bool {
        self.library_id.is_some()
            && (self.code.is_vulnerability_warning() || self.code == LogCode::NU1900)
    }
}

impl fmt::Display for RestoreLogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}: {}", self.project_path, self.level, self.code, self.message)
    }
}
