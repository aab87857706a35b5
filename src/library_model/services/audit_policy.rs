use crate::library_model::domain::vulnerability::{
    SEVERITY_CRITICAL, SEVERITY_HIGH, SEVERITY_LOW, SEVERITY_MODERATE,
};
use crate::library_model::domain::{LogCode, RestoreLogMessage};
use std::fmt;

/// Which resolved edges of a graph are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditMode {
    /// Not configured; audited like `Direct`
    #[default]
    Unknown,
    Direct,
    All,
}

impl fmt::Display for AuditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditMode::Unknown => write!(f, "unknown"),
            AuditMode::Direct => write!(f, "direct"),
            AuditMode::All => write!(f, "all"),
        }
    }
}

/// Outcome of parsing one audit setting: the value to use, plus the
/// configuration finding to report when the input was not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSetting<T> {
    pub value: T,
    pub finding: Option<RestoreLogMessage>,
}

/// Parses the minimum severity. Unset means low; any other value that is not
/// a known level, blank included, falls back to low with an NU1014 error.
pub fn parse_audit_level(value: Option<&str>, project_path: &str) -> ParsedSetting<i32> {
    let Some(raw) = value.map(str::trim) else {
        return ParsedSetting {
            value: SEVERITY_LOW,
            finding: None,
        };
    };

    let level = match raw.to_ascii_lowercase().as_str() {
        "low" => Some(SEVERITY_LOW),
        "moderate" => Some(SEVERITY_MODERATE),
        "high" => Some(SEVERITY_HIGH),
        "critical" => Some(SEVERITY_CRITICAL),
        _ => None,
    };

    match level {
        Some(value) => ParsedSetting {
            value,
            finding: None,
        },
        None => ParsedSetting {
            value: SEVERITY_LOW,
            finding: Some(RestoreLogMessage::error(
                LogCode::NU1014,
                format!(
                    "Invalid audit level value '{}'. Expected values are: low, moderate, high, critical",
                    raw
                ),
                project_path,
            )),
        },
    }
}

/// Parses the audit mode. Unset means `Unknown`; any other value that is not
/// a known mode, blank included, falls back to `Unknown` with an NU1014 error.
pub fn parse_audit_mode(value: Option<&str>, project_path: &str) -> ParsedSetting<AuditMode> {
    let Some(raw) = value.map(str::trim) else {
        return ParsedSetting {
            value: AuditMode::Unknown,
            finding: None,
        };
    };

    match raw.to_ascii_lowercase().as_str() {
        "direct" => ParsedSetting {
            value: AuditMode::Direct,
            finding: None,
        },
        "all" => ParsedSetting {
            value: AuditMode::All,
            finding: None,
        },
        _ => ParsedSetting {
            value: AuditMode::Unknown,
            finding: Some(RestoreLogMessage::error(
                LogCode::NU1014,
                format!(
                    "Invalid audit mode value '{}'. Expected values are: direct, all",
                    raw
                ),
                project_path,
            )),
        },
    }
}
