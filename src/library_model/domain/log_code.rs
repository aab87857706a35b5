use crate::shared::error::RestoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Diagnostic codes emitted by restore, in their `NUxxxx` form
///
/// The audit codes (`NU1014`, `NU1900`–`NU1904`) are part of the public
/// contract: build tooling filters and elevates warnings by these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogCode {
    NU1014,
    NU1101,
    NU1102,
    NU1103,
    NU1107,
    NU1603,
    NU1605,
    NU1608,
    NU1701,
    NU1900,
    NU1901,
    NU1902,
    NU1903,
    NU1904,
}

impl LogCode {
    const ALL: [LogCode; 14] = [
        LogCode::NU1014,
        LogCode::NU1101,
        LogCode::NU1102,
        LogCode::NU1103,
        LogCode::NU1107,
        LogCode::NU1603,
        LogCode::NU1605,
        LogCode::NU1608,
        LogCode::NU1701,
        LogCode::NU1900,
        LogCode::NU1901,
        LogCode::NU1902,
        LogCode::NU1903,
        LogCode::NU1904,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogCode::NU1014 => "NU1014",
            LogCode::NU1101 => "NU1101",
            LogCode::NU1102 => "NU1102",
            LogCode::NU1103 => "NU1103",
            LogCode::NU1107 => "NU1107",
            LogCode::NU1603 => "NU1603",
            LogCode::NU1605 => "NU1605",
            LogCode::NU1608 => "NU1608",
            LogCode::NU1701 => "NU1701",
            LogCode::NU1900 => "NU1900",
            LogCode::NU1901 => "NU1901",
            LogCode::NU1902 => "NU1902",
            LogCode::NU1903 => "NU1903",
            LogCode::NU1904 => "NU1904",
        }
    }

    /// True for the codes that report a package with a known vulnerability
    pub fn is_vulnerability_warning(self) -> bool {
        matches!(
            self,
            LogCode::NU1901 | LogCode::NU1902 | LogCode::NU1903 | LogCode::NU1904
        )
    }
}

impl fmt::Display for LogCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogCode {
    type Err = RestoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RestoreError::Validation {
                message: format!("Unknown diagnostic code '{}'", wanted),
            })
    }
}
