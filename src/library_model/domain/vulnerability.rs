use super::VersionRange;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use url::Url;

/// Severity values used by advisory sources
pub const SEVERITY_UNKNOWN: i32 = 0;
pub const SEVERITY_LOW: i32 = 1;
pub const SEVERITY_MODERATE: i32 = 2;
pub const SEVERITY_HIGH: i32 = 3;
pub const SEVERITY_CRITICAL: i32 = 4;

/// One advisory for one package
///
/// `versions` is the range of affected versions. Two advisories are the same
/// advisory when URL, severity and affected range all match, which is how
/// duplicates coming from several advisory sources collapse into one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageVulnerabilityInfo {
    pub url: Url,
    pub severity: i32,
    pub versions: VersionRange,
}

impl PackageVulnerabilityInfo {
    pub fn new(url: Url, severity: i32, versions: VersionRange) -> Self {
        Self {
            url,
            severity,
            versions,
        }
    }
}

/// Known vulnerabilities of one advisory source, keyed by package id
pub type AdvisoryFile = HashMap<String, Vec<PackageVulnerabilityInfo>>;

/// A provider failure, kept as data so sibling providers are unaffected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityFetchError {
    pub message: String,
}

impl VulnerabilityFetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for VulnerabilityFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of one provider call, or of merging several of them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VulnerabilityInfoResult {
    pub known_vulnerabilities: Option<Vec<AdvisoryFile>>,
    pub exceptions: Option<Vec<VulnerabilityFetchError>>,
}

impl VulnerabilityInfoResult {
    pub fn with_vulnerabilities(files: Vec<AdvisoryFile>) -> Self {
        Self {
            known_vulnerabilities: Some(files),
            exceptions: None,
        }
    }

    pub fn with_exception(error: VulnerabilityFetchError) -> Self {
        Self {
            known_vulnerabilities: None,
            exceptions: Some(vec![error]),
        }
    }

    pub fn advisory_files(&self) -> &[AdvisoryFile] {
        self.known_vulnerabilities.as_deref().unwrap_or_default()
    }

    pub fn failures(&self) -> &[VulnerabilityFetchError] {
        self.exceptions.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library_model::domain::PackageVersion;
    use std::collections::HashSet;

    fn advisory(url: &str, severity: i32) -> PackageVulnerabilityInfo {
        PackageVulnerabilityInfo::new(
            Url::parse(url).unwrap(),
            severity,
            VersionRange::at_least(PackageVersion::new(1, 0, 0)),
        )
    }

    #[test]
    fn test_duplicates_across_sources_collapse() {
        let set: HashSet<_> = [
            advisory("https://a/1", SEVERITY_HIGH),
            advisory("https://a/1", SEVERITY_HIGH),
            advisory("https://a/2", SEVERITY_HIGH),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_advisory_file_json() {
        let json = r#"{
            "Pkg": [
                { "url": "https://a/1", "severity": 3, "versions": "[1.0.0, 2.0.0)" }
            ]
        }"#;
        let file: AdvisoryFile = serde_json::from_str(json).unwrap();
        let entry = &file["Pkg"][0];
        assert_eq!(entry.url.as_str(), "https://a/1");
        assert_eq!(entry.severity, SEVERITY_HIGH);
        assert!(entry.versions.satisfies(&PackageVersion::new(1, 5, 0)));
    }

    #[test]
    fn test_empty_result_accessors() {
        let result = VulnerabilityInfoResult::default();
        assert!(result.advisory_files().is_empty());
        assert!(result.failures().is_empty());

        let failed = VulnerabilityInfoResult::with_exception(VulnerabilityFetchError::new("boom"));
        assert_eq!(failed.failures()[0].to_string(), "boom");
    }
}
