use super::{dependencies_to_audit, AuditMode};
use crate::library_model::domain::vulnerability::{
    SEVERITY_CRITICAL, SEVERITY_HIGH, SEVERITY_LOW, SEVERITY_MODERATE,
};
use crate::library_model::domain::{
    AdvisoryFile, LibraryIdentity, LogCode, PackageVulnerabilityInfo, RestoreLogMessage,
    RestoreTargetGraph,
};
use std::collections::{BTreeSet, HashMap, HashSet};

/// One advisory observed for one package, with the graphs it was seen in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryOccurrence {
    pub advisory: PackageVulnerabilityInfo,
    pub target_graphs: BTreeSet<String>,
}

/// A vulnerable package and its advisories, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditedPackage {
    pub identity: LibraryIdentity,
    pub advisories: Vec<AdvisoryOccurrence>,
}

/// VulnerabilityMatcher - cross-references resolved packages with advisories
///
/// Matches are deduplicated twice: per package across target graphs, and per
/// advisory across advisory files. The result is fully ordered (package id,
/// then advisory URL, then graph name) so repeated runs over the same input
/// produce identical output regardless of provider completion order.
pub struct VulnerabilityMatcher<'a> {
    advisory_files: &'a [AdvisoryFile],
    min_severity: i32,
    mode: AuditMode,
}

impl<'a> VulnerabilityMatcher<'a> {
    pub fn new(advisory_files: &'a [AdvisoryFile], min_severity: i32, mode: AuditMode) -> Self {
        Self {
            advisory_files,
            min_severity,
            mode,
        }
    }

    pub fn find_vulnerable_packages(&self, graphs: &[RestoreTargetGraph]) -> Vec<AuditedPackage> {
        let mut found: HashMap<LibraryIdentity, HashMap<PackageVulnerabilityInfo, BTreeSet<String>>> =
            HashMap::new();

        for graph in graphs {
            for edge in dependencies_to_audit(graph, self.mode) {
                let matches = self.matching_advisories(&edge.child);
                if matches.is_empty() {
                    continue;
                }

                let per_package = found.entry(edge.child.clone()).or_default();
                for advisory in matches {
                    per_package
                        .entry(advisory.clone())
                        .or_default()
                        .insert(graph.name.clone());
                }
            }
        }

        let mut packages: Vec<AuditedPackage> = found
            .into_iter()
            .map(|(identity, advisories)| {
                let mut advisories: Vec<AdvisoryOccurrence> = advisories
                    .into_iter()
                    .map(|(advisory, target_graphs)| AdvisoryOccurrence {
                        advisory,
                        target_graphs,
                    })
                    .collect();
                advisories.sort_by(|a, b| {
                    a.advisory
                        .url
                        .as_str()
                        .cmp(b.advisory.url.as_str())
                        .then(a.advisory.severity.cmp(&b.advisory.severity))
                        .then_with(|| {
                            a.advisory
                                .versions
                                .to_string()
                                .cmp(&b.advisory.versions.to_string())
                        })
                });
                AuditedPackage {
                    identity,
                    advisories,
                }
            })
            .collect();

        packages.sort_by(|a, b| {
            a.identity
                .name
                .cmp(&b.identity.name)
                .then_with(|| a.identity.version.cmp(&b.identity.version))
        });
        packages
    }

    /// Advisories from every file that apply to `package` at or above the
    /// minimum severity, without duplicates
    fn matching_advisories(&self, package: &LibraryIdentity) -> HashSet<&'a PackageVulnerabilityInfo> {
        self.advisory_files
            .iter()
            .filter_map(|file| file.get(&package.name))
            .flatten()
            .filter(|advisory| advisory.versions.satisfies(&package.version))
            .filter(|advisory| advisory.severity >= self.min_severity)
            .collect()
    }
}

/// Human readable severity used in warning messages
pub fn severity_label(severity: i32) -> &'static str {
    match severity {
        SEVERITY_LOW => "low",
        SEVERITY_MODERATE => "moderate",
        SEVERITY_HIGH => "high",
        SEVERITY_CRITICAL => "critical",
        _ => "unknown",
    }
}

/// Diagnostic code for a vulnerability of the given severity
pub fn severity_log_code(severity: i32) -> LogCode {
    match severity {
        SEVERITY_LOW => LogCode::NU1901,
        SEVERITY_MODERATE => LogCode::NU1902,
        SEVERITY_HIGH => LogCode::NU1903,
        SEVERITY_CRITICAL => LogCode::NU1904,
        _ => LogCode::NU1900,
    }
}

/// One warning per (package, advisory), in the order of `packages`
pub fn create_vulnerability_warnings(
    packages: &[AuditedPackage],
    project_path: &str,
) -> Vec<RestoreLogMessage> {
    packages
        .iter()
        .flat_map(|package| {
            package.advisories.iter().map(move |occurrence| {
                let advisory = &occurrence.advisory;
                let message = format!(
                    "Package '{}' {} has a known {} severity vulnerability, {}",
                    package.identity.name,
                    package.identity.version.to_normalized_string(),
                    severity_label(advisory.severity),
                    advisory.url
                );
                RestoreLogMessage::warning(severity_log_code(advisory.severity), message, project_path)
                    .with_library_id(package.identity.name.clone())
                    .with_target_graphs(occurrence.target_graphs.iter().cloned().collect())
            })
        })
        .collect()
}
