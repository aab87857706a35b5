use crate::library_model::domain::{CentralPackageVersions, LibraryDependency};

/// Fills in centrally managed versions on declared dependencies
///
/// Only edges written by the user without a version are touched:
/// - a `version_override` becomes the version and the edge is left unmarked
/// - otherwise the matching central entry (if any) becomes the version and the
///   edge is marked `version_centrally_managed`, even when no entry matched
///
/// Auto-referenced edges and edges that already declare a version are never
/// modified. An empty table is a no-op.
pub fn apply_central_version_information(
    dependencies: &mut [LibraryDependency],
    central_versions: &CentralPackageVersions,
) {
    if central_versions.is_empty() {
        return;
    }

    for dependency in dependencies
        .iter_mut()
        .filter(|d| !d.auto_referenced() && d.library_range.version_range.is_none())
    {
        if let Some(version_override) = &dependency.version_override {
            dependency.library_range.version_range = Some(version_override.clone());
            continue;
        }

        if let Some(central) = central_versions.get(dependency.name()) {
            dependency.library_range.version_range = Some(central.version_range.clone());
        }

        // Marked even without a match so later diagnostics can report the missing entry
        dependency.set_version_centrally_managed(true);
    }
}
