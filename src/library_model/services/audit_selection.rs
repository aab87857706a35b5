use super::AuditMode;
use crate::library_model::domain::{ResolvedDependencyKey, RestoreTargetGraph};

/// Selects the resolved edges of `graph` whose child package is audited
///
/// `All` keeps every edge to a package. `Direct` and `Unknown` keep only
/// edges leaving the graph's project node, and nothing when the graph has
/// no project node. Project-to-project edges are never returned.
pub fn dependencies_to_audit(
    graph: &RestoreTargetGraph,
    mode: AuditMode,
) -> Box<dyn Iterator<Item = &ResolvedDependencyKey> + '_> {
    let packages = graph
        .resolved_dependencies
        .iter()
        .filter(|edge| edge.child.is_package());

    match mode {
        AuditMode::All => Box::new(packages),
        AuditMode::Direct | AuditMode::Unknown => match &graph.root_project {
            Some(project) => Box::new(packages.filter(move |edge| edge.parent == *project)),
            None => Box::new(std::iter::empty()),
        },
    }
}
