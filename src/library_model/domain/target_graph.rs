use super::LibraryIdentity;
use serde::{Deserialize, Serialize};

/// A concrete parent to child link of a resolved graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedDependencyKey {
    pub parent: LibraryIdentity,
    pub child: LibraryIdentity,
}

impl ResolvedDependencyKey {
    pub fn new(parent: LibraryIdentity, child: LibraryIdentity) -> Self {
        Self { parent, child }
    }
}

/// RestoreTargetGraph - the resolved graph of one project for one target
/// framework (and optional runtime identifier)
///
/// Produced by the resolver and consumed read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreTargetGraph {
    pub name: String,
    #[serde(rename = "project", default)]
    pub root_project: Option<LibraryIdentity>,
    #[serde(rename = "dependencies", default)]
    pub resolved_dependencies: Vec<ResolvedDependencyKey>,
}

impl RestoreTargetGraph {
    pub fn new(
        name: impl Into<String>,
        root_project: Option<LibraryIdentity>,
        resolved_dependencies: Vec<ResolvedDependencyKey>,
    ) -> Self {
        Self {
            name: name.into(),
            root_project,
            resolved_dependencies,
        }
    }
}
