use super::{LibraryDependencyTarget, VersionRange};
use std::fmt;
use std::hash::{Hash, Hasher};

/// LibraryRange - the declared side of a dependency: name, allowed versions
/// and the kinds of library it may resolve to
///
/// Names compare case-insensitively. The version range is absent when the
/// version is expected to come from central package management.
#[derive(Debug, Clone, Default)]
pub struct LibraryRange {
    pub name: String,
    pub version_range: Option<VersionRange>,
    pub type_constraint: LibraryDependencyTarget,
}

impl LibraryRange {
    pub fn new(
        name: impl Into<String>,
        version_range: Option<VersionRange>,
        type_constraint: LibraryDependencyTarget,
    ) -> Self {
        Self {
            name: name.into(),
            version_range,
            type_constraint,
        }
    }

    /// A package-or-project range with no version, awaiting central management
    pub fn unversioned(name: impl Into<String>) -> Self {
        Self::new(name, None, LibraryDependencyTarget::default())
    }
}

impl PartialEq for LibraryRange {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
            && self.version_range == other.version_range
            && self.type_constraint == other.type_constraint
    }
}

impl Eq for LibraryRange {}

impl Hash for LibraryRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.name.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_usize(self.name.len());
        self.version_range.hash(state);
        self.type_constraint.hash(state);
    }
}

impl fmt::Display for LibraryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version_range {
            Some(range) => write!(f, "{} {}", self.name, range),
            None => write!(f, "{}", self.name),
        }
    }
}
