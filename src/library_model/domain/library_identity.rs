use super::PackageVersion;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Kind of library a resolved node refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LibraryType {
    #[default]
    Package,
    Project,
    ExternalProject,
    Unresolved,
    Reference,
    Assembly,
}

impl fmt::Display for LibraryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LibraryType::Package => "package",
            LibraryType::Project => "project",
            LibraryType::ExternalProject => "externalProject",
            LibraryType::Unresolved => "unresolved",
            LibraryType::Reference => "reference",
            LibraryType::Assembly => "assembly",
        };
        f.write_str(name)
    }
}

/// LibraryIdentity value object - a resolved node of a target graph
///
/// Identities are equal when their names match ignoring ASCII case and their
/// versions are equal. The library type does not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryIdentity {
    pub name: String,
    pub version: PackageVersion,
    #[serde(rename = "type", default)]
    pub library_type: LibraryType,
}

impl LibraryIdentity {
    pub fn new(name: impl Into<String>, version: PackageVersion, library_type: LibraryType) -> Self {
        Self {
            name: name.into(),
            version,
            library_type,
        }
    }

    pub fn package(name: impl Into<String>, version: PackageVersion) -> Self {
        Self::new(name, version, LibraryType::Package)
    }

    pub fn project(name: impl Into<String>, version: PackageVersion) -> Self {
        Self::new(name, version, LibraryType::Project)
    }

    pub fn is_package(&self) -> bool {
        self.library_type == LibraryType::Package
    }
}

impl PartialEq for LibraryIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name) && self.version == other.version
    }
}

impl Eq for LibraryIdentity {}

impl Hash for LibraryIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.name.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_usize(self.name.len());
        self.version.hash(state);
    }
}

impl fmt::Display for LibraryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}
