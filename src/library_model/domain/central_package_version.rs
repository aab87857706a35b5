use super::VersionRange;
use std::collections::HashMap;

/// CentralPackageVersion - a version declared once for the whole project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CentralPackageVersion {
    pub name: String,
    pub version_range: VersionRange,
}

impl CentralPackageVersion {
    pub fn new(name: impl Into<String>, version_range: VersionRange) -> Self {
        Self {
            name: name.into(),
            version_range,
        }
    }
}

/// Name-keyed table of central package versions
///
/// Lookups ignore ASCII case. A later entry for the same name replaces the
/// earlier one.
#[derive(Debug, Clone, Default)]
pub struct CentralPackageVersions {
    entries: HashMap<String, CentralPackageVersion>,
}

impl CentralPackageVersions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, version: CentralPackageVersion) {
        self.entries
            .insert(version.name.to_ascii_lowercase(), version);
    }

    pub fn get(&self, name: &str) -> Option<&CentralPackageVersion> {
        self.entries.get(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CentralPackageVersion> for CentralPackageVersions {
    fn from_iter<I: IntoIterator<Item = CentralPackageVersion>>(iter: I) -> Self {
        let mut table = Self::new();
        for version in iter {
            table.insert(version);
        }
        table
    }
}
