use super::{
    LibraryDependencyReferenceType, LibraryIncludeFlags, LibraryRange, LogCode, VersionRange,
};
use std::fmt;
use std::hash::{Hash, Hasher};

// Bit layout of the packed flag word. Graphs hold hundreds of thousands of
// edges, so the three booleans and three flag sets share one u32.
//
//   bit  0       generate_path_property
//   bit  1       auto_referenced
//   bit  2       version_centrally_managed
//   bits 3..=12  include_type          (10 bits)
//   bits 13..=22 suppress_parent       (10 bits)
//   bits 23..=28 reference_type        (6 bits)
const GENERATE_PATH_PROPERTY: u32 = 1 << 0;
const AUTO_REFERENCED: u32 = 1 << 1;
const VERSION_CENTRALLY_MANAGED: u32 = 1 << 2;

const INCLUDE_TYPE_SHIFT: u32 = 3;
const SUPPRESS_PARENT_SHIFT: u32 = 13;
const INCLUDE_FLAGS_MASK: u32 = 0b11_1111_1111;

const REFERENCE_TYPE_SHIFT: u32 = 23;
const REFERENCE_TYPE_MASK: u32 = 0b11_1111;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct DependencyFlags(u32);

impl DependencyFlags {
    const INITIAL: Self = Self(
        ((LibraryIncludeFlags::ALL.bits() as u32) << INCLUDE_TYPE_SHIFT)
            | ((LibraryIncludeFlags::DEFAULT_SUPPRESS_PARENT.bits() as u32) << SUPPRESS_PARENT_SHIFT)
            | ((LibraryDependencyReferenceType::DIRECT.bits() as u32) << REFERENCE_TYPE_SHIFT),
    );

    fn get_bit(self, bit: u32) -> bool {
        self.0 & bit != 0
    }

    fn set_bit(&mut self, bit: u32, value: bool) {
        if value {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }

    fn get_field(self, shift: u32, mask: u32) -> u32 {
        (self.0 >> shift) & mask
    }

    fn set_field(&mut self, shift: u32, mask: u32, value: u32) {
        self.0 = (self.0 & !(mask << shift)) | ((value & mask) << shift);
    }
}

/// LibraryDependency entity - one declared dependency edge
///
/// Carries the declared [`LibraryRange`] together with the asset
/// include/suppress sets, the reference kind and per-edge diagnostics
/// suppression. Equality is structural over every field except
/// `version_override`, which is consumed by
/// [`apply_central_version_information`](crate::library_model::services::apply_central_version_information)
/// and has no further meaning once merged.
#[derive(Debug, Clone)]
pub struct LibraryDependency {
    flags: DependencyFlags,
    /// Absent until first written so that edges without suppressions never allocate
    no_warn: Option<Vec<LogCode>>,
    pub library_range: LibraryRange,
    pub aliases: Option<String>,
    /// Wins over any centrally managed version
    pub version_override: Option<VersionRange>,
}

impl LibraryDependency {
    pub fn new(library_range: LibraryRange) -> Self {
        Self {
            flags: DependencyFlags::INITIAL,
            no_warn: None,
            library_range,
            aliases: None,
            version_override: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.library_range.name
    }

    pub fn generate_path_property(&self) -> bool {
        self.flags.get_bit(GENERATE_PATH_PROPERTY)
    }

    pub fn set_generate_path_property(&mut self, value: bool) {
        self.flags.set_bit(GENERATE_PATH_PROPERTY, value);
    }

    /// True if the reference was injected by tooling rather than written by the user
    pub fn auto_referenced(&self) -> bool {
        self.flags.get_bit(AUTO_REFERENCED)
    }

    pub fn set_auto_referenced(&mut self, value: bool) {
        self.flags.set_bit(AUTO_REFERENCED, value);
    }

    /// True if the version is expected to come from the central version table
    pub fn version_centrally_managed(&self) -> bool {
        self.flags.get_bit(VERSION_CENTRALLY_MANAGED)
    }

    pub fn set_version_centrally_managed(&mut self, value: bool) {
        self.flags.set_bit(VERSION_CENTRALLY_MANAGED, value);
    }

    pub fn include_type(&self) -> LibraryIncludeFlags {
        let bits = self.flags.get_field(INCLUDE_TYPE_SHIFT, INCLUDE_FLAGS_MASK);
        LibraryIncludeFlags::from_bits_truncate(bits as u16)
    }

    pub fn set_include_type(&mut self, value: LibraryIncludeFlags) {
        self.flags
            .set_field(INCLUDE_TYPE_SHIFT, INCLUDE_FLAGS_MASK, value.bits() as u32);
    }

    pub fn suppress_parent(&self) -> LibraryIncludeFlags {
        let bits = self.flags.get_field(SUPPRESS_PARENT_SHIFT, INCLUDE_FLAGS_MASK);
        LibraryIncludeFlags::from_bits_truncate(bits as u16)
    }

    pub fn set_suppress_parent(&mut self, value: LibraryIncludeFlags) {
        self.flags
            .set_field(SUPPRESS_PARENT_SHIFT, INCLUDE_FLAGS_MASK, value.bits() as u32);
    }

    pub fn reference_type(&self) -> LibraryDependencyReferenceType {
        let bits = self.flags.get_field(REFERENCE_TYPE_SHIFT, REFERENCE_TYPE_MASK);
        LibraryDependencyReferenceType::from_bits_truncate(bits as u8)
    }

    pub fn set_reference_type(&mut self, value: LibraryDependencyReferenceType) {
        self.flags
            .set_field(REFERENCE_TYPE_SHIFT, REFERENCE_TYPE_MASK, value.bits() as u32);
    }

    /// Suppressed diagnostic codes; empty when never set
    pub fn no_warn(&self) -> &[LogCode] {
        self.no_warn.as_deref().unwrap_or_default()
    }

    /// Mutable access to the suppression list, allocating it on first use
    pub fn no_warn_mut(&mut self) -> &mut Vec<LogCode> {
        self.no_warn.get_or_insert_with(Vec::new)
    }

    pub fn set_no_warn(&mut self, codes: Option<Vec<LogCode>>) {
        self.no_warn = codes;
    }

    /// Number of suppressed codes, without allocating an empty list
    pub fn no_warn_count(&self) -> usize {
        self.no_warn.as_ref().map_or(0, Vec::len)
    }

    #[cfg(test)]
    pub(crate) fn raw_flags(&self) -> u32 {
        self.flags.0
    }
}

impl Default for LibraryDependency {
    fn default() -> Self {
        Self::new(LibraryRange::default())
    }
}

impl PartialEq for LibraryDependency {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.auto_referenced() == other.auto_referenced()
            && self.library_range == other.library_range
            && self.include_type() == other.include_type()
            && self.suppress_parent() == other.suppress_parent()
            && self.no_warn() == other.no_warn()
            && self.generate_path_property() == other.generate_path_property()
            && self.version_centrally_managed() == other.version_centrally_managed()
            && self.aliases == other.aliases
            && self.reference_type() == other.reference_type()
    }
}

impl Eq for LibraryDependency {}

impl Hash for LibraryDependency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.library_range.hash(state);
        self.include_type().hash(state);
        self.suppress_parent().hash(state);
        self.auto_referenced().hash(state);
        self.no_warn().hash(state);
        self.generate_path_property().hash(state);
        self.version_centrally_managed().hash(state);
        self.aliases.hash(state);
        self.reference_type().hash(state);
    }
}

impl fmt::Display for LibraryDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.library_range, self.include_type())
    }
}
