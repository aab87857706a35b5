/// Whether a dependency edge was declared directly or discovered transitively.
///
/// Stored as bits rather than a closed enum so that an edge seen both ways
/// (`DIRECT | TRANSITIVE`) stays representable. The edge model reserves six
/// bits for this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LibraryDependencyReferenceType(u8);

impl LibraryDependencyReferenceType {
    pub const NONE: Self = Self(0);
    pub const TRANSITIVE: Self = Self(1);
    pub const DIRECT: Self = Self(2);

    const MASK: u8 = 0b11_1111;

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a reference type from raw bits, keeping the six storable bits
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for LibraryDependencyReferenceType {
    fn default() -> Self {
        Self::DIRECT
    }
}

impl std::ops::BitOr for LibraryDependencyReferenceType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::fmt::Display for LibraryDependencyReferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::NONE => write!(f, "None"),
            Self::TRANSITIVE => write!(f, "Transitive"),
            Self::DIRECT => write!(f, "Direct"),
            other => write!(f, "{:#08b}", other.0),
        }
    }
}
