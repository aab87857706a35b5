use crate::shared::error::RestoreError;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

/// Asset groups a dependency contributes to its consumer.
///
/// Seven bits are defined; the edge model reserves ten bits of storage for
/// each flag set so new asset groups can be added without changing its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LibraryIncludeFlags(u16);

impl LibraryIncludeFlags {
    pub const NONE: Self = Self(0);
    pub const RUNTIME: Self = Self(1 << 0);
    pub const COMPILE: Self = Self(1 << 1);
    pub const BUILD: Self = Self(1 << 2);
    pub const NATIVE: Self = Self(1 << 3);
    pub const CONTENT_FILES: Self = Self(1 << 4);
    pub const ANALYZERS: Self = Self(1 << 5);
    pub const BUILD_TRANSITIVE: Self = Self(1 << 6);
    pub const ALL: Self = Self(0b111_1111);

    /// Flags withheld from transitive consumers unless a reference says otherwise
    pub const DEFAULT_SUPPRESS_PARENT: Self =
        Self(Self::BUILD.0 | Self::CONTENT_FILES.0 | Self::ANALYZERS.0);

    const NAMED: [(Self, &'static str); 7] = [
        (Self::RUNTIME, "Runtime"),
        (Self::COMPILE, "Compile"),
        (Self::BUILD, "Build"),
        (Self::NATIVE, "Native"),
        (Self::CONTENT_FILES, "ContentFiles"),
        (Self::ANALYZERS, "Analyzers"),
        (Self::BUILD_TRANSITIVE, "BuildTransitive"),
    ];

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Builds a flag set from raw bits, keeping only defined flags
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LibraryIncludeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LibraryIncludeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LibraryIncludeFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for LibraryIncludeFlags {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}

/// Renders `None`, `All`, or the set flag names in bit order, comma separated.
impl fmt::Display for LibraryIncludeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        if *self == Self::ALL {
            return write!(f, "All");
        }

        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Parses a `;` or `,` separated list of flag names, case-insensitively.
/// An empty string parses to `None`.
impl FromStr for LibraryIncludeFlags {
    type Err = RestoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::NONE;

        for part in s.split([';', ',']).map(str::trim).filter(|p| !p.is_empty()) {
            flags |= match part.to_ascii_lowercase().as_str() {
                "all" => Self::ALL,
                "none" => Self::NONE,
                "runtime" => Self::RUNTIME,
                "compile" => Self::COMPILE,
                "build" => Self::BUILD,
                "native" => Self::NATIVE,
                "contentfiles" => Self::CONTENT_FILES,
                "analyzers" => Self::ANALYZERS,
                "buildtransitive" => Self::BUILD_TRANSITIVE,
                _ => {
                    return Err(RestoreError::InvalidIncludeFlags {
                        value: part.to_string(),
                    })
                }
            };
        }

        Ok(flags)
    }
}
