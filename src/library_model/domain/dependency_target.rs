use std::ops::BitOr;

/// Kinds of library a dependency declaration is allowed to resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LibraryDependencyTarget(u16);

impl LibraryDependencyTarget {
    pub const NONE: Self = Self(0);
    pub const PACKAGE: Self = Self(1 << 0);
    pub const PROJECT: Self = Self(1 << 1);
    pub const EXTERNAL_PROJECT: Self = Self(1 << 2);
    pub const ASSEMBLY: Self = Self(1 << 3);
    pub const REFERENCE: Self = Self(1 << 4);
    pub const WIN_MD: Self = Self(1 << 5);
    pub const ALL: Self = Self(0b11_1111);
    pub const PACKAGE_PROJECT_EXTERNAL: Self =
        Self(Self::PACKAGE.0 | Self::PROJECT.0 | Self::EXTERNAL_PROJECT.0);

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for LibraryDependencyTarget {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for LibraryDependencyTarget {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(LibraryDependencyTarget::default(), LibraryDependencyTarget::ALL);
    }

    #[test]
    fn test_package_project_external() {
        let target = LibraryDependencyTarget::PACKAGE_PROJECT_EXTERNAL;
        assert!(target.contains(LibraryDependencyTarget::PACKAGE));
        assert!(target.contains(LibraryDependencyTarget::EXTERNAL_PROJECT));
        assert!(!target.contains(LibraryDependencyTarget::WIN_MD));
    }
}
