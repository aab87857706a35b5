use crate::shared::error::RestoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for version and range strings (security limit)
const MAX_VERSION_LENGTH: usize = 256;

/// PackageVersion value object - a resolved package version
///
/// Accepts one to three numeric components (missing ones are padded with
/// zero) and an optional pre-release label. Build metadata is dropped at
/// parse time, so it never takes part in equality or ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageVersion(semver::Version);

impl PackageVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    pub fn parse(value: &str) -> Result<Self, RestoreError> {
        let invalid = |reason: &str| RestoreError::InvalidVersion {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(invalid("version cannot be empty"));
        }
        if trimmed.len() > MAX_VERSION_LENGTH {
            return Err(invalid("version is too long"));
        }

        let without_metadata = trimmed.split('+').next().unwrap_or(trimmed);
        let (release, pre_release) = match without_metadata.split_once('-') {
            Some((release, pre)) => (release, Some(pre)),
            None => (without_metadata, None),
        };

        let parts: Vec<&str> = release.split('.').collect();
        if parts.len() > 3 {
            return Err(invalid("at most three numeric components are supported"));
        }

        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| invalid("numeric components must be non-negative integers"))?;
        }

        let mut version = semver::Version::new(numbers[0], numbers[1], numbers[2]);
        if let Some(pre) = pre_release {
            version.pre = semver::Prerelease::new(pre).map_err(|e| invalid(&e.to_string()))?;
        }

        Ok(Self(version))
    }

    pub fn is_prerelease(&self) -> bool {
        !self.0.pre.is_empty()
    }

    /// Canonical `major.minor.patch[-pre]` form used in diagnostics
    pub fn to_normalized_string(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PackageVersion {
    type Err = RestoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PackageVersion {
    type Error = RestoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PackageVersion> for String {
    fn from(version: PackageVersion) -> Self {
        version.to_normalized_string()
    }
}

/// VersionRange value object - an interval of acceptable versions
///
/// Written in interval notation: `1.0.0` means `[1.0.0, )`, `[1.0.0]` is an
/// exact match, `(1.0.0, 2.0.0]` and `(, 2.0.0)` are open/closed intervals.
/// An unbounded side is never inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionRange {
    min: Option<PackageVersion>,
    is_min_inclusive: bool,
    max: Option<PackageVersion>,
    is_max_inclusive: bool,
}

impl VersionRange {
    pub fn new(
        min: Option<PackageVersion>,
        is_min_inclusive: bool,
        max: Option<PackageVersion>,
        is_max_inclusive: bool,
    ) -> Self {
        Self {
            is_min_inclusive: is_min_inclusive && min.is_some(),
            is_max_inclusive: is_max_inclusive && max.is_some(),
            min,
            max,
        }
    }

    /// `[version, )`
    pub fn at_least(version: PackageVersion) -> Self {
        Self::new(Some(version), true, None, false)
    }

    /// `[version]`
    pub fn exact(version: PackageVersion) -> Self {
        Self::new(Some(version.clone()), true, Some(version), true)
    }

    pub fn parse(value: &str) -> Result<Self, RestoreError> {
        let invalid = |reason: &str| RestoreError::InvalidVersionRange {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(invalid("range cannot be empty"));
        }
        if trimmed.len() > MAX_VERSION_LENGTH {
            return Err(invalid("range is too long"));
        }

        let is_min_inclusive = match trimmed.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => {
                let version = PackageVersion::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
                return Ok(Self::at_least(version));
            }
        };

        let is_max_inclusive = match trimmed.chars().last() {
            Some(']') => true,
            Some(')') => false,
            _ => return Err(invalid("missing closing bracket")),
        };

        let inner = trimmed[1..trimmed.len() - 1].trim();
        let parse_bound = |bound: &str| -> Result<Option<PackageVersion>, RestoreError> {
            let bound = bound.trim();
            if bound.is_empty() {
                Ok(None)
            } else {
                PackageVersion::parse(bound)
                    .map(Some)
                    .map_err(|e| invalid(&e.to_string()))
            }
        };

        let Some((left, right)) = inner.split_once(',') else {
            if !(is_min_inclusive && is_max_inclusive) {
                return Err(invalid("an exact version must use square brackets"));
            }
            let version = parse_bound(inner)?.ok_or_else(|| invalid("missing version"))?;
            return Ok(Self::exact(version));
        };

        let min = parse_bound(left)?;
        let max = parse_bound(right)?;

        match (&min, &max) {
            (None, None) => return Err(invalid("at least one bound is required")),
            (Some(lo), Some(hi)) if lo > hi => {
                return Err(invalid("lower bound is greater than upper bound"))
            }
            (Some(lo), Some(hi)) if lo == hi && !(is_min_inclusive && is_max_inclusive) => {
                return Err(invalid("range is empty"))
            }
            _ => {}
        }

        Ok(Self::new(min, is_min_inclusive, max, is_max_inclusive))
    }

    pub fn min_version(&self) -> Option<&PackageVersion> {
        self.min.as_ref()
    }

    pub fn max_version(&self) -> Option<&PackageVersion> {
        self.max.as_ref()
    }

    /// True when `version` falls inside this range
    pub fn satisfies(&self, version: &PackageVersion) -> bool {
        let above_min = match &self.min {
            Some(min) if self.is_min_inclusive => version >= min,
            Some(min) => version > min,
            None => true,
        };
        let below_max = match &self.max {
            Some(max) if self.is_max_inclusive => version <= max,
            Some(max) => version < max,
            None => true,
        };
        above_min && below_max
    }

    pub fn to_normalized_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(min), Some(max)) = (&self.min, &self.max) {
            if min == max && self.is_min_inclusive && self.is_max_inclusive {
                return write!(f, "[{}]", min);
            }
        }

        let open = if self.is_min_inclusive { '[' } else { '(' };
        let close = if self.is_max_inclusive { ']' } else { ')' };
        let min = self.min.as_ref().map(ToString::to_string).unwrap_or_default();
        let max = self.max.as_ref().map(ToString::to_string).unwrap_or_default();

        if max.is_empty() {
            write!(f, "{}{}, {}", open, min, close)
        } else {
            write!(f, "{}{}, {}{}", open, min, max, close)
        }
    }
}

impl FromStr for VersionRange {
    type Err = RestoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VersionRange {
    type Error = RestoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VersionRange> for String {
    fn from(range: VersionRange) -> Self {
        range.to_normalized_string()
    }
}
