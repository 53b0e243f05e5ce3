//! Version parsing and comparison

use std::fmt;

/// A released product version
///
/// Ordering is component-wise numeric on `(major, minor, patch)`, so
/// `0.63.1 < 0.64.0` even though the strings would compare the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a version from its components
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from `vMAJOR.MINOR.PATCH` or `MAJOR.MINOR.PATCH`
    ///
    /// Returns `None` for anything else, including semver pre-release or
    /// build suffixes; callers treat a missing value as "skip this entry".
    pub fn parse(tag: &str) -> Option<Self> {
        let trimmed = tag.trim();
        let body = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let parsed = semver::Version::parse(body).ok()?;
        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return None;
        }

        Some(Self::new(parsed.major, parsed.minor, parsed.patch))
    }

    /// The version this crate was built as
    pub fn current() -> Self {
        // CARGO_PKG_VERSION is a plain triple for workspace builds.
        Self::parse(env!("CARGO_PKG_VERSION")).unwrap_or(Self::new(0, 0, 0))
    }

    /// Whether this is the reserved local/farm build sentinel (0.0.x)
    ///
    /// Update checks are disabled entirely for such builds.
    pub const fn is_local_build(self) -> bool {
        self.major == 0 && self.minor == 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
