//! Semantic version of the project.

use std::fmt;

use serde::Serialize;

/// Version of this project.
///
/// Must match `version` in the workspace `Cargo.toml`; a unit test enforces it.
pub const PROJECT_VERSION: VersionInfo = VersionInfo::new(1, 2, 3).with_prerelease("rc1");

/// A `major.minor.patch[-prerelease]` version triple.
///
/// An empty `prerelease` means "no prerelease".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: &'static str,
}

impl VersionInfo {
    /// Release version without a prerelease label.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: "",
        }
    }

    /// Same version tagged with `prerelease` (pass `""` to clear it).
    pub const fn with_prerelease(self, prerelease: &'static str) -> Self {
        Self { prerelease, ..self }
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Render as `major.minor.patch`, plus `-prerelease` when one is set.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_prerelease() {
            write!(f, "-{}", self.prerelease)?;
        }
        Ok(())
    }
}

/// The project version as a string, e.g. `1.2.3-rc1`.
pub fn project_version() -> String {
    PROJECT_VERSION.format()
}
