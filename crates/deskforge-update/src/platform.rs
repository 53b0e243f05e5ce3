//! Build and environment metadata consumed during asset selection

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::version::Version;

/// Processor architecture the product ships installers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Architecture {
    X64,
    Arm64,
}

impl Architecture {
    /// Detect the architecture of the running process
    pub fn current() -> Self {
        // Installers are published for x64 and arm64 only.
        match std::env::consts::ARCH {
            "aarch64" => Self::Arm64,
            _ => Self::X64,
        }
    }

    /// The token installer filenames are required to contain
    pub const fn filename_token(self) -> &'static str {
        match self {
            Self::X64 => "x64",
            Self::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filename_token())
    }
}

/// Whether the product is installed per-user or per-machine
///
/// Determines which installer filename pattern asset selection requires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallScope {
    #[default]
    PerMachine,
    PerUser,
}

impl fmt::Display for InstallScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerMachine => f.write_str("per-machine"),
            Self::PerUser => f.write_str("per-user"),
        }
    }
}

/// Metadata about the running build used by a check-and-update cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildEnvironment {
    /// Version of the running build
    pub version: Version,

    /// Architecture of the running process
    pub architecture: Architecture,

    /// How the product was installed
    pub scope: InstallScope,
}

impl BuildEnvironment {
    /// Environment of the running build with the given install scope
    pub fn current(scope: InstallScope) -> Self {
        Self {
            version: Version::current(),
            architecture: Architecture::current(),
            scope,
        }
    }
}
