//! Artifact records shared between pipeline stages.
//!
//! The build stage registers [`ArtifactType::Binary`] entries; this stage
//! reads them and registers [`ArtifactType::UploadableArchive`] or
//! [`ArtifactType::UploadableBinary`] entries for the publishing stages.

mod registry;
mod target;

pub use registry::{ArtifactRegistry, and, by_os, by_type};
pub use target::{Target, group_by_target};

use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};

/// Classification of a registered artifact.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    /// Compiled binary produced by the build stage.
    Binary,
    /// Archive ready to be published.
    UploadableArchive,
    /// Raw binary ready to be published.
    UploadableBinary,
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Binary => "binary",
            Self::UploadableArchive => "uploadable archive",
            Self::UploadableBinary => "uploadable binary",
        })
    }
}

/// Typed per-artifact metadata.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ArtifactExtra {
    /// Logical binary name, without platform extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,

    /// Platform extension including the dot, e.g. `.exe`.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "ext")]
    pub extension: Option<String>,

    /// Top-level directory the archive contents are nested under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapped_in: Option<String>,
}

/// One registered artifact.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// File name as published.
    pub name: String,
    /// Location on disk.
    pub path: PathBuf,
    /// Target operating system, e.g. `linux`.
    pub os: String,
    /// Target architecture, e.g. `amd64`.
    pub arch: String,
    /// ARM variant, e.g. `7`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm: Option<String>,
    /// Artifact classification.
    #[serde(rename = "type")]
    pub kind: ArtifactType,
    /// Typed metadata.
    #[serde(default)]
    pub extra: ArtifactExtra,
}

impl Artifact {
    /// Creates a build-stage binary artifact.
    pub fn binary(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        os: impl Into<String>,
        arch: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            os: os.into(),
            arch: arch.into(),
            arm: None,
            kind: ArtifactType::Binary,
            extra: ArtifactExtra::default(),
        }
    }

    /// Sets the ARM variant.
    pub fn with_arm(mut self, arm: impl Into<String>) -> Self {
        self.arm = Some(arm.into());
        self
    }

    /// Sets the typed metadata.
    pub fn with_extra(mut self, extra: ArtifactExtra) -> Self {
        self.extra = extra;
        self
    }

    /// The target this artifact was built for.
    pub fn target(&self) -> Target {
        Target::new(&self.os, &self.arch, self.arm.as_deref())
    }

    /// Logical binary name.
    ///
    /// Falls back to the artifact name with its platform extension removed.
    pub fn binary_name(&self) -> &str {
        if let Some(binary) = self.extra.binary.as_deref() {
            return binary;
        }
        let ext = self.extension();
        if ext.is_empty() {
            &self.name
        } else {
            self.name.strip_suffix(ext).unwrap_or(&self.name)
        }
    }

    /// Platform extension, empty when the target needs none.
    pub fn extension(&self) -> &str {
        self.extra.extension.as_deref().unwrap_or("")
    }
}
