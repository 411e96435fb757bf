//! Project configuration and artifact registry files.
//!
//! The stage reads two inputs: a TOML project configuration holding the
//! `[archive]` table, and a JSON list of artifacts registered by the build
//! stage. It writes the resulting registry back as JSON.

use crate::archive::{ArchiveSettings, Artifact};
use crate::error::{ArchiverError, CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Project configuration file contents.
///
/// ```toml
/// project_name = "foobar"
/// dist = "dist"
///
/// [archive]
/// format = "tar.gz"
/// files = ["README.*", "LICENSE*"]
///
/// [[archive.format_overrides]]
/// os = "windows"
/// format = "zip"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name used in archive names.
    pub project_name: String,

    /// Distribution directory, relative to the config file.
    ///
    /// Default: `dist`
    pub dist: Option<PathBuf>,

    /// Worker pool size.
    ///
    /// Default: number of CPUs
    pub parallelism: Option<usize>,

    /// Archive packaging configuration.
    pub archive: ArchiveSettings,
}

/// Load the project configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ArchiverError::Cli(CliError::ExecutionFailed {
            command: "read_config".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    Ok(toml::from_str(&contents)?)
}

/// Load build artifacts from a JSON array.
pub fn load_artifacts(path: &Path) -> Result<Vec<Artifact>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ArchiverError::Cli(CliError::ExecutionFailed {
            command: "read_artifacts".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    Ok(serde_json::from_str(&contents)?)
}

/// Write artifacts as a pretty-printed JSON array, creating parent directories.
pub fn write_artifacts(path: &Path, artifacts: &[Artifact]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(artifacts)?;
    std::fs::write(path, json)?;
    Ok(())
}
