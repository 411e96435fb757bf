//! Core Settings struct and implementations.

use super::ArchiveSettings;
use std::path::{Path, PathBuf};

/// Settings for one run of the archive stage.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder), which applies
/// [`ArchiveSettings::with_defaults`] so every archive field is populated.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Project name used by the default archive template.
    project_name: String,

    /// Release tag, e.g. `v1.2.3`.
    tag: String,

    /// Distribution directory where outputs are written, flat.
    dist: PathBuf,

    /// Root that file patterns are resolved against.
    project_root: PathBuf,

    /// Archive packaging configuration.
    archive: ArchiveSettings,

    /// Maximum number of targets packaged at once.
    parallelism: usize,
}

impl Settings {
    /// Returns the project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Returns the release tag as given.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the version: the tag with one leading `v` removed.
    pub fn version(&self) -> &str {
        self.tag.strip_prefix('v').unwrap_or(&self.tag)
    }

    /// Returns the distribution directory.
    pub fn dist(&self) -> &Path {
        &self.dist
    }

    /// Returns the project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the archive configuration.
    pub fn archive(&self) -> &ArchiveSettings {
        &self.archive
    }

    /// Returns the worker pool size.
    pub fn parallelism(&self) -> usize {
        self.parallelism
    }

    pub(super) fn new(
        project_name: String,
        tag: String,
        dist: PathBuf,
        project_root: PathBuf,
        archive: ArchiveSettings,
        parallelism: usize,
    ) -> Self {
        Self {
            project_name,
            tag,
            dist,
            project_root,
            archive,
            parallelism,
        }
    }
}
