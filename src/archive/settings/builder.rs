//! Builder for constructing Settings.

use super::{ArchiveSettings, Settings};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_archive::archive::{ArchiveSettings, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_archive::archive::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_name("foobar")
///     .tag("v0.0.1")
///     .dist("dist")
///     .project_root(".")
///     .archive_settings(ArchiveSettings {
///         format: Some("zip".into()),
///         ..Default::default()
///     })
///     .build()?;
/// assert_eq!(settings.version(), "0.0.1");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_name: Option<String>,
    tag: Option<String>,
    dist: Option<PathBuf>,
    project_root: Option<PathBuf>,
    archive: ArchiveSettings,
    parallelism: Option<usize>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project name.
    ///
    /// Default: empty
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Sets the release tag.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the distribution directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn dist<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dist = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the root directory file patterns are resolved against.
    ///
    /// Default: current working directory
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the archive configuration. Defaults are applied on build.
    pub fn archive_settings(mut self, settings: ArchiveSettings) -> Self {
        self.archive = settings;
        self
    }

    /// Sets the maximum number of targets packaged concurrently.
    ///
    /// Default: number of CPUs
    pub fn parallelism(mut self, workers: usize) -> Self {
        self.parallelism = Some(workers);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `tag` or `dist` is missing, or if the current
    /// directory cannot be read when no project root was given.
    pub fn build(self) -> crate::archive::Result<Settings> {
        use crate::archive::error::Context;

        let project_root = match self.project_root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };

        Ok(Settings::new(
            self.project_name.unwrap_or_default(),
            self.tag.context("tag is required")?,
            self.dist.context("dist is required")?,
            project_root,
            self.archive.with_defaults(),
            self.parallelism.unwrap_or_else(num_cpus::get).max(1),
        ))
    }
}
