//! Release archive assembly.
//!
//! This module turns per-target build artifacts into distributable files:
//! compressed archives (`tar.gz`, `zip`) or renamed pass-through binaries.
//!
//! # Overview
//!
//! The [`Archiver`]:
//! 1. Reads configuration from [`Settings`]
//! 2. Groups binary artifacts from an [`ArtifactRegistry`] by [`Target`]
//! 3. Resolves the package format for each target
//! 4. Collects extra files, renders the name, and writes the archive
//! 5. Registers the results as uploadable artifacts
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_archive::archive::{
//!     Archiver, ArchiveSettings, ArtifactRegistry, SettingsBuilder,
//! };
//!
//! # async fn example(registry: ArtifactRegistry) -> kodegen_bundler_archive::archive::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .project_name("foobar")
//!     .tag("v0.1.0")
//!     .dist("dist")
//!     .archive_settings(ArchiveSettings::default())
//!     .build()?;
//!
//! Archiver::new(settings).run(&registry).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`artifact`] - Artifact records, the shared registry, and target grouping
//! - [`builder`] - The [`Archiver`] orchestrator
//! - [`error`] - Error taxonomy and context helpers
//! - [`files`] - Glob-based extra file collection
//! - [`format`] - Package formats and per-OS overrides
//! - [`naming`] - Name template rendering
//! - [`settings`] - Stage configuration and defaults
//! - [`writer`] - tar.gz, zip, and binary writers

pub mod artifact;
pub mod builder;
pub mod error;
pub mod files;
pub mod format;
pub mod naming;
pub mod settings;
mod utils;
pub mod writer;

pub use artifact::{Artifact, ArtifactExtra, ArtifactRegistry, ArtifactType, Target};
pub use builder::Archiver;
pub use error::{Error, Result};
pub use files::FileEntry;
pub use format::{FormatOverride, PackageFormat};
pub use settings::{ArchiveSettings, Settings, SettingsBuilder};
pub use writer::ArchiveWriter;
