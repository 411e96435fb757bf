//! Configuration for the archive stage.
//!
//! [`ArchiveSettings`] mirrors the `[archive]` table of the project
//! configuration; [`Settings`] adds the release context (project name, tag,
//! directories) and is built through [`SettingsBuilder`].

mod archive;
mod builder;
mod core;

pub use self::archive::{ArchiveSettings, DEFAULT_FILES_PATTERN};
pub use self::builder::SettingsBuilder;
pub use self::core::Settings;
