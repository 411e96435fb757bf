//! The `[archive]` configuration table and its defaults.

use crate::archive::{
    format::{DEFAULT_FORMAT, FormatOverride},
    naming::{DEFAULT_BINARY_NAME_TEMPLATE, DEFAULT_NAME_TEMPLATE},
};
use serde::{Deserialize, Serialize};

/// Matches LICENSE/LICENCE, README and CHANGELOG style files in any case.
pub const DEFAULT_FILES_PATTERN: &str = "[LlRrCc][IiEeHh][CcAa][EeDdNn][NnMmGg]*";

/// Archive packaging configuration.
///
/// # Configuration
///
/// ```toml
/// [archive]
/// format = "tar.gz"
/// name_template = "{{ ProjectName }}_{{ Version }}_{{ Os }}_{{ Arch }}"
/// files = ["README.*", "docs/**/*"]
/// wrap_in_directory = true
///
/// [[archive.format_overrides]]
/// os = "windows"
/// format = "zip"
/// ```
///
/// Unset fields are filled by [`ArchiveSettings::with_defaults`].
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveSettings {
    /// Package format: `tar.gz`, `zip` or `binary`.
    ///
    /// Default: `tar.gz`
    pub format: Option<String>,

    /// Handlebars template for the output name, without extension.
    ///
    /// Default: the archive template, or the binary template when
    /// `format` is `binary`.
    pub name_template: Option<String>,

    /// Glob patterns for extra files, relative to the project root.
    ///
    /// Default: [`DEFAULT_FILES_PATTERN`]
    pub files: Option<Vec<String>>,

    /// Nest archive contents under a directory named like the archive.
    ///
    /// Default: false
    pub wrap_in_directory: bool,

    /// Per-OS format rules, first match wins.
    ///
    /// Default: empty
    pub format_overrides: Vec<FormatOverride>,
}

impl ArchiveSettings {
    /// Returns a copy with every unset field populated.
    pub fn with_defaults(self) -> Self {
        let format = self.format.unwrap_or_else(|| DEFAULT_FORMAT.to_string());
        let name_template = self.name_template.unwrap_or_else(|| {
            if format == "binary" {
                DEFAULT_BINARY_NAME_TEMPLATE.to_string()
            } else {
                DEFAULT_NAME_TEMPLATE.to_string()
            }
        });
        let files = self
            .files
            .unwrap_or_else(|| vec![DEFAULT_FILES_PATTERN.to_string()]);

        Self {
            format: Some(format),
            name_template: Some(name_template),
            files: Some(files),
            wrap_in_directory: self.wrap_in_directory,
            format_overrides: self.format_overrides,
        }
    }

    /// Default package format.
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }

    /// Name template.
    pub fn name_template(&self) -> &str {
        self.name_template.as_deref().unwrap_or(DEFAULT_NAME_TEMPLATE)
    }

    /// Extra file patterns; empty until defaults are applied.
    pub fn files(&self) -> &[String] {
        self.files.as_deref().unwrap_or_default()
    }

    /// Per-OS overrides.
    pub fn format_overrides(&self) -> &[FormatOverride] {
        &self.format_overrides
    }
}
