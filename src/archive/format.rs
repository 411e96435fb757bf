//! Package formats and per-OS format overrides.

use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Format used when none is configured.
pub const DEFAULT_FORMAT: &str = "tar.gz";

/// Distributable format produced for a target.
///
/// `Binary` skips archiving entirely: the compiled binary is renamed and
/// published as-is.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PackageFormat {
    /// gzip-compressed tarball
    #[serde(rename = "tar.gz")]
    TarGz,
    /// zip container, deflate compressed
    #[serde(rename = "zip")]
    Zip,
    /// raw binary, no container
    #[serde(rename = "binary")]
    Binary,
}

impl PackageFormat {
    /// Configuration spelling of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TarGz => "tar.gz",
            Self::Zip => "zip",
            Self::Binary => "binary",
        }
    }

    /// File extension appended to the rendered name, including the dot.
    ///
    /// Empty for [`PackageFormat::Binary`]; the platform extension is used instead.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::TarGz => ".tar.gz",
            Self::Zip => ".zip",
            Self::Binary => "",
        }
    }
}

impl fmt::Display for PackageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tar.gz" => Ok(Self::TarGz),
            "zip" => Ok(Self::Zip),
            "binary" => Ok(Self::Binary),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Replaces the default format for every artifact built for `os`.
///
/// ```toml
/// [[archive.format_overrides]]
/// os = "windows"
/// format = "zip"
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FormatOverride {
    /// Target operating system, e.g. `windows`.
    #[serde(alias = "goos")]
    pub os: String,
    /// Format to use instead of the default.
    pub format: String,
}

impl FormatOverride {
    /// Creates an override rule.
    pub fn new(os: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            format: format.into(),
        }
    }
}

/// Returns the effective format string for `os`.
///
/// Overrides are checked in declaration order and the first rule for `os`
/// wins. The result is not validated here.
pub fn resolve_format<'a>(default: &'a str, overrides: &'a [FormatOverride], os: &str) -> &'a str {
    overrides
        .iter()
        .find(|rule| rule.os == os)
        .map(|rule| rule.format.as_str())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_applies_only_to_matching_os() {
        let overrides = vec![FormatOverride::new("windows", "zip")];
        assert_eq!(resolve_format("tar.gz", &overrides, "windows"), "zip");
        assert_eq!(resolve_format("tar.gz", &overrides, "linux"), "tar.gz");
    }

    #[test]
    fn first_matching_rule_wins() {
        let overrides = vec![
            FormatOverride::new("darwin", "binary"),
            FormatOverride::new("windows", "zip"),
            FormatOverride::new("windows", "binary"),
        ];
        assert_eq!(resolve_format("tar.gz", &overrides, "windows"), "zip");
        assert_eq!(resolve_format("zip", &overrides, "darwin"), "binary");
    }

    #[test]
    fn override_beats_any_default() {
        let overrides = vec![FormatOverride::new("linux", "zip")];
        for default in ["tar.gz", "zip", "binary", "bogus"] {
            assert_eq!(resolve_format(default, &overrides, "linux"), "zip");
        }
    }

    #[test]
    fn parses_known_formats() {
        assert_eq!("tar.gz".parse::<PackageFormat>().unwrap(), PackageFormat::TarGz);
        assert_eq!("zip".parse::<PackageFormat>().unwrap(), PackageFormat::Zip);
        assert_eq!("binary".parse::<PackageFormat>().unwrap(), PackageFormat::Binary);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "rar".parse::<PackageFormat>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref f) if f == "rar"));
        assert_eq!(err.to_string(), "unsupported archive format: rar");
    }

    #[test]
    fn override_deserializes_from_toml() {
        let rule: FormatOverride = toml::from_str("os = \"windows\"\nformat = \"zip\"").unwrap();
        assert_eq!(rule, FormatOverride::new("windows", "zip"));
    }
}
