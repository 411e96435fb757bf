//! Glob-based collection of extra files to archive.

use super::error::{Error, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::path::{Component, Path, PathBuf};

/// A file or directory destined for an archive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileEntry {
    /// Location on disk.
    pub source: PathBuf,
    /// Relative, forward-slash path inside the archive.
    pub archive_path: String,
    /// Whether this entry is a directory.
    pub is_dir: bool,
}

impl FileEntry {
    /// A regular file entry.
    pub fn file(source: impl Into<PathBuf>, archive_path: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            archive_path: archive_path.into(),
            is_dir: false,
        }
    }

    /// A directory entry.
    pub fn dir(source: impl Into<PathBuf>, archive_path: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            archive_path: archive_path.into(),
            is_dir: true,
        }
    }
}

/// Resolves `patterns` against `project_root`.
///
/// Patterns are expanded one at a time, in order, and their matches are
/// appended in the order the glob walk yields them. Matches keep their path
/// relative to the project root, which may itself be relative to the
/// working directory. Directories are returned as directory entries.
///
/// # Errors
///
/// Returns [`Error::Glob`] when a pattern is malformed, matches nothing, or
/// matches a path outside the project root.
pub fn collect<S: AsRef<str>>(patterns: &[S], project_root: &Path) -> Result<Vec<FileEntry>> {
    let project_root = project_root
        .absolutize()
        .fs_context("resolving project root", project_root)?;
    let project_root: &Path = &project_root;
    let mut entries = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob_error = |reason: String| Error::Glob {
            pattern: pattern.to_string(),
            reason,
        };

        let paths = glob::glob(&rooted_pattern(pattern, project_root))
            .map_err(|e| glob_error(e.to_string()))?;

        let mut matched = 0usize;
        for path in paths {
            let path = path.map_err(|e| glob_error(e.to_string()))?;
            matched += 1;
            let relative = path.strip_prefix(project_root).map_err(|_| {
                glob_error(format!("{} is outside the project root", path.display()))
            })?;
            if let Some(entry) = entry_for(&path, relative) {
                entries.push(entry);
            }
        }

        if matched == 0 {
            return Err(glob_error("file does not exist".to_string()));
        }
        log::debug!("pattern {pattern} matched {matched} paths");
    }

    Ok(entries)
}

/// Joins a pattern onto the escaped project root. Absolute patterns are kept.
fn rooted_pattern(pattern: &str, project_root: &Path) -> String {
    if Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }
    let relative = pattern.trim_start_matches("./");
    let root = glob::Pattern::escape(&project_root.to_string_lossy());
    format!("{}/{}", root.trim_end_matches(['/', '\\']), relative)
}

fn entry_for(path: &Path, relative: &Path) -> Option<FileEntry> {
    let archive_path = to_archive_path(relative);
    if archive_path.is_empty() {
        return None;
    }
    if path.is_dir() {
        Some(FileEntry::dir(path, archive_path))
    } else {
        Some(FileEntry::file(path, archive_path))
    }
}

/// Renders a relative path with `/` separators, dropping `.` components.
pub(crate) fn to_archive_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "readme").unwrap();
        fs::write(dir.path().join("LICENSE"), "license").unwrap();
        fs::create_dir_all(dir.path().join("foo/bar/foobar")).unwrap();
        fs::write(dir.path().join("foo/bar/foobar/blah.txt"), "blah").unwrap();
        dir
    }

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.archive_path.as_str()).collect()
    }

    #[test]
    fn collects_files_relative_to_root() {
        let dir = project();
        let entries = collect(&["README.*"], dir.path()).unwrap();
        assert_eq!(names(&entries), ["README.md"]);
        assert!(!entries[0].is_dir);
        assert_eq!(entries[0].source, dir.path().join("README.md"));
    }

    #[test]
    fn recursive_pattern_keeps_directories_and_structure() {
        let dir = project();
        let entries = collect(&["./foo/**/*"], dir.path()).unwrap();

        assert_eq!(
            names(&entries),
            ["foo/bar", "foo/bar/foobar", "foo/bar/foobar/blah.txt"]
        );

        let bar = entries.iter().find(|e| e.archive_path == "foo/bar").unwrap();
        assert!(bar.is_dir);
    }

    #[test]
    fn relative_root_keeps_structure() {
        let dir = tempfile::tempdir_in(".").unwrap();
        fs::create_dir_all(dir.path().join("foo/bar/foobar")).unwrap();
        fs::write(dir.path().join("foo/bar/foobar/blah.txt"), "blah").unwrap();
        let root = Path::new(".").join(dir.path().file_name().unwrap());
        assert!(root.is_relative());

        let entries = collect(&["./foo/**/*"], &root).unwrap();
        assert_eq!(
            names(&entries),
            ["foo/bar", "foo/bar/foobar", "foo/bar/foobar/blah.txt"]
        );
        assert!(entries[2].source.ends_with("foo/bar/foobar/blah.txt"));
    }

    #[test]
    fn absolute_pattern_outside_root_is_an_error() {
        let dir = project();
        let other = tempfile::tempdir().unwrap();
        fs::write(other.path().join("NOTICE"), "notice").unwrap();
        let pattern = format!("{}/NOTICE", other.path().display());

        let err = collect(&[pattern.as_str()], dir.path()).unwrap_err();
        match err {
            Error::Glob { pattern: p, reason } => {
                assert_eq!(p, pattern);
                assert!(reason.ends_with("is outside the project root"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn keeps_pattern_order() {
        let dir = project();
        let entries = collect(&["README.*", "LICENSE"], dir.path()).unwrap();
        assert_eq!(names(&entries), ["README.md", "LICENSE"]);
    }

    #[test]
    fn overlapping_patterns_are_not_deduplicated_here() {
        let dir = project();
        let entries = collect(&["README.*", "*.md"], dir.path()).unwrap();
        assert_eq!(names(&entries), ["README.md", "README.md"]);
    }

    #[test]
    fn zero_matches_is_an_error() {
        let dir = project();
        let err = collect(&["README.*", "[x-]"], dir.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "globbing failed for pattern [x-]: file does not exist"
        );
    }

    #[test]
    fn malformed_pattern_is_an_error() {
        let dir = project();
        let err = collect(&["foo/***"], dir.path()).unwrap_err();
        match err {
            Error::Glob { pattern, .. } => assert_eq!(pattern, "foo/***"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_doc_pattern_is_case_insensitive() {
        let dir = project();
        fs::write(dir.path().join("changelog.md"), "log").unwrap();
        fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
        let entries = collect(
            &[crate::archive::settings::DEFAULT_FILES_PATTERN],
            dir.path(),
        )
        .unwrap();
        let mut found = names(&entries);
        found.sort();
        assert_eq!(found, ["LICENSE", "README.md", "changelog.md"]);
    }

    #[test]
    fn archive_path_uses_forward_slashes() {
        let path: PathBuf = ["a", ".", "b", "c.txt"].iter().collect();
        assert_eq!(to_archive_path(&path), "a/b/c.txt");
    }
}
