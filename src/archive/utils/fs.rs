//! File system utilities for archive writing.
//!
//! Blocking operations only; callers run them on worker threads.

use crate::archive::error::{Error, ErrorExt, Result};
use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::Path,
};

/// Creates a fresh file at `path`, creating missing parent directories.
///
/// An existing file is truncated. Failures are reported as
/// [`Error::CreateDir`] naming `path`.
pub fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let create_error = |source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(create_error)?;
    }
    let file = File::create(path).map_err(create_error)?;
    Ok(BufWriter::new(file))
}

/// Removes a partially written output. Missing files are ignored.
pub fn remove_partial(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => log::debug!("removed partial output {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("failed to remove partial output {}: {}", path.display(), e),
    }
}

/// Copies a regular file to `to`, creating the destination directory.
///
/// The source is left in place and its permissions are carried over.
/// Copying a file onto itself is a no-op.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from).fs_context("reading binary metadata", from)?;
    if !metadata.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if same_file(from, to) {
        log::debug!("{} is already in place", to.display());
        return Ok(());
    }

    if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: to.to_path_buf(),
            source,
        })?;
    }

    if let Err(e) = fs::copy(from, to) {
        remove_partial(to);
        return Err(e).fs_context("copying binary to", to);
    }
    Ok(())
}

/// Whether both paths resolve to the same existing file.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_file_makes_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/out.txt");
        drop(create_file(&path).unwrap());
        assert!(path.is_file());
    }

    #[test]
    fn create_file_reports_create_dir_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();
        let path = blocker.join("dist/out.zip");

        let err = create_file(&path).unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
        assert!(
            err.to_string()
                .starts_with(&format!("failed to create directory {}: ", path.display()))
        );
    }

    #[test]
    fn copy_file_keeps_bytes_and_source() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("build/mybin");
        fs::create_dir_all(from.parent().unwrap()).unwrap();
        fs::write(&from, b"\x7fELF binary").unwrap();
        let to = dir.path().join("dist/mybin_1.0.0_linux_amd64");

        copy_file(&from, &to).unwrap();
        assert_eq!(fs::read(&to).unwrap(), b"\x7fELF binary");
        assert_eq!(fs::read(&from).unwrap(), b"\x7fELF binary");
    }

    #[cfg(unix)]
    #[test]
    fn copy_file_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("mybin");
        fs::write(&from, b"bin").unwrap();
        fs::set_permissions(&from, fs::Permissions::from_mode(0o755)).unwrap();
        let to = dir.path().join("dist/mybin");

        copy_file(&from, &to).unwrap();
        assert_eq!(fs::metadata(&to).unwrap().permissions().mode() & 0o777, 0o755);
    }

    #[test]
    fn copy_file_onto_itself_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mybin");
        fs::write(&path, b"bin").unwrap();
        copy_file(&path, &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"bin");
    }

    #[test]
    fn copy_file_rejects_directories() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_file(dir.path(), &dir.path().join("x")).unwrap_err();
        assert!(err.to_string().ends_with("is not a file"));
    }
}
