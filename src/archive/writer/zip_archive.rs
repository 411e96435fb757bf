//! zip writer.

use super::PlannedEntry;
use crate::archive::error::{Error, ErrorExt, Result};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Streams `entries` into a deflate-compressed zip container.
pub(super) fn write(
    out: BufWriter<File>,
    destination: &Path,
    entries: &[PlannedEntry<'_>],
) -> Result<()> {
    let write_error = |name: &str, reason: String| Error::ArchiveWrite {
        path: destination.to_path_buf(),
        reason: format!("adding {name}: {reason}"),
    };

    let mut zip = ZipWriter::new(out);

    for planned in entries {
        let source = &planned.entry.source;
        let options = entry_options(source);

        if planned.entry.is_dir {
            zip.add_directory(planned.name.as_str(), options)
                .map_err(|e| write_error(&planned.name, e.to_string()))?;
        } else {
            let mut input = File::open(source).fs_context("opening file to archive", source)?;
            zip.start_file(planned.name.as_str(), options)
                .map_err(|e| write_error(&planned.name, e.to_string()))?;
            io::copy(&mut input, &mut zip)
                .map_err(|e| write_error(&planned.name, e.to_string()))?;
        }
        log::trace!("zip: {} <- {}", planned.name, source.display());
    }

    let mut out = zip
        .finish()
        .map_err(|e| write_error("central directory", e.to_string()))?;
    out.flush()
        .map_err(|e| write_error("central directory", e.to_string()))?;
    Ok(())
}

#[cfg(unix)]
fn entry_options(source: &Path) -> SimpleFileOptions {
    use std::os::unix::fs::PermissionsExt;

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    match std::fs::metadata(source) {
        Ok(metadata) => options.unix_permissions(metadata.permissions().mode() & 0o777),
        Err(_) => options,
    }
}

#[cfg(not(unix))]
fn entry_options(_source: &Path) -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

#[cfg(test)]
mod tests {
    use crate::archive::{files::FileEntry, writer::ArchiveWriter};
    use std::{
        fs::{self, File},
        io::Read,
    };

    fn read_names(path: &std::path::Path) -> Vec<String> {
        let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn writes_files_and_directories_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mybin.exe"), b"MZ").unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/a.txt"), b"a").unwrap();

        let entries = vec![
            FileEntry::file(dir.path().join("mybin.exe"), "mybin.exe"),
            FileEntry::dir(dir.path().join("docs"), "docs"),
            FileEntry::file(dir.path().join("docs/a.txt"), "docs/a.txt"),
        ];
        let out = dir.path().join("out.zip");
        ArchiveWriter::Zip.write(&out, &entries, None).unwrap();

        assert_eq!(read_names(&out), ["mybin.exe", "docs/", "docs/a.txt"]);
    }

    #[test]
    fn keeps_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), b"# hello").unwrap();
        let out = dir.path().join("out.zip");
        ArchiveWriter::Zip
            .write(&out, &[FileEntry::file(dir.path().join("README.md"), "README.md")], Some("pkg"))
            .unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&out).unwrap()).unwrap();
        let mut file = archive.by_name("pkg/README.md").unwrap();
        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "# hello");
    }

    #[test]
    fn failed_write_leaves_no_archive() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.zip");
        let entries = vec![FileEntry::file(dir.path().join("missing"), "missing")];

        assert!(ArchiveWriter::Zip.write(&out, &entries, None).is_err());
        assert!(!out.exists());
    }
}
