//! Archive writers.
//!
//! [`ArchiveWriter`] is a closed set of strategies sharing one contract:
//! take an ordered list of [`FileEntry`] values and produce a single output
//! file. The strategy is chosen once per target from the resolved
//! [`PackageFormat`].

mod binary;
mod tar_gz;
mod zip_archive;

use super::{
    error::Result,
    files::FileEntry,
    format::PackageFormat,
    utils::fs::{create_file, remove_partial},
};
use std::{
    collections::HashSet,
    fs::File,
    io::BufWriter,
    path::Path,
};

/// Output strategy for one target.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArchiveWriter {
    /// POSIX tar stream, gzip compressed
    TarGz,
    /// zip container, deflate compressed
    Zip,
    /// single binary copied into place
    Binary,
}

impl ArchiveWriter {
    /// Selects the writer for a format.
    pub fn for_format(format: PackageFormat) -> Self {
        match format {
            PackageFormat::TarGz => Self::TarGz,
            PackageFormat::Zip => Self::Zip,
            PackageFormat::Binary => Self::Binary,
        }
    }

    /// Writes `entries` to `destination`.
    ///
    /// Entries are written in the given order. When an archive path repeats,
    /// the first entry wins and later ones are skipped. A non-empty
    /// `wrap_directory` prefixes every archive path with `<wrap_directory>/`;
    /// it has no effect on [`ArchiveWriter::Binary`].
    ///
    /// The destination is created fresh. On failure nothing is left at the
    /// destination.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateDir`](super::Error::CreateDir) when the
    /// destination cannot be created, and
    /// [`Error::ArchiveWrite`](super::Error::ArchiveWrite) or
    /// [`Error::Fs`](super::Error::Fs) when writing fails.
    pub fn write(
        &self,
        destination: &Path,
        entries: &[FileEntry],
        wrap_directory: Option<&str>,
    ) -> Result<()> {
        match self {
            Self::TarGz => write_fresh(destination, |out| {
                tar_gz::write(out, destination, &planned_entries(entries, wrap_directory))
            }),
            Self::Zip => write_fresh(destination, |out| {
                zip_archive::write(out, destination, &planned_entries(entries, wrap_directory))
            }),
            Self::Binary => binary::write(destination, entries, wrap_directory),
        }
    }
}

/// Entry paired with its final name inside the archive.
pub(crate) struct PlannedEntry<'a> {
    entry: &'a FileEntry,
    name: String,
}

/// Applies the wrap prefix, marks directories with a trailing `/`, and
/// drops repeated archive paths after their first occurrence.
fn planned_entries<'a>(entries: &'a [FileEntry], wrap: Option<&str>) -> Vec<PlannedEntry<'a>> {
    let wrap = wrap.map(|w| w.trim_matches('/')).filter(|w| !w.is_empty());
    let mut seen = HashSet::new();
    let mut planned = Vec::with_capacity(entries.len());

    for entry in entries {
        let relative = entry.archive_path.trim_matches('/');
        let mut name = match wrap {
            Some(wrap) => format!("{wrap}/{relative}"),
            None => relative.to_string(),
        };
        if !seen.insert(name.clone()) {
            log::debug!("skipping duplicate archive entry {name}");
            continue;
        }
        if entry.is_dir {
            name.push('/');
        }
        planned.push(PlannedEntry { entry, name });
    }

    planned
}

fn write_fresh<F>(destination: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> Result<()>,
{
    let out = create_file(destination)?;
    let result = write(out);
    if result.is_err() {
        remove_partial(destination);
    }
    result
}
