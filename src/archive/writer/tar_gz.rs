//! tar.gz writer.

use super::PlannedEntry;
use crate::archive::error::{Error, Result};
use flate2::{Compression, write::GzEncoder};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Streams `entries` into a gzip-compressed tarball.
///
/// File modes are taken from the source files. Directory entries carry no
/// content.
pub(super) fn write(
    out: BufWriter<File>,
    destination: &Path,
    entries: &[PlannedEntry<'_>],
) -> Result<()> {
    let write_error = |name: &str, e: std::io::Error| Error::ArchiveWrite {
        path: destination.to_path_buf(),
        reason: format!("adding {name}: {e}"),
    };

    let mut builder = tar::Builder::new(GzEncoder::new(out, Compression::default()));

    for planned in entries {
        let source = &planned.entry.source;
        let added = if planned.entry.is_dir {
            builder.append_dir(&planned.name, source)
        } else {
            builder.append_path_with_name(source, &planned.name)
        };
        added.map_err(|e| write_error(&planned.name, e))?;
        log::trace!("tar: {} <- {}", planned.name, source.display());
    }

    let finish_error = |e| write_error("end of archive", e);
    let encoder = builder.into_inner().map_err(finish_error)?;
    let mut out = encoder.finish().map_err(finish_error)?;
    out.flush().map_err(finish_error)?;
    Ok(())
}
