//! Binary pass-through writer.

use crate::{
    archive::{error::Result, files::FileEntry, utils::fs::copy_file},
    bail,
};
use std::path::Path;

/// Copies the single binary entry to `destination`.
///
/// No container is produced; the bytes at `destination` are the binary's.
/// The source binary is left untouched.
pub(super) fn write(
    destination: &Path,
    entries: &[FileEntry],
    wrap_directory: Option<&str>,
) -> Result<()> {
    if let Some(wrap) = wrap_directory.filter(|w| !w.is_empty()) {
        log::warn!("wrap_in_directory has no effect on binary format, ignoring {wrap}");
    }

    let entry = match entries {
        [entry] if !entry.is_dir => entry,
        _ => bail!(
            "binary format expects exactly one binary, got {} entries for {}",
            entries.len(),
            destination.display()
        ),
    };

    copy_file(&entry.source, destination)?;
    log::debug!("{} -> {}", entry.source.display(), destination.display());
    Ok(())
}
