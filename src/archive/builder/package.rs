//! Per-target packaging.
//!
//! Runs on a blocking worker. Produced artifacts are handed back to the
//! orchestrator, which registers them once the whole stage has succeeded.

use crate::archive::{
    artifact::{Artifact, ArtifactExtra, ArtifactType, Target},
    error::{Context, Result},
    files::{self, FileEntry},
    format::{PackageFormat, resolve_format},
    naming::{self, NameVars},
    settings::Settings,
    utils::fs::{remove_partial, same_file},
    writer::ArchiveWriter,
};

/// Packages every binary of one target and returns what was produced.
pub(super) fn package_target(
    settings: &Settings,
    target: &Target,
    binaries: &[Artifact],
) -> Result<Vec<Artifact>> {
    let archive = settings.archive();
    let format: PackageFormat =
        resolve_format(archive.format(), archive.format_overrides(), &target.os).parse()?;
    log::debug!("packaging {target} as {format}");

    match format {
        PackageFormat::Binary => {
            let mut produced = Vec::with_capacity(binaries.len());
            for binary in binaries {
                match skip_archive(settings, binary) {
                    Ok(artifact) => produced.push(artifact),
                    Err(e) => {
                        discard(&produced, binaries);
                        return Err(e);
                    }
                }
            }
            Ok(produced)
        }
        PackageFormat::TarGz | PackageFormat::Zip => {
            Ok(vec![create_archive(settings, format, target, binaries)?])
        }
    }
}

/// Deletes the files behind artifacts that will not be registered.
///
/// Outputs that are one of the `inputs` are kept.
pub(super) fn discard(produced: &[Artifact], inputs: &[Artifact]) {
    for artifact in produced {
        if inputs.iter().any(|input| same_file(&input.path, &artifact.path)) {
            continue;
        }
        log::debug!("discarding {}", artifact.path.display());
        remove_partial(&artifact.path);
    }
}

/// Writes one archive holding the target's binaries followed by the
/// configured extra files.
fn create_archive(
    settings: &Settings,
    format: PackageFormat,
    target: &Target,
    binaries: &[Artifact],
) -> Result<Artifact> {
    let first = binaries
        .first()
        .with_context(|| format!("no binaries for target {target}"))?;
    let archive = settings.archive();

    let name = naming::render(archive.name_template(), &NameVars::for_artifact(settings, first))?;
    let file_name = format!("{name}{}", format.extension());
    let path = settings.dist().join(&file_name);

    let mut entries: Vec<FileEntry> = binaries
        .iter()
        .map(|binary| FileEntry::file(&binary.path, &binary.name))
        .collect();
    let extras = files::collect(archive.files(), settings.project_root())
        .context("failed to find files to archive")?;
    entries.extend(extras);

    let wrap = archive.wrap_in_directory.then_some(name.as_str());
    ArchiveWriter::for_format(format).write(&path, &entries, wrap)?;
    log::info!("created archive {} ({} entries)", path.display(), entries.len());

    Ok(Artifact {
        name: file_name,
        path,
        os: target.os.clone(),
        arch: target.arch.clone(),
        arm: target.arm.clone(),
        kind: ArtifactType::UploadableArchive,
        extra: ArtifactExtra {
            binary: Some(first.binary_name().to_string()),
            extension: None,
            wrapped_in: wrap.map(String::from),
        },
    })
}

/// Copies a binary into the distribution directory under its rendered name.
fn skip_archive(settings: &Settings, binary: &Artifact) -> Result<Artifact> {
    let mut name = naming::render(
        settings.archive().name_template(),
        &NameVars::for_artifact(settings, binary),
    )?;
    let ext = binary.extension();
    if !ext.is_empty() && !name.ends_with(ext) {
        name.push_str(ext);
    }

    let path = settings.dist().join(&name);
    ArchiveWriter::Binary.write(&path, &[FileEntry::file(&binary.path, &binary.name)], None)?;
    log::info!("created binary {}", path.display());

    Ok(Artifact {
        name,
        path,
        os: binary.os.clone(),
        arch: binary.arch.clone(),
        arm: binary.arm.clone(),
        kind: ArtifactType::UploadableBinary,
        extra: ArtifactExtra {
            binary: Some(binary.binary_name().to_string()),
            extension: binary.extra.extension.clone(),
            wrapped_in: None,
        },
    })
}
