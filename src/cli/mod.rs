//! Command line interface for the archive stage.

mod args;

pub use args::Args;

use crate::{
    archive::{ArtifactRegistry, ArtifactType, Archiver, SettingsBuilder},
    error::{CliError, Result},
    metadata,
};
use std::path::{Path, PathBuf};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    run_with(Args::parse_args()).await
}

/// Runs the archive stage for already-parsed arguments.
pub async fn run_with(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = metadata::load_config(&args.config)?;
    let project_root = match &args.project_root {
        Some(root) => root.clone(),
        None => config_dir(&args.config),
    };
    let dist = match (&args.dist, &config.dist) {
        (Some(dist), _) => dist.clone(),
        (None, Some(dist)) => project_root.join(dist),
        (None, None) => project_root.join("dist"),
    };

    let mut builder = SettingsBuilder::new()
        .project_name(config.project_name)
        .tag(args.tag.as_str())
        .dist(&dist)
        .project_root(&project_root)
        .archive_settings(config.archive);
    if let Some(workers) = args.parallelism.or(config.parallelism) {
        builder = builder.parallelism(workers);
    }
    let settings = builder.build()?;

    let artifacts = metadata::load_artifacts(&args.artifacts)?;
    log::info!(
        "loaded {} artifacts from {}",
        artifacts.len(),
        args.artifacts.display()
    );
    let registry = ArtifactRegistry::from_artifacts(artifacts);

    Archiver::new(settings).run(&registry).await?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| dist.join("artifacts.json"));
    let mut produced = registry.filter(|a| {
        matches!(
            a.kind,
            ArtifactType::UploadableArchive | ArtifactType::UploadableBinary
        )
    });
    produced.sort_by(|a, b| a.name.cmp(&b.name));
    metadata::write_artifacts(&output, &registry.list())?;

    for artifact in &produced {
        println!("{}: {}", artifact.kind, artifact.path.display());
    }
    log::info!("wrote artifact registry to {}", output.display());
    Ok(0)
}

fn config_dir(config: &Path) -> PathBuf {
    match config.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
