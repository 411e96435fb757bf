//! Main archiver orchestration.
//!
//! This module provides the [`Archiver`] orchestrator that packages every
//! target on a bounded pool of blocking workers.

use super::package::{discard, package_target};
use crate::archive::{
    artifact::{Artifact, ArtifactRegistry, ArtifactType, Target, by_type, group_by_target},
    error::{Error, Result},
    settings::Settings,
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::{
    sync::Semaphore,
    task::{JoinError, JoinSet},
};

/// Archive stage orchestrator.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_archive::archive::{Archiver, ArtifactRegistry, Settings};
///
/// # async fn example(settings: Settings, registry: ArtifactRegistry) -> kodegen_bundler_archive::archive::Result<()> {
/// let archiver = Archiver::new(settings);
/// archiver.run(&registry).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Archiver {
    settings: Arc<Settings>,
}

impl Archiver {
    /// Creates a new archiver with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Returns a reference to the archiver settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Packages every target found in `registry` and registers the results.
    ///
    /// Targets are handled independently on up to
    /// [`Settings::parallelism`] blocking workers. The first failure stops
    /// dispatch. Workers already running are waited for, their outputs are
    /// deleted, and the first error is returned. Produced artifacts are
    /// registered only when every target succeeded.
    ///
    /// # Errors
    ///
    /// Returns the first per-target error. No partial set of archives counts
    /// as success.
    pub async fn run(&self, registry: &ArtifactRegistry) -> Result<()> {
        let binaries = registry.filter(by_type(ArtifactType::Binary));
        if binaries.is_empty() {
            log::info!("no binaries found, skipping archives");
            return Ok(());
        }

        let groups = group_by_target(binaries.clone());
        log::info!(
            "creating archives for {} targets with up to {} workers",
            groups.len(),
            self.settings.parallelism()
        );

        let permits = Arc::new(Semaphore::new(self.settings.parallelism()));
        let failed = Arc::new(AtomicBool::new(false));
        let mut workers: JoinSet<(Target, Result<Vec<Artifact>>)> = JoinSet::new();
        let mut outcome = Outcome::default();

        for (target, artifacts) in groups {
            let permit = Arc::clone(&permits)
                .acquire_owned()
                .await
                .map_err(|e| Error::GenericError(format!("worker pool closed: {e}")))?;

            while let Some(done) = workers.try_join_next() {
                outcome.record(done);
            }
            if failed.load(Ordering::SeqCst) || outcome.error.is_some() {
                log::debug!("not dispatching {target} after failure");
                break;
            }

            let settings = Arc::clone(&self.settings);
            let failed = Arc::clone(&failed);
            workers.spawn_blocking(move || {
                let result = package_target(&settings, &target, &artifacts);
                if result.is_err() {
                    failed.store(true, Ordering::SeqCst);
                }
                drop(permit);
                (target, result)
            });
        }

        while let Some(done) = workers.join_next().await {
            outcome.record(done);
        }

        match outcome.error {
            Some(e) => {
                discard(&outcome.produced, &binaries);
                Err(e)
            }
            None => {
                for artifact in outcome.produced {
                    registry.add(artifact);
                }
                Ok(())
            }
        }
    }
}

/// Results gathered from finished workers.
#[derive(Default)]
struct Outcome {
    produced: Vec<Artifact>,
    error: Option<Error>,
}

impl Outcome {
    fn record(&mut self, done: std::result::Result<(Target, Result<Vec<Artifact>>), JoinError>) {
        match done {
            Ok((target, Ok(artifacts))) => {
                log::debug!("finished {target}");
                self.produced.extend(artifacts);
            }
            Ok((target, Err(e))) => {
                log::error!("packaging {target} failed: {e}");
                self.error.get_or_insert(e);
            }
            Err(e) => {
                self.error
                    .get_or_insert(Error::GenericError(format!("archive worker panicked: {e}")));
            }
        }
    }
}
