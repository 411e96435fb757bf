//! Shared, thread-safe artifact registry.

use super::{Artifact, ArtifactType};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Registry of artifacts produced across pipeline stages.
///
/// Cloning yields another handle to the same storage, so workers can append
/// concurrently. No ordering is guaranteed between concurrent appends.
#[derive(Clone, Debug, Default)]
pub struct ArtifactRegistry {
    items: Arc<Mutex<Vec<Artifact>>>,
}

impl ArtifactRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with `artifacts`.
    pub fn from_artifacts(artifacts: Vec<Artifact>) -> Self {
        Self {
            items: Arc::new(Mutex::new(artifacts)),
        }
    }

    /// Appends an artifact.
    pub fn add(&self, artifact: Artifact) {
        log::debug!("registering {} artifact {}", artifact.kind, artifact.name);
        self.lock().push(artifact);
    }

    /// Returns a snapshot of every artifact.
    pub fn list(&self) -> Vec<Artifact> {
        self.lock().clone()
    }

    /// Returns a snapshot of the artifacts matching `predicate`.
    pub fn filter<F>(&self, predicate: F) -> Vec<Artifact>
    where
        F: Fn(&Artifact) -> bool,
    {
        self.lock().iter().filter(|a| predicate(a)).cloned().collect()
    }

    /// Number of registered artifacts.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Artifact>> {
        // Appends are single pushes, so a poisoned vector is still consistent.
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Matches artifacts of the given type.
pub fn by_type(kind: ArtifactType) -> impl Fn(&Artifact) -> bool {
    move |a| a.kind == kind
}

/// Matches artifacts built for the given OS.
pub fn by_os(os: impl Into<String>) -> impl Fn(&Artifact) -> bool {
    let os = os.into();
    move |a| a.os == os
}

/// Matches artifacts accepted by both predicates.
pub fn and<A, B>(a: A, b: B) -> impl Fn(&Artifact) -> bool
where
    A: Fn(&Artifact) -> bool,
    B: Fn(&Artifact) -> bool,
{
    move |artifact| a(artifact) && b(artifact)
}
