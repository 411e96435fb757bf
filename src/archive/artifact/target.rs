//! Target keys and grouping of binaries per target.

use super::Artifact;
use std::{collections::BTreeMap, fmt};

/// Distinct OS / architecture / ARM-variant combination.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Target {
    /// Operating system.
    pub os: String,
    /// Architecture.
    pub arch: String,
    /// ARM variant, `None` when not applicable.
    pub arm: Option<String>,
}

impl Target {
    /// Creates a target key. An empty ARM variant is treated as absent.
    pub fn new(os: &str, arch: &str, arm: Option<&str>) -> Self {
        Self {
            os: os.to_string(),
            arch: arch.to_string(),
            arm: arm.filter(|a| !a.is_empty()).map(String::from),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)?;
        if let Some(arm) = &self.arm {
            write!(f, "v{arm}")?;
        }
        Ok(())
    }
}

/// Partitions artifacts by target, keeping registry order within a group.
pub fn group_by_target(artifacts: Vec<Artifact>) -> BTreeMap<Target, Vec<Artifact>> {
    let mut groups: BTreeMap<Target, Vec<Artifact>> = BTreeMap::new();
    for artifact in artifacts {
        groups.entry(artifact.target()).or_default().push(artifact);
    }
    groups
}
