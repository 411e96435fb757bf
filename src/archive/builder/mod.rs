//! Archive stage orchestration.
//!
//! This module provides the [`Archiver`] orchestrator that turns build-stage
//! binaries into uploadable artifacts.
//!
//! # Overview
//!
//! The archiver:
//! 1. Selects [`ArtifactType::Binary`](crate::archive::ArtifactType::Binary) artifacts from the registry
//! 2. Groups them by target (OS, architecture, ARM variant)
//! 3. Packages each target on a bounded pool of blocking workers
//! 4. Registers the produced artifacts once every target has succeeded
//!
//! # Module Organization
//!
//! - [`orchestrator`] - [`Archiver`] and the worker pool
//! - [`package`] - Per-target packaging (archive or binary pass-through)

mod orchestrator;
mod package;

pub use orchestrator::Archiver;
