//! Filesystem helpers shared by the writers.

pub mod fs;
