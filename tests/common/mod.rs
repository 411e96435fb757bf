//! Shared fixtures for integration tests.

#![allow(dead_code)]

use flate2::read::GzDecoder;
use kodegen_bundler_archive::archive::{Artifact, ArtifactExtra};
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

/// A temporary project laid out like the output of a build stage:
///
/// ```text
/// <root>/README.md
/// <root>/foo/bar/foobar/blah.txt
/// <root>/dist/darwinamd64/mybin
/// <root>/dist/windowsamd64/mybin.exe
/// ```
pub struct Project {
    pub dir: tempfile::TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join("dist/darwinamd64")).unwrap();
        fs::create_dir_all(root.join("dist/windowsamd64")).unwrap();
        fs::write(root.join("dist/darwinamd64/mybin"), b"darwin binary").unwrap();
        fs::write(root.join("dist/windowsamd64/mybin.exe"), b"windows binary").unwrap();
        fs::write(root.join("README.md"), b"# foobar").unwrap();
        fs::create_dir_all(root.join("foo/bar/foobar")).unwrap();
        fs::write(root.join("foo/bar/foobar/blah.txt"), b"blah").unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn dist(&self) -> PathBuf {
        self.root().join("dist")
    }

    pub fn darwin_binary(&self) -> Artifact {
        Artifact::binary(
            "mybin",
            self.dist().join("darwinamd64/mybin"),
            "darwin",
            "amd64",
        )
        .with_extra(ArtifactExtra {
            binary: Some("mybin".into()),
            ..Default::default()
        })
    }

    pub fn windows_binary(&self) -> Artifact {
        Artifact::binary(
            "mybin.exe",
            self.dist().join("windowsamd64/mybin.exe"),
            "windows",
            "amd64",
        )
        .with_extra(ArtifactExtra {
            binary: Some("mybin".into()),
            extension: Some(".exe".into()),
            ..Default::default()
        })
    }
}

/// Entry names of a tar.gz archive, in archive order, without trailing `/`.
pub fn tar_names(path: &Path) -> Vec<String> {
    let mut archive = tar::Archive::new(GzDecoder::new(File::open(path).unwrap()));
    archive
        .entries()
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            let name = entry.path().unwrap().to_string_lossy().into_owned();
            name.trim_end_matches('/').to_string()
        })
        .collect()
}

/// Entry names of a zip archive, in archive order, without trailing `/`.
pub fn zip_names(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| {
            archive
                .by_index(i)
                .unwrap()
                .name()
                .trim_end_matches('/')
                .to_string()
        })
        .collect()
}
