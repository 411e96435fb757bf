//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Release archive assembly for per-target build artifacts
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_archive",
    version,
    about = "Packages per-target build artifacts into release archives",
    long_about = "Groups the binaries listed in an artifacts file by target, packages each target
as tar.gz, zip, or a renamed binary according to the [archive] configuration, and
writes the resulting artifact registry as JSON.

Usage:
  kodegen_bundler_archive --artifacts dist/artifacts.json --tag v1.2.3
  kodegen_bundler_archive --config release.toml --artifacts build.json --tag v1.2.3 --dist out

Exit code 0 = every target was packaged."
)]
pub struct Args {
    /// Project configuration file (TOML with an [archive] table)
    #[arg(short, long, value_name = "PATH", default_value = ".kodegen-archive.toml")]
    pub config: PathBuf,

    /// JSON file listing the build artifacts to package
    #[arg(short, long, value_name = "PATH")]
    pub artifacts: PathBuf,

    /// Release tag, e.g. v1.2.3 (the version is the tag without its leading v)
    #[arg(short, long, value_name = "TAG", env = "KODEGEN_RELEASE_TAG")]
    pub tag: String,

    /// Directory file patterns are resolved against (default: config file directory)
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Distribution directory (overrides `dist` from the config file)
    #[arg(short, long, value_name = "DIR")]
    pub dist: Option<PathBuf>,

    /// Maximum number of targets packaged concurrently
    #[arg(short = 'j', long, value_name = "N")]
    pub parallelism: Option<usize>,

    /// Where to write the resulting artifact registry (default: <dist>/artifacts.json)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.tag.trim().is_empty() {
            return Err("Tag cannot be empty".to_string());
        }
        if self.parallelism == Some(0) {
            return Err("Parallelism must be at least 1".to_string());
        }
        Ok(())
    }
}
