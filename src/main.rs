//! Kodegen Bundler Archive - release archive assembly for per-target binaries.
//!
//! This binary packages build artifacts into tar.gz / zip archives or renamed
//! binaries and records the results as uploadable artifacts.

use kodegen_bundler_archive::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
