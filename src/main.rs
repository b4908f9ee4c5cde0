//! keygen_publish - publish npm-style package releases to Keygen.
//!
//! Creates a draft release, uploads the tarball and registry manifest, then
//! publishes the release.

use keygen_publish::cli;
use keygen_publish::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = OutputManager::new(false);
            output.error(&format!("Fatal error: {e}"));
            process::exit(1);
        }
    }
}
