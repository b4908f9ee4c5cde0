//! Command line argument parsing.
//!
//! Every setting has an environment binding; the tool is normally driven
//! entirely by environment variables from CI.

use crate::config::DEFAULT_API_URL;
use clap::Parser;
use std::path::PathBuf;

/// Publish an npm-style package release to Keygen
#[derive(Parser, Debug)]
#[command(
    name = "keygen_publish",
    version,
    about = "Publish an npm-style package release to Keygen",
    long_about = "Create a Keygen release, upload the packed tarball and a registry manifest, then publish the release.

Usage:
  KEYGEN_ACCOUNT_ID=... KEYGEN_PRODUCT_ID=... KEYGEN_PRODUCT_TOKEN=... keygen_publish
  keygen_publish --dist-dir build/dist --package-json packages/cli/package.json"
)]
pub struct Args {
    /// Keygen account identifier
    #[arg(long, env = "KEYGEN_ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// Keygen product identifier
    #[arg(long, env = "KEYGEN_PRODUCT_ID")]
    pub product_id: Option<String>,

    /// Keygen product token
    #[arg(long, env = "KEYGEN_PRODUCT_TOKEN", hide_env_values = true)]
    pub product_token: Option<String>,

    /// Package name (defaults to package.json "name")
    #[arg(long, env = "PACKAGE_NAME")]
    pub package_name: Option<String>,

    /// Package version (defaults to package.json "version")
    #[arg(long, env = "PACKAGE_VERSION")]
    pub package_version: Option<String>,

    /// Path to package.json
    #[arg(long, value_name = "PATH", default_value = "package.json")]
    pub package_json: PathBuf,

    /// Directory containing the packed tarball
    #[arg(long, value_name = "DIR", default_value = "dist")]
    pub dist_dir: PathBuf,

    /// Keygen API base URL
    #[arg(long, env = "KEYGEN_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new() -> Self {
        Self {
            output: super::OutputManager::new(false),
        }
    }

    /// Runtime configuration that prints nothing except errors
    pub fn quiet() -> Self {
        Self {
            output: super::OutputManager::new(true),
        }
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}
