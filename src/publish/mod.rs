//! Release publishing workflow.
//!
//! Steps run strictly in order: create release, upload tarball, upload
//! manifest, publish. Publishing is last so a release with a missing
//! artifact never becomes visible. A failure part way leaves the draft
//! release in place; nothing is rolled back.

mod manifest;
mod tarball;

pub use manifest::{MANIFEST_CONTENT_TYPE, get_manifest, publish_manifest};
pub use tarball::{TARBALL_CONTENT_TYPE, dashify, publish_tarball, tarball_file_name, tarball_path};

use crate::cli::RuntimeConfig;
use crate::config::PublishConfig;
use crate::error::{ConfigError, Result};
use crate::keygen::{Artifact, KeygenClient, Release};

/// Everything created by a successful run
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    /// Release as returned by the publish action
    pub release: Release,
    /// Tarball artifact
    pub tarball: Artifact,
    /// Manifest artifact
    pub manifest: Artifact,
}

/// Publishes one package version to Keygen
#[derive(Debug, Clone)]
pub struct Publisher {
    config: PublishConfig,
    client: KeygenClient,
}

impl Publisher {
    /// Create a publisher for a resolved configuration
    pub fn new(config: PublishConfig) -> Result<Self> {
        let client = KeygenClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Configuration in use
    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    /// Run the full publish sequence
    pub async fn run(&self, output: &RuntimeConfig) -> Result<PublishOutcome> {
        let path = tarball_path(&self.config);
        let exists = tokio::fs::metadata(&path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !exists {
            return Err(ConfigError::TarballNotFound { path }.into());
        }

        output.println(&format!(
            "🚀 Publishing {}@{}",
            self.config.package_name, self.config.package_version
        ));

        let release = self.client.create_release(&self.config.package_version).await?;
        output.success_println(&format!("Created draft release {}", release.id));

        let tarball = publish_tarball(&self.client, &self.config, &release).await?;
        output.success_println(&format!("Uploaded tarball artifact {}", tarball.id));

        let manifest = publish_manifest(&self.client, &self.config, &release).await?;
        output.success_println(&format!("Uploaded manifest artifact {}", manifest.id));

        let release = self.client.publish_release(&release).await?;
        output.success_println(&format!("Published release {}", release.id));

        Ok(PublishOutcome {
            release,
            tarball,
            manifest,
        })
    }
}
