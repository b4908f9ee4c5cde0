//! Tarball location and upload.

use crate::checksum::checksum_file;
use crate::config::PublishConfig;
use crate::error::Result;
use crate::keygen::{Artifact, ArtifactBody, ArtifactUpload, KeygenClient, Release};
use std::path::PathBuf;

/// Content type of packed tarballs
pub const TARBALL_CONTENT_TYPE: &str = "application/tar+gzip";

/// Convert a package name into the dash-case form `npm pack` uses in file names.
///
/// `@acme/myWidgets` becomes `acme-my-widgets`. Runs of dashes are kept.
pub fn dashify(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;

    for c in input.trim().chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push('-');
        }
        if c.is_ascii_alphanumeric() || c == '_' || ('\u{C0}'..='\u{17E}').contains(&c) {
            out.push(c);
        } else {
            out.push('-');
        }
        prev = Some(c);
    }

    out.trim_matches('-').to_lowercase()
}

/// `<dashified name>-<version>.tgz`
pub fn tarball_file_name(package_name: &str, version: &str) -> String {
    format!("{}-{}.tgz", dashify(package_name), version)
}

/// Path of the pre-built tarball for the configured package
pub fn tarball_path(config: &PublishConfig) -> PathBuf {
    config
        .dist_dir
        .join(tarball_file_name(&config.package_name, &config.package_version))
}

/// Upload the tarball as an artifact of `release`
pub async fn publish_tarball(
    client: &KeygenClient,
    config: &PublishConfig,
    release: &Release,
) -> Result<Artifact> {
    let path = tarball_path(config);
    let checksum = checksum_file(&path).await?;
    let filesize = tokio::fs::metadata(&path).await?.len();

    log::debug!("Tarball {} sha512-{}", path.display(), checksum);

    client
        .upload_artifact(ArtifactUpload {
            release_id: release.id.clone(),
            content_type: TARBALL_CONTENT_TYPE,
            body: ArtifactBody::File(path),
            checksum: Some(checksum),
            filename: format!("{}/{}.tgz", config.package_name, config.package_version),
            filetype: "tgz",
            filesize,
        })
        .await
}
